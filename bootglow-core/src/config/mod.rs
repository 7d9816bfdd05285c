//! Configuration types
//!
//! Splash look and timing, kernel command line flags, and the per-device
//! profile table resolved once at startup.

pub mod cmdline;
pub mod device;
pub mod types;

pub use cmdline::*;
pub use device::*;
pub use types::*;
