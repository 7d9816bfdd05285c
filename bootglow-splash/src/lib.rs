//! bootglow boot splash
//!
//! The daemon (`bootglow-splash`) draws the boot screen, follows commands
//! written to its FIFO and watches the touchscreen for the tap-tap service
//! gesture. The client (`bootglow-write`) sends one command.
//!
//! | Module | Role |
//! |--------|------|
//! | [`cli`] | command line |
//! | [`config`] | embedded and override `splash.toml` |
//! | [`runtime`] | startup decisions: flags, profile, device paths |
//! | [`signals`] | termination flag |
//! | [`platform`] | device seam |
//! | [`startup`] | first frame, custom splash image |
//! | [`event_loop`] | command and touch loop |
//! | [`controller`] | service menu after the gesture |

pub mod cli;
pub mod config;
pub mod controller;
pub mod event_loop;
pub mod platform;
pub mod runtime;
pub mod signals;
pub mod startup;

pub use controller::BootModeController;
pub use event_loop::{EventLoop, LoopExit, LoopSettings};
pub use platform::{LinuxPlatform, Platform};
pub use runtime::{LaunchOptions, RuntimeContext};
