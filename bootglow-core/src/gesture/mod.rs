//! Tap-tap service gesture
//!
//! A long run of taps during boot asks for the service menu. The detector
//! counts release edges for the whole life of the splash; once the count
//! passes the trigger threshold the boot-mode controller takes over and runs
//! one or two debounced countdowns where holding or lifting the finger picks
//! the outcome.

pub mod countdown;
pub mod detector;

pub use countdown::{Countdown, CountdownFrame, FastBootCountdown};
pub use detector::{TapState, TapTapDetector, MAX_INDICATOR_LEN};
