//! Backlight abstractions

use core::fmt;

/// Errors from backlight control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacklightError {
    /// No backlight device present
    NotFound,
    /// Reading the device limits failed
    Read,
    /// Writing a brightness level failed
    Write,
}

impl fmt::Display for BacklightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BacklightError::NotFound => f.write_str("no backlight device"),
            BacklightError::Read => f.write_str("cannot read backlight limits"),
            BacklightError::Write => f.write_str("cannot set backlight level"),
        }
    }
}

/// Panel backlight
pub trait Backlight {
    /// Bring the backlight to the user's stored brightness
    fn restore(&mut self) -> Result<(), BacklightError>;
}
