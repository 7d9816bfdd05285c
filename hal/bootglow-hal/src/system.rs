//! System control abstractions
//!
//! Covers the irreversible end of the gesture flow (sync + reboot) and the
//! fixed pauses that pace countdown frames.

use core::fmt;

/// Errors from system control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemError {
    /// The reboot request was rejected
    RebootRejected,
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::RebootRejected => f.write_str("reboot request rejected"),
        }
    }
}

/// Blocking delays
pub trait Delay {
    /// Pause for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Process-wide system control
pub trait SystemControl {
    /// Flush filesystem buffers to storage
    fn sync(&mut self);

    /// Request an immediate restart
    ///
    /// On success this normally never returns.
    fn reboot(&mut self) -> Result<(), SystemError>;

    /// Stop making progress forever
    ///
    /// Called when a reboot request came back; the system is expected to
    /// go down any moment and nothing else may run.
    fn halt(&mut self) -> !;
}
