//! Control channel abstractions
//!
//! The control channel is a byte stream written by other boot scripts.
//! It is polled for readiness with a timeout so the caller can interleave
//! animation and touch polling.

use core::fmt;

/// Outcome of a readiness wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Bytes (or end-of-stream) are available
    Readable,
    /// The timeout elapsed with nothing to read
    TimedOut,
}

/// Errors from the control channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// The wait was interrupted by a signal
    Interrupted,
    /// Waiting for readiness failed
    Wait,
    /// Reading failed
    Read,
    /// Reopening the channel after end-of-stream failed
    Reopen,
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::Interrupted => f.write_str("wait interrupted by signal"),
            ChannelError::Wait => f.write_str("readiness wait failed"),
            ChannelError::Read => f.write_str("channel read failed"),
            ChannelError::Reopen => f.write_str("channel reopen failed"),
        }
    }
}

/// Readiness-polled byte channel
pub trait ControlChannel {
    /// Wait up to `timeout_ms` for the channel to become readable
    fn wait_readable(&mut self, timeout_ms: u32) -> Result<Readiness, ChannelError>;

    /// Read available bytes into `buf`
    ///
    /// Returns 0 on end-of-stream (every writer closed the channel).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError>;

    /// Close and reopen the channel after end-of-stream
    fn reopen(&mut self) -> Result<(), ChannelError>;
}
