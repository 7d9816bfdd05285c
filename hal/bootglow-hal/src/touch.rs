//! Touch input abstractions
//!
//! The splash only cares about press and release transitions of the
//! primary contact; coordinates are never read.

use core::fmt;

/// One touch transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchEdge {
    /// Finger (or pen) went down
    Pressed,
    /// Finger (or pen) lifted
    Released,
}

impl TouchEdge {
    /// Status value used by the gesture logic (1 = pressed, 0 = released)
    pub fn status(self) -> u8 {
        match self {
            TouchEdge::Pressed => 1,
            TouchEdge::Released => 0,
        }
    }
}

/// Errors from touch input devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchError {
    /// Device node could not be opened
    Unavailable,
    /// Read failed for a reason other than "no data yet"
    Read,
}

impl fmt::Display for TouchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TouchError::Unavailable => f.write_str("touch device unavailable"),
            TouchError::Read => f.write_str("touch device read failed"),
        }
    }
}

/// Non-blocking source of touch edges
pub trait TouchInput {
    /// Return the next pending edge, or `None` when nothing is queued
    ///
    /// Must never block. Events other than press/release of the primary
    /// contact are consumed and skipped.
    fn poll_edge(&mut self) -> Result<Option<TouchEdge>, TouchError>;
}

impl<T: TouchInput + ?Sized> TouchInput for &mut T {
    fn poll_edge(&mut self) -> Result<Option<TouchEdge>, TouchError> {
        (**self).poll_edge()
    }
}
