//! Virtual console ownership
//!
//! While the splash is up it owns a graphics-mode virtual terminal so the
//! kernel console does not scribble over the framebuffer.

/// Virtual console switching
pub trait ConsoleSwitch {
    /// Move to a free terminal in graphics mode
    fn switch(&mut self);

    /// Whether another process asked to switch away from our terminal
    ///
    /// Implementations acknowledge the request before returning `true`.
    fn vt_requested(&mut self) -> bool;

    /// Restore text mode and the terminal that was active before `switch`
    fn reset(&mut self);
}

/// Console switching disabled from the command line
#[derive(Debug, Default, Clone, Copy)]
pub struct NoConsole;

impl ConsoleSwitch for NoConsole {
    fn switch(&mut self) {}

    fn vt_requested(&mut self) -> bool {
        false
    }

    fn reset(&mut self) {}
}
