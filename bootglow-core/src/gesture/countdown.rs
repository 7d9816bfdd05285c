//! Debounced countdown
//!
//! The remaining time is counted in 1/200 s units: it starts at
//! [`COUNTDOWN_START`] and drops by [`COUNTDOWN_STEP`] per frame, with the
//! caller sleeping [`FRAME_DELAY_MS`] between frames. Any change of the
//! sampled touch status restarts it from the top, so a choice only sticks
//! once the finger has stayed put for the whole countdown.

/// Initial remaining time
pub const COUNTDOWN_START: i32 = 1000;

/// Decrement per frame
pub const COUNTDOWN_STEP: i32 = 50;

/// Remaining-time units per displayed second
pub const UNITS_PER_SECOND: i32 = 200;

/// Pause between frames
pub const FRAME_DELAY_MS: u32 = 200;

/// Initial remaining time of the fast-boot countdown
pub const FAST_BOOT_START: i32 = 200;

/// What the caller has to do for one countdown frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownFrame {
    /// Number to show on screen
    pub seconds: i32,
    /// Whether the screen must be redrawn this frame
    pub redraw: bool,
    /// Status the frame was computed for
    pub pressed: bool,
}

/// Countdown state shared by the primary and secondary screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: i32,
    previous: bool,
    drawn: Option<bool>,
}

impl Countdown {
    /// Start a countdown from the status sampled when the gesture fired
    pub fn new(pressed: bool) -> Self {
        Self {
            remaining: COUNTDOWN_START,
            previous: pressed,
            drawn: None,
        }
    }

    /// Run again from the top, keeping the status history
    ///
    /// The secondary countdown continues from where the primary one left
    /// the touch status, so an unchanged finger does not restart it.
    pub fn restart(&mut self) {
        self.remaining = COUNTDOWN_START;
    }

    /// Advance one frame with the freshly sampled status
    ///
    /// Returns `None` once the countdown has expired.
    pub fn step(&mut self, pressed: bool) -> Option<CountdownFrame> {
        if self.expired() {
            return None;
        }

        if self.remaining % UNITS_PER_SECOND == 0 {
            self.drawn = None;
        }

        if pressed != self.previous {
            self.remaining = COUNTDOWN_START;
        }
        self.previous = pressed;

        let redraw = self.drawn != Some(pressed);
        if redraw {
            self.drawn = Some(pressed);
        }

        let frame = CountdownFrame {
            seconds: self.seconds(),
            redraw,
            pressed,
        };
        self.remaining -= COUNTDOWN_STEP;
        Some(frame)
    }

    /// Whether all frames have been produced
    pub fn expired(&self) -> bool {
        self.remaining < 0
    }

    /// Number shown for the current remaining time
    pub fn seconds(&self) -> i32 {
        self.remaining / UNITS_PER_SECOND
    }

    /// Status sampled on the last frame
    pub fn pressed(&self) -> bool {
        self.previous
    }
}

/// Fixed four-frame countdown of the fast-boot path
///
/// Yields the number to show on each frame; touch is not sampled.
#[derive(Debug, Clone)]
pub struct FastBootCountdown {
    remaining: i32,
}

impl Default for FastBootCountdown {
    fn default() -> Self {
        Self::new()
    }
}

impl FastBootCountdown {
    pub fn new() -> Self {
        Self {
            remaining: FAST_BOOT_START,
        }
    }
}

impl Iterator for FastBootCountdown {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.remaining <= 0 {
            return None;
        }
        let seconds = self.remaining / UNITS_PER_SECOND;
        self.remaining -= COUNTDOWN_STEP;
        Some(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_steady(countdown: &mut Countdown, pressed: bool) -> usize {
        let mut frames = 0;
        while countdown.step(pressed).is_some() {
            frames += 1;
        }
        frames
    }

    #[test]
    fn test_steady_status_runs_full_length() {
        let mut countdown = Countdown::new(false);
        // 1000, 950, ..., 0
        assert_eq!(run_steady(&mut countdown, false), 21);
        assert!(countdown.expired());
        assert_eq!(countdown.seconds(), 0);
    }

    #[test]
    fn test_redraw_schedule() {
        let mut countdown = Countdown::new(true);
        let mut redraws = heapless::Vec::<i32, 32>::new();
        let mut remaining = COUNTDOWN_START;
        while let Some(frame) = countdown.step(true) {
            if frame.redraw {
                redraws.push(remaining).unwrap();
            }
            remaining -= COUNTDOWN_STEP;
        }
        // First frame, then every full second
        assert_eq!(redraws.as_slice(), &[1000, 800, 600, 400, 200, 0]);
    }

    #[test]
    fn test_seconds_displayed() {
        let mut countdown = Countdown::new(false);
        let first = countdown.step(false).unwrap();
        assert_eq!(first.seconds, 5);
        let second = countdown.step(false).unwrap();
        assert_eq!(second.seconds, 4);
    }

    #[test]
    fn test_status_change_resets_and_redraws() {
        let mut countdown = Countdown::new(false);
        for _ in 0..10 {
            countdown.step(false);
        }
        assert_eq!(countdown.seconds(), 2);

        let frame = countdown.step(true).unwrap();
        assert!(frame.redraw);
        assert!(frame.pressed);
        assert_eq!(frame.seconds, 5);

        // Status held from here on: the full countdown minus the frame above
        assert_eq!(run_steady(&mut countdown, true), 20);
        assert!(countdown.pressed());
    }

    #[test]
    fn test_restart_keeps_history() {
        let mut countdown = Countdown::new(true);
        run_steady(&mut countdown, true);

        countdown.restart();
        assert!(!countdown.expired());
        // Same status as before: no reset, no forced redraw except the
        // full-second one at the top
        let frame = countdown.step(true).unwrap();
        assert!(frame.redraw);
        let frame = countdown.step(true).unwrap();
        assert!(!frame.redraw);
    }

    #[test]
    fn test_fast_boot_frames() {
        let frames: heapless::Vec<i32, 8> = FastBootCountdown::new().collect();
        assert_eq!(frames.as_slice(), &[1, 0, 0, 0]);
    }
}
