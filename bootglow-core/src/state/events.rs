//! Events that trigger boot-mode transitions

/// Events that can trigger boot-mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Gesture events
    /// Tap count passed the trigger threshold
    GestureDetected,
    /// Tap count passed the trigger threshold on a fast-boot panel
    FastBootGestureDetected,

    // Countdown events
    /// Countdown ran out with the finger down
    ExpiredPressed,
    /// Countdown ran out with the finger up
    ExpiredReleased {
        /// Touch calibration is not offered on this device
        calibration_hidden: bool,
    },
    /// Fast-boot frames shown
    FastBootElapsed,

    // Action events
    /// Side effects of the chosen action are done
    ActionComplete,
}

impl Event {
    /// Check if this event comes from the touch gesture
    pub fn is_gesture_event(&self) -> bool {
        matches!(self, Event::GestureDetected | Event::FastBootGestureDetected)
    }

    /// Check if this event ends a countdown
    pub fn is_countdown_event(&self) -> bool {
        matches!(
            self,
            Event::ExpiredPressed | Event::ExpiredReleased { .. } | Event::FastBootElapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_events() {
        assert!(Event::GestureDetected.is_gesture_event());
        assert!(Event::FastBootGestureDetected.is_gesture_event());
        assert!(!Event::ExpiredPressed.is_gesture_event());
    }

    #[test]
    fn test_countdown_events() {
        assert!(Event::ExpiredPressed.is_countdown_event());
        assert!(Event::ExpiredReleased {
            calibration_hidden: true
        }
        .is_countdown_event());
        assert!(Event::FastBootElapsed.is_countdown_event());
        assert!(!Event::ActionComplete.is_countdown_event());
    }
}
