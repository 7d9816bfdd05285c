//! Tap counting

use bootglow_hal::TouchEdge;
use heapless::String;

use crate::config::GestureConfig;

/// Longest indicator string the detector builds
pub const MAX_INDICATOR_LEN: usize = 64;

/// Running gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TapState {
    /// Release edges seen so far
    pub tap_count: u32,
    /// Last sampled status (1 = pressed, 0 = released)
    pub last_status: u8,
}

impl TapState {
    /// Apply one edge
    pub fn apply(&mut self, edge: TouchEdge) {
        if edge == TouchEdge::Released {
            self.tap_count = self.tap_count.saturating_add(1);
        }
        self.last_status = edge.status();
    }

    /// Whether the last sampled edge was a press
    pub fn pressed(&self) -> bool {
        self.last_status == 1
    }
}

/// Edge counter with feedback and trigger thresholds
#[derive(Debug, Clone)]
pub struct TapTapDetector {
    state: TapState,
    feedback_threshold: u32,
    trigger_threshold: u32,
}

impl Default for TapTapDetector {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl TapTapDetector {
    /// Create a detector with the configured thresholds
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            state: TapState::default(),
            feedback_threshold: config.feedback_threshold,
            trigger_threshold: config.trigger_threshold,
        }
    }

    /// Record one edge
    pub fn feed(&mut self, edge: TouchEdge) {
        self.state.apply(edge);
    }

    /// Current state
    pub fn state(&self) -> TapState {
        self.state
    }

    /// Release edges counted so far
    pub fn tap_count(&self) -> u32 {
        self.state.tap_count
    }

    /// Whether the on-screen counter should be shown
    pub fn shows_feedback(&self) -> bool {
        self.state.tap_count > self.feedback_threshold
    }

    /// Whether the boot-mode countdown should start
    pub fn triggered(&self) -> bool {
        self.state.tap_count > self.trigger_threshold
    }

    /// Counter string: one `#` per counted tap, `.` for the rest
    ///
    /// The string is `trigger_threshold` characters long (capped at
    /// [`MAX_INDICATOR_LEN`]). `None` while the count is at or below the
    /// feedback threshold.
    pub fn indicator(&self) -> Option<String<MAX_INDICATOR_LEN>> {
        if !self.shows_feedback() {
            return None;
        }

        let width = (self.trigger_threshold as usize).min(MAX_INDICATOR_LEN);
        let mut out = String::new();
        for i in 0..width {
            let mark = if (i as u32) < self.state.tap_count { '#' } else { '.' };
            // Cannot fail, `width` is capped to the capacity
            let _ = out.push(mark);
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tap(detector: &mut TapTapDetector, times: u32) {
        for _ in 0..times {
            detector.feed(TouchEdge::Pressed);
            detector.feed(TouchEdge::Released);
        }
    }

    #[test]
    fn test_release_counts_press_does_not() {
        let mut detector = TapTapDetector::default();
        detector.feed(TouchEdge::Pressed);
        assert_eq!(detector.tap_count(), 0);
        assert!(detector.state().pressed());

        detector.feed(TouchEdge::Released);
        assert_eq!(detector.tap_count(), 1);
        assert_eq!(detector.state().last_status, 0);
    }

    #[test]
    fn test_feedback_threshold() {
        let mut detector = TapTapDetector::default();
        tap(&mut detector, 4);
        assert!(!detector.shows_feedback());
        assert_eq!(detector.indicator(), None);

        tap(&mut detector, 1);
        assert!(detector.shows_feedback());
        assert_eq!(detector.indicator().unwrap().as_str(), "#####...............");
    }

    #[test]
    fn test_trigger_threshold() {
        let mut detector = TapTapDetector::default();
        tap(&mut detector, 20);
        assert!(!detector.triggered());
        assert_eq!(detector.indicator().unwrap().as_str(), "####################");

        tap(&mut detector, 1);
        assert!(detector.triggered());
    }

    #[test]
    fn test_count_is_never_reset() {
        let mut detector = TapTapDetector::default();
        tap(&mut detector, 3);
        detector.feed(TouchEdge::Pressed);
        detector.feed(TouchEdge::Pressed);
        tap(&mut detector, 2);
        assert_eq!(detector.tap_count(), 5);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = GestureConfig {
            feedback_threshold: 1,
            trigger_threshold: 3,
        };
        let mut detector = TapTapDetector::new(&config);
        tap(&mut detector, 2);
        assert_eq!(detector.indicator().unwrap().as_str(), "##.");
        tap(&mut detector, 2);
        assert!(detector.triggered());
        assert_eq!(detector.indicator().unwrap().as_str(), "###");
    }

    proptest! {
        #[test]
        fn prop_count_matches_releases(edges in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut detector = TapTapDetector::default();
            for &pressed in &edges {
                detector.feed(if pressed { TouchEdge::Pressed } else { TouchEdge::Released });
            }
            let releases = edges.iter().filter(|&&pressed| !pressed).count() as u32;
            prop_assert_eq!(detector.tap_count(), releases);
            prop_assert_eq!(detector.triggered(), releases > 20);
            prop_assert_eq!(detector.state().pressed(), edges.last() == Some(&true));
        }
    }
}
