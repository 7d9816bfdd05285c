//! State machine definition
//!
//! Every screen and side effect of the service gesture is a function of
//! the current mode and an event.

use super::events::Event;

/// Boot-mode states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootMode {
    /// Counting taps, normal splash operation
    Idle,
    /// First countdown: config OS (pressed) vs system settings (released)
    CountdownPrimary,
    /// Fast-boot panels: short countdown straight into the config OS
    CountdownFastBoot,
    /// Boot counter set to recovery, rebooting
    RestartConfigOs,
    /// Second countdown: default mode (released) vs calibration (pressed)
    CountdownSecondary,
    /// Launcher told to open the settings in default mode
    EnterDefaultMode,
    /// Launcher told to open the settings with touch calibration
    EnterTouchCalibration,
    /// Gesture handled, splash loop ends
    Terminal,
}

/// Side effect a mode ends in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootAction {
    /// Boot counter := recovery, sync, reboot
    Reboot,
    /// Launcher := `disable-kiosk`
    DisableKiosk,
    /// Launcher := `disable-kiosk-tchcalibrate`
    DisableKioskCalibrate,
}

impl BootMode {
    /// Check if this mode runs a countdown
    pub fn is_countdown(&self) -> bool {
        matches!(
            self,
            BootMode::CountdownPrimary | BootMode::CountdownSecondary | BootMode::CountdownFastBoot
        )
    }

    /// Check if the gesture has been handled
    pub fn is_terminal(&self) -> bool {
        matches!(self, BootMode::Terminal)
    }

    /// Side effect performed on entering this mode
    pub fn action(&self) -> Option<BootAction> {
        match self {
            BootMode::RestartConfigOs => Some(BootAction::Reboot),
            BootMode::EnterDefaultMode => Some(BootAction::DisableKiosk),
            BootMode::EnterTouchCalibration => Some(BootAction::DisableKioskCalibrate),
            _ => None,
        }
    }

    /// Process an event and return the next mode
    pub fn transition(self, event: Event) -> Self {
        use BootMode::*;
        use Event::*;

        match (self, event) {
            // Gesture fires once
            (Idle, GestureDetected) => CountdownPrimary,
            (Idle, FastBootGestureDetected) => CountdownFastBoot,

            // Primary countdown
            (CountdownPrimary, ExpiredPressed) => RestartConfigOs,
            (CountdownPrimary, ExpiredReleased { calibration_hidden: true }) => EnterDefaultMode,
            (CountdownPrimary, ExpiredReleased { calibration_hidden: false }) => {
                CountdownSecondary
            }

            // Fast-boot countdown
            (CountdownFastBoot, FastBootElapsed) => RestartConfigOs,

            // Secondary countdown
            (CountdownSecondary, ExpiredPressed) => EnterTouchCalibration,
            (CountdownSecondary, ExpiredReleased { .. }) => EnterDefaultMode,

            // Actions
            (RestartConfigOs, ActionComplete) => Terminal,
            (EnterDefaultMode, ActionComplete) => Terminal,
            (EnterTouchCalibration, ActionComplete) => Terminal,

            // Default: stay in current mode
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASED_SHOWN: Event = Event::ExpiredReleased {
        calibration_hidden: false,
    };
    const RELEASED_HIDDEN: Event = Event::ExpiredReleased {
        calibration_hidden: true,
    };

    #[test]
    fn test_gesture_enters_countdown_once() {
        let mode = BootMode::Idle.transition(Event::GestureDetected);
        assert_eq!(mode, BootMode::CountdownPrimary);

        // A second detection during the countdown changes nothing
        assert_eq!(
            mode.transition(Event::GestureDetected),
            BootMode::CountdownPrimary
        );
    }

    #[test]
    fn test_config_os_flow() {
        let mode = BootMode::Idle
            .transition(Event::GestureDetected)
            .transition(Event::ExpiredPressed);
        assert_eq!(mode, BootMode::RestartConfigOs);
        assert_eq!(mode.action(), Some(BootAction::Reboot));
        assert_eq!(mode.transition(Event::ActionComplete), BootMode::Terminal);
    }

    #[test]
    fn test_hidden_calibration_goes_straight_to_default() {
        let mode = BootMode::CountdownPrimary.transition(RELEASED_HIDDEN);
        assert_eq!(mode, BootMode::EnterDefaultMode);
        assert_eq!(mode.action(), Some(BootAction::DisableKiosk));
    }

    #[test]
    fn test_secondary_flow() {
        let secondary = BootMode::CountdownPrimary.transition(RELEASED_SHOWN);
        assert_eq!(secondary, BootMode::CountdownSecondary);

        let calibrate = secondary.transition(Event::ExpiredPressed);
        assert_eq!(calibrate, BootMode::EnterTouchCalibration);
        assert_eq!(calibrate.action(), Some(BootAction::DisableKioskCalibrate));

        let default = secondary.transition(RELEASED_SHOWN);
        assert_eq!(default, BootMode::EnterDefaultMode);
        assert_eq!(default.transition(Event::ActionComplete), BootMode::Terminal);
    }

    #[test]
    fn test_fast_boot_flow() {
        let mode = BootMode::Idle.transition(Event::FastBootGestureDetected);
        assert_eq!(mode, BootMode::CountdownFastBoot);
        assert!(mode.is_countdown());

        // Touch outcome is ignored on the fast-boot path
        assert_eq!(mode.transition(RELEASED_SHOWN), BootMode::CountdownFastBoot);
        assert_eq!(
            mode.transition(Event::FastBootElapsed),
            BootMode::RestartConfigOs
        );
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let events = [
            Event::GestureDetected,
            Event::ExpiredPressed,
            RELEASED_SHOWN,
            Event::ActionComplete,
        ];
        for event in events {
            assert_eq!(BootMode::Terminal.transition(event), BootMode::Terminal);
        }
        assert!(BootMode::Terminal.is_terminal());
        assert_eq!(BootMode::Terminal.action(), None);
    }

    #[test]
    fn test_idle_ignores_countdown_events() {
        assert_eq!(BootMode::Idle.transition(Event::ExpiredPressed), BootMode::Idle);
        assert_eq!(BootMode::Idle.transition(Event::ActionComplete), BootMode::Idle);
    }
}
