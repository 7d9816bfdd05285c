//! Boot-mode controller
//!
//! Runs the service menu once the tap-tap gesture fired. The pure
//! transitions live in `bootglow_core::state`; this controller draws each
//! countdown frame, samples the touchscreen between frames and performs
//! the side effect the chosen mode ends in.
//!
//! ```text
//! Idle ─► CountdownPrimary ─┬─ pressed ─────────────► RestartConfigOs ─► (reboot)
//!                           ├─ released, no calib. ─► EnterDefaultMode ─┐
//!                           └─ released ─► CountdownSecondary ─┬────────┤
//!                                                             └─► EnterTouchCalibration ─► Terminal
//! Idle ─► CountdownFastBoot ─► RestartConfigOs
//! ```

use bootglow_core::config::CalibrationPolicy;
use bootglow_core::gesture::countdown::FRAME_DELAY_MS;
use bootglow_core::gesture::{Countdown, CountdownFrame, FastBootCountdown, TapTapDetector};
use bootglow_core::state::{BootAction, BootMode, Event};
use bootglow_display::{assets, RleImage, Rgb, Screen};
use bootglow_hal::{
    BootCounter, Delay, FrameMemory, LauncherStatus, LauncherSync, SystemControl, TouchInput,
    BOOT_COUNTER_RECOVERY,
};
use log::{debug, error, info, warn};

use crate::platform::Platform;

/// Pause on the confirmation screens before acting
pub const CONFIRM_DELAY_MS: u32 = 3000;

/// Pause on the highlighted settings icon before the second countdown
pub const SECONDARY_ENTRY_DELAY_MS: u32 = 300;

/// Pause on the highlighted settings icon when calibration is not offered
pub const DEFAULT_MODE_DELAY_MS: u32 = 200;

/// Backdrop of a chosen icon
pub const HIGHLIGHT: Rgb = Rgb::YELLOW;

/// Service menu state for one gesture
pub struct BootModeController<'a, M: FrameMemory, P: Platform> {
    /// Boot screen
    screen: &'a mut Screen<M>,
    /// Devices
    platform: &'a mut P,
    /// Open touch device, sampled between frames
    touch: &'a mut P::Touch,
    /// Tap state, kept counting while the menu runs
    detector: &'a mut TapTapDetector,
    /// Whether this board offers touch calibration
    calibration: CalibrationPolicy,
    /// Fast-boot panel: short countdown, no choices
    fast_boot: bool,
    /// Countdown shared by both menu screens
    countdown: Countdown,
    /// Current mode
    mode: BootMode,
}

impl<'a, M: FrameMemory, P: Platform> BootModeController<'a, M, P> {
    pub fn new(
        screen: &'a mut Screen<M>,
        platform: &'a mut P,
        touch: &'a mut P::Touch,
        detector: &'a mut TapTapDetector,
        calibration: CalibrationPolicy,
        fast_boot: bool,
    ) -> Self {
        let pressed = detector.state().pressed();
        Self {
            screen,
            platform,
            touch,
            detector,
            calibration,
            fast_boot,
            countdown: Countdown::new(pressed),
            mode: BootMode::Idle,
        }
    }

    /// Run the menu to its end
    ///
    /// Returns [`BootMode::Terminal`] once a launcher choice has been
    /// written. The config OS choice reboots and never returns.
    pub fn run(mut self) -> BootMode {
        let detected = if self.fast_boot {
            Event::FastBootGestureDetected
        } else {
            Event::GestureDetected
        };
        self.mode = self.mode.transition(detected);
        info!(
            "tap-tap detected after {} taps, entering {:?}",
            self.detector.tap_count(),
            self.mode
        );
        self.notify(LauncherStatus::Wait);

        while !self.mode.is_terminal() {
            let event = match self.mode {
                BootMode::CountdownPrimary => self.primary_countdown(),
                BootMode::CountdownSecondary => self.secondary_countdown(),
                BootMode::CountdownFastBoot => self.fast_boot_countdown(),
                BootMode::RestartConfigOs
                | BootMode::EnterDefaultMode
                | BootMode::EnterTouchCalibration => self.perform_action(),
                BootMode::Idle | BootMode::Terminal => break,
            };

            let next = self.mode.transition(event);
            debug!("{:?} --{:?}--> {:?}", self.mode, event, next);
            if next == self.mode {
                warn!("{:?} ignored {:?}", self.mode, event);
                break;
            }
            self.mode = next;
        }
        self.mode
    }

    /// Config OS (pressed) vs system settings (released)
    fn primary_countdown(&mut self) -> Event {
        while let Some(frame) = self.next_frame() {
            if frame.redraw {
                let (icon, text) = primary_frame(frame.seconds, frame.pressed);
                let backdrop = self.text_background();
                self.screen.draw_icon(&icon, backdrop);
                self.screen.draw_message(&text);
            }
            self.platform.delay().delay_ms(FRAME_DELAY_MS);
        }

        if self.countdown.pressed() {
            let text = format!(
                "** TAP-TAP DETECTED  {} **\n\nRESTARTING: CONFIG OS ...\n",
                self.countdown.seconds()
            );
            self.screen.draw_message(&text);
            self.screen.draw_icon(&assets::CONFIG_OS, HIGHLIGHT);
            self.platform.delay().delay_ms(CONFIRM_DELAY_MS);
            return Event::ExpiredPressed;
        }

        let input_devices = self.platform.input_devices();
        let calibration_hidden = self.calibration.hidden(input_devices.as_deref());
        self.screen.draw_icon(&assets::SETTINGS, HIGHLIGHT);
        let pause = if calibration_hidden {
            DEFAULT_MODE_DELAY_MS
        } else {
            SECONDARY_ENTRY_DELAY_MS
        };
        self.platform.delay().delay_ms(pause);
        Event::ExpiredReleased { calibration_hidden }
    }

    /// Default mode (released) vs touchscreen calibration (pressed)
    fn secondary_countdown(&mut self) -> Event {
        self.countdown.restart();
        while let Some(frame) = self.next_frame() {
            if frame.redraw {
                let (icon, text) = secondary_frame(frame.seconds, frame.pressed);
                let backdrop = self.text_background();
                self.screen.draw_icon(&icon, backdrop);
                self.screen.draw_message(&text);
            }
            self.platform.delay().delay_ms(FRAME_DELAY_MS);
        }

        let (icon, event) = if self.countdown.pressed() {
            (assets::CALIBRATION, Event::ExpiredPressed)
        } else {
            (
                assets::SETTINGS,
                Event::ExpiredReleased {
                    calibration_hidden: false,
                },
            )
        };
        self.screen.draw_icon(&icon, HIGHLIGHT);
        self.platform.delay().delay_ms(CONFIRM_DELAY_MS);
        event
    }

    /// Fixed frames straight into the config OS
    fn fast_boot_countdown(&mut self) -> Event {
        for seconds in FastBootCountdown::new() {
            let text = format!(
                "** TAP-TAP DETECTED  {} **\n>> RESTART: CONFIG OS\n",
                seconds
            );
            self.screen.draw_message(&text);
            self.platform.delay().delay_ms(FRAME_DELAY_MS);
        }
        Event::FastBootElapsed
    }

    fn perform_action(&mut self) -> Event {
        match self.mode.action() {
            Some(BootAction::Reboot) => self.restart_config_os(),
            Some(BootAction::DisableKiosk) => self.notify(LauncherStatus::DisableKiosk),
            Some(BootAction::DisableKioskCalibrate) => {
                self.notify(LauncherStatus::DisableKioskCalibrate)
            }
            None => {}
        }
        Event::ActionComplete
    }

    /// Boot counter to recovery, then reboot; halts if the kernel refuses
    fn restart_config_os(&mut self) -> ! {
        info!("restarting into the config OS");
        if let Err(e) = self.platform.boot_counter().set(BOOT_COUNTER_RECOVERY) {
            error!("{}", e);
        }
        self.platform.system().sync();
        if let Err(e) = self.platform.system().reboot() {
            error!("{}", e);
        }
        self.platform.system().halt()
    }

    /// Sample the touchscreen and advance the countdown one frame
    fn next_frame(&mut self) -> Option<CountdownFrame> {
        let pressed = self.sample();
        self.countdown.step(pressed)
    }

    /// Drain pending edges and return the touch status
    fn sample(&mut self) -> bool {
        loop {
            match self.touch.poll_edge() {
                Ok(Some(edge)) => self.detector.feed(edge),
                Ok(None) => break,
                Err(e) => {
                    debug!("{}", e);
                    break;
                }
            }
        }
        self.detector.state().pressed()
    }

    fn text_background(&self) -> Rgb {
        self.screen.options().palette.text_background
    }

    fn notify(&mut self, status: LauncherStatus) {
        if let Err(e) = self.platform.launcher().notify(status) {
            warn!("launcher {}: {}", status, e);
        }
    }
}

fn primary_frame(seconds: i32, pressed: bool) -> (RleImage<'static>, String) {
    let (icon, config_os, settings) = if pressed {
        (assets::CONFIG_OS, ">>", "  ")
    } else {
        (assets::SETTINGS, "  ", ">>")
    };
    let text = format!(
        "** TAP-TAP DETECTED  {} **\n{} RESTART: CONFIG OS\n{} SYSTEM SETTINGS\n",
        seconds, config_os, settings
    );
    (icon, text)
}

fn secondary_frame(seconds: i32, pressed: bool) -> (RleImage<'static>, String) {
    let (icon, default, calibration) = if pressed {
        (assets::CALIBRATION, "  ", ">>")
    } else {
        (assets::SETTINGS, ">>", "  ")
    };
    let text = format!(
        "** ENTERING SYSTEM SETTINGS  {} **\n{} DEFAULT MODE\n{} TOUCHSCREEN CALIBRATION\n",
        seconds, default, calibration
    );
    (icon, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{self, MockPlatform, ScriptedTouch};
    use bootglow_core::config::GestureConfig;
    use bootglow_core::gesture::countdown::COUNTDOWN_START;
    use bootglow_hal::TouchEdge;
    use std::panic::{self, AssertUnwindSafe};

    /// Frames of one uninterrupted countdown
    const FULL_FRAMES: usize = (COUNTDOWN_START / 50 + 1) as usize;

    fn triggered_detector(pressed: bool) -> TapTapDetector {
        let mut detector = TapTapDetector::new(&GestureConfig::default());
        for _ in 0..21 {
            detector.feed(TouchEdge::Pressed);
            detector.feed(TouchEdge::Released);
        }
        if pressed {
            detector.feed(TouchEdge::Pressed);
        }
        assert!(detector.triggered());
        detector
    }

    fn frame_pauses(platform: &MockPlatform) -> usize {
        platform
            .delay
            .pauses
            .iter()
            .filter(|&&ms| ms == FRAME_DELAY_MS)
            .count()
    }

    #[test]
    fn test_frame_texts() {
        let (_, text) = primary_frame(5, true);
        assert_eq!(
            text,
            "** TAP-TAP DETECTED  5 **\n>> RESTART: CONFIG OS\n   SYSTEM SETTINGS\n"
        );
        let (_, text) = primary_frame(3, false);
        assert_eq!(
            text,
            "** TAP-TAP DETECTED  3 **\n   RESTART: CONFIG OS\n>> SYSTEM SETTINGS\n"
        );
        let (_, text) = secondary_frame(4, false);
        assert_eq!(
            text,
            "** ENTERING SYSTEM SETTINGS  4 **\n>> DEFAULT MODE\n   TOUCHSCREEN CALIBRATION\n"
        );
        let (icon, _) = secondary_frame(4, true);
        assert_eq!(icon, assets::CALIBRATION);
    }

    #[test]
    fn test_released_with_hidden_calibration_disables_kiosk() {
        let mut screen = mock::screen(true, false);
        let mut platform = MockPlatform::default();
        let mut touch = ScriptedTouch::new();
        let mut detector = triggered_detector(false);

        let mode = BootModeController::new(
            &mut screen,
            &mut platform,
            &mut touch,
            &mut detector,
            CalibrationPolicy::Hide,
            false,
        )
        .run();

        assert_eq!(mode, BootMode::Terminal);
        assert_eq!(
            platform.launcher.statuses,
            vec![LauncherStatus::Wait, LauncherStatus::DisableKiosk]
        );
        assert_eq!(platform.delay.pauses.len(), FULL_FRAMES + 1);
        assert_eq!(platform.delay.pauses.last(), Some(&DEFAULT_MODE_DELAY_MS));
        assert!(platform.counter.values.is_empty());
    }

    #[test]
    fn test_secondary_countdown_selects_calibration() {
        let mut screen = mock::screen(true, false);
        let mut platform = MockPlatform::default();
        // Released through the primary countdown, then pressed at the
        // start of the secondary one
        let mut touch = ScriptedTouch::new()
            .idle(FULL_FRAMES)
            .batch(&[TouchEdge::Pressed]);
        let mut detector = triggered_detector(false);

        let mode = BootModeController::new(
            &mut screen,
            &mut platform,
            &mut touch,
            &mut detector,
            CalibrationPolicy::Show,
            false,
        )
        .run();

        assert_eq!(mode, BootMode::Terminal);
        assert_eq!(
            platform.launcher.statuses,
            vec![LauncherStatus::Wait, LauncherStatus::DisableKioskCalibrate]
        );
        assert_eq!(frame_pauses(&platform), 2 * FULL_FRAMES);
        assert!(platform.delay.pauses.contains(&SECONDARY_ENTRY_DELAY_MS));
        assert_eq!(platform.delay.pauses.last(), Some(&CONFIRM_DELAY_MS));
    }

    #[test]
    fn test_probe_hides_calibration_for_known_vendor() {
        let mut screen = mock::screen(true, false);
        let mut platform = MockPlatform {
            input_devices: Some("I: Bus=0003 Vendor=0eef Product=0001\n".to_string()),
            ..MockPlatform::default()
        };
        let mut touch = ScriptedTouch::new();
        let mut detector = triggered_detector(false);

        BootModeController::new(
            &mut screen,
            &mut platform,
            &mut touch,
            &mut detector,
            CalibrationPolicy::ProbeVendors,
            false,
        )
        .run();

        assert_eq!(
            platform.launcher.statuses,
            vec![LauncherStatus::Wait, LauncherStatus::DisableKiosk]
        );
    }

    #[test]
    fn test_status_change_restarts_countdown() {
        let mut screen = mock::screen(true, false);
        let mut platform = MockPlatform::default();
        // Lift the finger after five frames, then keep it up
        let mut touch = ScriptedTouch::new()
            .idle(5)
            .batch(&[TouchEdge::Released]);
        let mut detector = triggered_detector(true);

        BootModeController::new(
            &mut screen,
            &mut platform,
            &mut touch,
            &mut detector,
            CalibrationPolicy::Hide,
            false,
        )
        .run();

        // Five frames, a full countdown after the reset, the final pause
        assert_eq!(platform.delay.pauses.len(), 5 + FULL_FRAMES + 1);
        assert_eq!(detector.tap_count(), 22);
    }

    #[test]
    fn test_pressed_expiry_reboots_into_config_os() {
        let mut screen = mock::screen(true, false);
        let mut platform = MockPlatform::default();
        let mut touch = ScriptedTouch::new();
        let mut detector = triggered_detector(true);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            BootModeController::new(
                &mut screen,
                &mut platform,
                &mut touch,
                &mut detector,
                CalibrationPolicy::Show,
                false,
            )
            .run()
        }));

        assert!(outcome.is_err(), "reboot path must not return");
        assert_eq!(platform.launcher.statuses, vec![LauncherStatus::Wait]);
        assert_eq!(platform.counter.values, vec![BOOT_COUNTER_RECOVERY]);
        assert_eq!(platform.system.syncs, 1);
        assert_eq!(platform.system.reboots, 1);
        assert_eq!(platform.delay.pauses.last(), Some(&CONFIRM_DELAY_MS));
    }

    #[test]
    fn test_fast_boot_skips_the_menu() {
        let mut screen = mock::screen(true, true);
        let mut platform = MockPlatform::default();
        let mut touch = ScriptedTouch::new();
        let mut detector = triggered_detector(false);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            BootModeController::new(
                &mut screen,
                &mut platform,
                &mut touch,
                &mut detector,
                CalibrationPolicy::Show,
                true,
            )
            .run()
        }));

        assert!(outcome.is_err());
        assert_eq!(platform.launcher.statuses, vec![LauncherStatus::Wait]);
        assert_eq!(platform.delay.pauses, vec![FRAME_DELAY_MS; 4]);
        assert_eq!(platform.counter.values, vec![BOOT_COUNTER_RECOVERY]);
        assert_eq!(platform.system.reboots, 1);
    }
}
