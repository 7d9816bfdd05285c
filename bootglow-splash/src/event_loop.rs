//! Splash event loop
//!
//! One iteration runs the phases below in order; each returns [`Flow`]:
//!
//! 1. `poll_touch`: count tap edges, draw the indicator, hand over to the
//!    boot-mode controller once the gesture fires
//! 2. `poll_console`: stop when the VT is being switched away
//! 3. `wait_channel`: bounded wait for a command
//! 4. `handle_timeout` or `handle_readable`
//!
//! The termination flag is checked before every iteration.

use bootglow_core::config::{CalibrationPolicy, GestureConfig};
use bootglow_core::gesture::TapTapDetector;
use bootglow_core::state::BootMode;
use bootglow_display::{InfiniteProgress, Screen};
use bootglow_hal::{ChannelError, ConsoleSwitch, ControlChannel, FrameMemory, Readiness, TouchInput};
use bootglow_protocol::{Command, Frame, FrameAccumulator, CHANNEL_BUFFER_SIZE};
use log::{debug, error, info, trace, warn};

use crate::controller::BootModeController;
use crate::platform::Platform;
use crate::runtime::RuntimeContext;

/// Wait before the first timeout
pub const INITIAL_TIMEOUT_MS: u32 = 40;

/// Wait after a timeout, paces the infinite progress animation
pub const ANIMATION_TIMEOUT_MS: u32 = 20;

/// Wait after a command was read
pub const COMMAND_TIMEOUT_MS: u32 = 100;

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// `QUIT` received
    Quit,
    /// Termination signal
    Signal,
    /// The VT is being switched away
    ConsoleSwitch,
    /// The tap-tap gesture ran the service menu to this mode
    Gesture(BootMode),
    /// The channel wait was interrupted
    Interrupted,
    /// The channel failed and could not be recovered
    ChannelFailed,
}

/// Result of one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop(LoopExit),
}

/// Loop behavior fixed at startup
#[derive(Debug, Clone, Copy)]
pub struct LoopSettings {
    pub gesture: GestureConfig,
    pub calibration: CalibrationPolicy,
    pub fast_boot: bool,
    pub touch_enabled: bool,
    /// Present in infinite-progress mode
    pub infinite: Option<InfiniteProgress>,
}

impl From<&RuntimeContext> for LoopSettings {
    fn from(context: &RuntimeContext) -> Self {
        let progress = &context.config.progress;
        Self {
            gesture: context.config.gesture,
            calibration: context.profile.calibration,
            fast_boot: context.fast_boot(),
            touch_enabled: context.options.touch,
            infinite: context
                .options
                .infinite_progress
                .then(|| InfiniteProgress::new(progress.infinite_relative_size, progress.infinite_step)),
        }
    }
}

pub struct EventLoop<'a, M: FrameMemory, P: Platform> {
    screen: &'a mut Screen<M>,
    platform: &'a mut P,
    touch: Option<P::Touch>,
    detector: TapTapDetector,
    settings: LoopSettings,
    accumulator: FrameAccumulator,
    timeout_ms: u32,
    /// Last progress value, persisted on `QUIT`
    progress: Option<i32>,
}

impl<'a, M: FrameMemory, P: Platform> EventLoop<'a, M, P> {
    pub fn new(screen: &'a mut Screen<M>, platform: &'a mut P, settings: LoopSettings) -> Self {
        Self {
            screen,
            platform,
            touch: None,
            detector: TapTapDetector::new(&settings.gesture),
            settings,
            accumulator: FrameAccumulator::new(),
            timeout_ms: INITIAL_TIMEOUT_MS,
            progress: None,
        }
    }

    /// Run until a phase stops the loop
    pub fn run(&mut self) -> LoopExit {
        info!("waiting for commands");
        loop {
            if self.platform.terminate_requested() {
                info!("termination signal received");
                return LoopExit::Signal;
            }
            if let Flow::Stop(exit) = self.iterate() {
                debug!("loop stopped: {:?}", exit);
                return exit;
            }
        }
    }

    fn iterate(&mut self) -> Flow {
        if let Flow::Stop(exit) = self.poll_touch() {
            return Flow::Stop(exit);
        }
        if let Flow::Stop(exit) = self.poll_console() {
            return Flow::Stop(exit);
        }
        match self.wait_channel() {
            Ok(Readiness::TimedOut) => self.handle_timeout(),
            Ok(Readiness::Readable) => self.handle_readable(),
            Err(exit) => Flow::Stop(exit),
        }
    }

    fn poll_touch(&mut self) -> Flow {
        if !self.settings.touch_enabled {
            return Flow::Continue;
        }
        if self.touch.is_none() {
            self.touch = self.platform.open_touch();
        }
        let Some(touch) = self.touch.as_mut() else {
            return Flow::Continue;
        };

        let mut edges = 0;
        let mut failed = false;
        loop {
            match touch.poll_edge() {
                Ok(Some(edge)) => {
                    self.detector.feed(edge);
                    edges += 1;
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("{}, reopening", e);
                    failed = true;
                    break;
                }
            }
        }

        let flow = if edges > 0 {
            self.on_taps()
        } else {
            Flow::Continue
        };
        if failed {
            self.touch = None;
        }
        flow
    }

    /// New edges arrived: show progress, run the menu once triggered
    fn on_taps(&mut self) -> Flow {
        trace!("{} taps", self.detector.tap_count());
        if let Some(indicator) = self.detector.indicator() {
            self.screen.draw_message(&indicator);
        }
        if !self.detector.triggered() {
            return Flow::Continue;
        }

        let Some(touch) = self.touch.as_mut() else {
            return Flow::Continue;
        };
        let mode = BootModeController::new(
            &mut *self.screen,
            &mut *self.platform,
            touch,
            &mut self.detector,
            self.settings.calibration,
            self.settings.fast_boot,
        )
        .run();
        Flow::Stop(LoopExit::Gesture(mode))
    }

    fn poll_console(&mut self) -> Flow {
        if self.platform.console().vt_requested() {
            info!("console switch requested");
            Flow::Stop(LoopExit::ConsoleSwitch)
        } else {
            Flow::Continue
        }
    }

    fn wait_channel(&mut self) -> Result<Readiness, LoopExit> {
        match self.platform.channel().wait_readable(self.timeout_ms) {
            Ok(readiness) => Ok(readiness),
            Err(ChannelError::Interrupted) if self.platform.terminate_requested() => {
                Err(LoopExit::Signal)
            }
            Err(ChannelError::Interrupted) => {
                debug!("channel wait interrupted");
                Err(LoopExit::Interrupted)
            }
            Err(e) => {
                error!("{}", e);
                Err(LoopExit::ChannelFailed)
            }
        }
    }

    fn handle_timeout(&mut self) -> Flow {
        self.timeout_ms = ANIMATION_TIMEOUT_MS;
        if let Some(progress) = self.settings.infinite.as_mut() {
            self.screen.draw_infinite_progress(progress);
            self.progress = progress.offset();
        }
        Flow::Continue
    }

    fn handle_readable(&mut self) -> Flow {
        self.timeout_ms = COMMAND_TIMEOUT_MS;

        let mut buf = [0u8; CHANNEL_BUFFER_SIZE];
        let len = match self.platform.channel().read(&mut buf) {
            Ok(len) => len,
            Err(e) => {
                warn!("{}", e);
                return Flow::Continue;
            }
        };

        if len == 0 {
            // Last writer went away
            debug!("end of stream, reopening the channel");
            return match self.platform.channel().reopen() {
                Ok(()) => Flow::Continue,
                Err(e) => {
                    error!("{}", e);
                    Flow::Stop(LoopExit::ChannelFailed)
                }
            };
        }

        let frames = match self.accumulator.feed(&buf[..len]) {
            Ok(Some(frames)) => frames,
            Ok(None) => {
                trace!("{} bytes pending", self.accumulator.pending());
                return Flow::Continue;
            }
            Err(e) => {
                warn!("{}", e);
                return Flow::Continue;
            }
        };

        if frames.truncated() {
            warn!("oversized command truncated");
        }
        for frame in frames.iter() {
            if let Flow::Stop(exit) = self.dispatch(&frame) {
                return Flow::Stop(exit);
            }
        }
        Flow::Continue
    }

    fn dispatch(&mut self, frame: &Frame<'_>) -> Flow {
        let command = match Command::from_frame(frame) {
            Ok(command) => command,
            Err(e) => {
                warn!(
                    "ignoring {:?}: {}",
                    String::from_utf8_lossy(frame.as_bytes()),
                    e
                );
                return Flow::Continue;
            }
        };
        debug!("command {}", command.name());

        match command {
            Command::Quit => {
                self.save_progress();
                return Flow::Stop(LoopExit::Quit);
            }
            Command::SetProgress(value) => {
                if self.settings.infinite.is_some() {
                    debug!("PROGRESS ignored in infinite mode");
                } else {
                    self.screen.draw_progress(value);
                    self.progress = Some(value);
                }
            }
            Command::SetMessage(text) => self.screen.draw_message(text),
        }
        Flow::Continue
    }

    fn save_progress(&mut self) {
        let Some(value) = self.progress else {
            return;
        };
        match self.platform.write_progress(value) {
            Ok(()) => debug!("progress {} saved", value),
            Err(e) => warn!("cannot save progress {}: {}", value, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{self, ChannelStep, MockPlatform, ScriptedTouch};
    use bootglow_display::{Rgb, Target};
    use bootglow_hal::{LauncherStatus, TouchEdge};

    fn settings() -> LoopSettings {
        LoopSettings {
            gesture: GestureConfig::default(),
            calibration: CalibrationPolicy::Hide,
            fast_boot: false,
            touch_enabled: true,
            infinite: None,
        }
    }

    fn run(platform: &mut MockPlatform, settings: LoopSettings) -> (LoopExit, Screen<Vec<u8>>) {
        let mut screen = mock::screen(true, false);
        let exit = EventLoop::new(&mut screen, platform, settings).run();
        (exit, screen)
    }

    fn bar_pixel(screen: &Screen<Vec<u8>>, x: i32) -> Rgb {
        // Bar origin: centered, one sixth from the bottom, 4 px drop
        let left = (mock::WIDTH as i32 - 400) / 2;
        let top = mock::HEIGHT as i32 - mock::HEIGHT as i32 / 6 + 4;
        screen.surface().pixel(Target::Live, left + x, top).unwrap()
    }

    #[test]
    fn test_progress_then_quit() {
        let mut platform = MockPlatform::default();
        platform.channel.data(b"PROGRESS 42\0");
        platform.channel.data(b"QUIT\0");

        let (exit, screen) = run(&mut platform, settings());

        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(platform.progress, vec![42]);
        let palette = screen.options().palette;
        assert_eq!(bar_pixel(&screen, 0), palette.bar);
        assert_eq!(bar_pixel(&screen, 167), palette.bar);
        assert_eq!(bar_pixel(&screen, 168), palette.bar_background);
        assert_eq!(bar_pixel(&screen, 399), palette.bar_background);
    }

    #[test]
    fn test_quit_without_progress_writes_nothing() {
        let mut platform = MockPlatform::default();
        platform.channel.data(b"QUIT\n");

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Quit);
        assert!(platform.progress.is_empty());
    }

    #[test]
    fn test_explicit_zero_progress_is_saved() {
        let mut platform = MockPlatform::default();
        platform.channel.data(b"PROGRESS 0\0");
        platform.channel.data(b"QUIT\0");

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(platform.progress, vec![0]);
    }

    #[test]
    fn test_several_frames_in_one_read() {
        let mut platform = MockPlatform::default();
        platform.channel.data(b"MSG booting\0PROGRESS 10\0QUIT\0PROGRESS 90\0");

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(platform.progress, vec![10]);
    }

    #[test]
    fn test_split_frame_waits_for_terminator() {
        let mut platform = MockPlatform::default();
        platform.channel.data(b"PROG");
        platform.channel.data(b"RESS 7");
        platform.channel.data(b"\0QUIT\0");

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(platform.progress, vec![7]);
    }

    #[test]
    fn test_unknown_commands_are_ignored() {
        let mut platform = MockPlatform::default();
        platform.channel.data(b"BOGUS\0PROGRESS 5x\0MSG\0QUIT\0");

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Quit);
        assert!(platform.progress.is_empty());
    }

    #[test]
    fn test_timeout_schedule() {
        let mut platform = MockPlatform::default();
        platform.channel.push(ChannelStep::Timeout);
        platform.channel.data(b"MSG hello\nworld\0");
        platform.channel.push(ChannelStep::Timeout);

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Interrupted);
        assert_eq!(platform.channel.timeouts, vec![40, 20, 100, 20]);
    }

    #[test]
    fn test_end_of_stream_reopens() {
        let mut platform = MockPlatform::default();
        platform.channel.push(ChannelStep::Eof);
        platform.channel.data(b"QUIT\0");

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(platform.channel.reopens, 1);
    }

    #[test]
    fn test_wait_failure_stops() {
        let mut platform = MockPlatform::default();
        platform.channel.push(ChannelStep::Fail(ChannelError::Wait));

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::ChannelFailed);
    }

    #[test]
    fn test_infinite_mode_ignores_progress() {
        let mut platform = MockPlatform::default();
        platform.channel.push(ChannelStep::Timeout);
        platform.channel.push(ChannelStep::Timeout);
        platform.channel.data(b"PROGRESS 50\0");
        platform.channel.data(b"QUIT\0");

        let mut infinite = settings();
        infinite.infinite = Some(InfiniteProgress::new(4, 2));
        let (exit, _) = run(&mut platform, infinite);

        assert_eq!(exit, LoopExit::Quit);
        // Block of 100 px enters at -100 and moves 2 px per tick
        assert_eq!(platform.progress, vec![-96]);
    }

    #[test]
    fn test_signal_stops_before_waiting() {
        let mut platform = MockPlatform {
            terminate: true,
            ..MockPlatform::default()
        };
        platform.channel.data(b"QUIT\0");

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Signal);
        assert!(platform.channel.timeouts.is_empty());
    }

    #[test]
    fn test_console_switch_stops() {
        let mut platform = MockPlatform::default();
        platform.console.requested = true;

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::ConsoleSwitch);
    }

    #[test]
    fn test_gesture_runs_the_menu() {
        let mut platform = MockPlatform::with_touch(ScriptedTouch::new().taps(21));
        platform.channel.push(ChannelStep::Timeout);

        let (exit, _) = run(&mut platform, settings());

        assert_eq!(exit, LoopExit::Gesture(BootMode::Terminal));
        assert_eq!(
            platform.launcher.statuses,
            vec![LauncherStatus::Wait, LauncherStatus::DisableKiosk]
        );
        assert!(platform.channel.timeouts.is_empty());
    }

    #[test]
    fn test_taps_below_trigger_keep_running() {
        let touch = ScriptedTouch::new()
            .taps(5)
            .batch(&[TouchEdge::Pressed, TouchEdge::Released]);
        let mut platform = MockPlatform::with_touch(touch);
        platform.channel.push(ChannelStep::Timeout);
        platform.channel.data(b"QUIT\0");

        let (exit, _) = run(&mut platform, settings());
        assert_eq!(exit, LoopExit::Quit);
        assert!(platform.launcher.statuses.is_empty());
    }

    #[test]
    fn test_missing_touch_is_retried() {
        let mut platform = MockPlatform::default();
        platform.channel.push(ChannelStep::Timeout);
        platform.channel.push(ChannelStep::Timeout);

        run(&mut platform, settings());
        assert_eq!(platform.touch_opens, 3);
    }

    #[test]
    fn test_touch_disabled() {
        let mut platform = MockPlatform::with_touch(ScriptedTouch::new().taps(30));
        platform.channel.data(b"QUIT\0");

        let mut no_touch = settings();
        no_touch.touch_enabled = false;
        let (exit, _) = run(&mut platform, no_touch);

        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(platform.touch_opens, 0);
    }

    #[test]
    fn test_touch_failure_reopens() {
        let touch = ScriptedTouch::new().failure();
        let mut platform = MockPlatform::with_touch(touch);
        platform.channel.push(ChannelStep::Timeout);

        run(&mut platform, settings());
        // Opened, failed, then retried on the next iteration
        assert_eq!(platform.touch_opens, 2);
    }
}
