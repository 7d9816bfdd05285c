//! Device seam of the splash
//!
//! The event loop and the boot-mode controller only talk to devices
//! through [`Platform`]. [`LinuxPlatform`] bundles the Linux HAL types;
//! tests use a recording mock.

use std::fs;
use std::io;
use std::path::PathBuf;

use bootglow_hal::{
    BootCounter, ConsoleSwitch, ControlChannel, Delay, LauncherSync, SystemControl, TouchInput,
};
use bootglow_hal_linux::{
    EvdevTouch, FifoChannel, FileLauncher, LinuxBootCounter, LinuxSystem, ThreadDelay, VtConsole,
};
use log::{debug, info, warn};

use crate::runtime::RuntimeContext;
use crate::signals;

/// Input device list used by the calibration probe
pub const INPUT_DEVICES_PATH: &str = "/proc/bus/input/devices";

/// Everything the splash needs from the system once it is running
pub trait Platform {
    type Touch: TouchInput;
    type Channel: ControlChannel;
    type Console: ConsoleSwitch;
    type Launcher: LauncherSync;
    type Counter: BootCounter;
    type System: SystemControl;
    type Delay: Delay;

    /// Try to open the touch device, `None` while it is not there
    fn open_touch(&mut self) -> Option<Self::Touch>;

    fn channel(&mut self) -> &mut Self::Channel;

    fn console(&mut self) -> &mut Self::Console;

    fn launcher(&mut self) -> &mut Self::Launcher;

    fn boot_counter(&mut self) -> &mut Self::Counter;

    fn system(&mut self) -> &mut Self::System;

    fn delay(&mut self) -> &mut Self::Delay;

    /// Contents of the kernel input device list, `None` when unreadable
    fn input_devices(&mut self) -> Option<String>;

    /// Persist the last progress value on exit
    fn write_progress(&mut self, value: i32) -> io::Result<()>;

    /// A termination signal arrived
    fn terminate_requested(&self) -> bool;
}

/// The running Linux system
pub struct LinuxPlatform {
    touch_candidates: Vec<PathBuf>,
    touch_reported: bool,
    channel: FifoChannel,
    console: VtConsole,
    launcher: FileLauncher,
    counter: LinuxBootCounter,
    system: LinuxSystem,
    delay: ThreadDelay,
    progress_file: PathBuf,
}

impl LinuxPlatform {
    pub fn new(context: &RuntimeContext, channel: FifoChannel, console: VtConsole) -> Self {
        Self {
            touch_candidates: context.touch_candidates.clone(),
            touch_reported: false,
            channel,
            console,
            launcher: FileLauncher::new(context.launcher_path()),
            counter: context.boot_counter(),
            system: LinuxSystem,
            delay: ThreadDelay,
            progress_file: context.progress_file(),
        }
    }

    /// Unlink the control FIFO and hand back the console
    pub fn release(self) -> VtConsole {
        drop(self.channel);
        self.console
    }
}

impl Platform for LinuxPlatform {
    type Touch = EvdevTouch;
    type Channel = FifoChannel;
    type Console = VtConsole;
    type Launcher = FileLauncher;
    type Counter = LinuxBootCounter;
    type System = LinuxSystem;
    type Delay = ThreadDelay;

    fn open_touch(&mut self) -> Option<EvdevTouch> {
        match EvdevTouch::open_first(&self.touch_candidates) {
            Ok(touch) => {
                info!("touch input on {}", touch.path().display());
                self.touch_reported = false;
                Some(touch)
            }
            Err(e) => {
                // Retried every iteration, only the first miss is worth a warning
                if !self.touch_reported {
                    warn!("{}", e);
                    self.touch_reported = true;
                } else {
                    debug!("{}", e);
                }
                None
            }
        }
    }

    fn channel(&mut self) -> &mut FifoChannel {
        &mut self.channel
    }

    fn console(&mut self) -> &mut VtConsole {
        &mut self.console
    }

    fn launcher(&mut self) -> &mut FileLauncher {
        &mut self.launcher
    }

    fn boot_counter(&mut self) -> &mut LinuxBootCounter {
        &mut self.counter
    }

    fn system(&mut self) -> &mut LinuxSystem {
        &mut self.system
    }

    fn delay(&mut self) -> &mut ThreadDelay {
        &mut self.delay
    }

    fn input_devices(&mut self) -> Option<String> {
        match fs::read_to_string(INPUT_DEVICES_PATH) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("cannot read {}: {}", INPUT_DEVICES_PATH, e);
                None
            }
        }
    }

    fn write_progress(&mut self, value: i32) -> io::Result<()> {
        fs::write(&self.progress_file, format!("{}\n", value))
    }

    fn terminate_requested(&self) -> bool {
        signals::terminate_requested()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use crate::config;
    use crate::runtime::LaunchOptions;
    use bootglow_hal::LauncherStatus;

    fn linux_platform(dir: &tempfile::TempDir) -> LinuxPlatform {
        let tmp = dir.path().to_str().unwrap().to_string();
        let args = Args::parse_from_env(["bootglow-splash"]).unwrap();
        let mut context = RuntimeContext::resolve(
            LaunchOptions::from(&args),
            config::embedded(),
            "",
            |name| match name {
                "TMPDIR" => Some(tmp.clone()),
                "TSDEVICE" => Some("/nonexistent/event9".to_string()),
                _ => None,
            },
        );
        let _ = context.config.channel.progress_file.clear();
        let _ = context
            .config
            .channel
            .progress_file
            .push_str(dir.path().join("progress").to_str().unwrap());
        let channel = FifoChannel::create(context.fifo_path()).unwrap();
        LinuxPlatform::new(&context, channel, VtConsole::new())
    }

    #[test]
    fn test_progress_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut platform = linux_platform(&dir);
        platform.write_progress(-42).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("progress")).unwrap(), "-42\n");
    }

    #[test]
    fn test_launcher_in_tmp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut platform = linux_platform(&dir);
        platform.launcher().notify(LauncherStatus::Wait).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("taptap")).unwrap(), "wait");
    }

    #[test]
    fn test_missing_touch_device() {
        let dir = tempfile::tempdir().unwrap();
        let mut platform = linux_platform(&dir);
        assert!(platform.open_touch().is_none());
        assert!(platform.open_touch().is_none());
    }

    #[test]
    fn test_release_unlinks_fifo() {
        let dir = tempfile::tempdir().unwrap();
        let platform = linux_platform(&dir);
        let fifo = dir.path().join("bootglow_fifo");
        assert!(fifo.exists());
        let console = platform.release();
        assert_eq!(console.vt(), None);
        assert!(!fifo.exists());
    }
}
