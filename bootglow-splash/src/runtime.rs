//! Runtime context
//!
//! Everything the splash decides once at startup: configuration, kernel
//! flags, device profile, command line options and the device paths they
//! select. The context is immutable afterwards.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use bootglow_core::config::{BootCounterStore, DeviceProfile, KernelFlags, SplashConfig};
use bootglow_display::Rotation;
use bootglow_hal_linux::LinuxBootCounter;
use log::{debug, info, warn};

use crate::cli::Args;

/// Kernel command line
pub const CMDLINE_PATH: &str = "/proc/cmdline";

/// Used when `TMPDIR` is unset
pub const DEFAULT_TMP_DIR: &str = "/tmp";

/// Framebuffer device override
pub const FBDEV_ENV: &str = "FBDEV";

/// Touch device override
pub const TSDEVICE_ENV: &str = "TSDEVICE";

/// Splash partition override
pub const SPLASH_PARTITION_ENV: &str = "SPLASHPARTITION";

/// Command line switches, as booleans the loop can test directly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOptions {
    pub console_switch: bool,
    pub progress_bar: bool,
    pub infinite_progress: bool,
    pub touch: bool,
    pub blackscreen: bool,
    pub rotation: Rotation,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            console_switch: true,
            progress_bar: true,
            infinite_progress: false,
            touch: true,
            blackscreen: false,
            rotation: Rotation::Deg0,
        }
    }
}

impl From<&Args> for LaunchOptions {
    fn from(args: &Args) -> Self {
        Self {
            console_switch: !args.no_console_switch,
            progress_bar: !args.no_progress_bar,
            infinite_progress: args.infinite_progress,
            touch: !args.notouch,
            blackscreen: args.blackscreen,
            rotation: args.angle,
        }
    }
}

/// Startup decisions shared by the event loop and the controller
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    pub config: SplashConfig,
    pub flags: KernelFlags,
    pub profile: DeviceProfile,
    pub options: LaunchOptions,
    pub tmp_dir: PathBuf,
    pub framebuffer: PathBuf,
    pub touch_candidates: Vec<PathBuf>,
    pub splash_partition: PathBuf,
}

impl RuntimeContext {
    /// Resolve against the running system
    pub fn from_system(options: LaunchOptions, config: SplashConfig) -> Self {
        let cmdline = read_cmdline(Path::new(CMDLINE_PATH));
        Self::resolve(options, config, &cmdline, |name| env::var(name).ok())
    }

    /// Resolve from an explicit command line and environment lookup
    pub fn resolve<F>(options: LaunchOptions, config: SplashConfig, cmdline: &str, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flags = KernelFlags::parse(cmdline);
        let profile = DeviceProfile::lookup(&flags);

        let framebuffer = non_empty(env(FBDEV_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(config.display.device.as_str()));

        let touch_candidates = match non_empty(env(TSDEVICE_ENV)) {
            Some(device) => vec![PathBuf::from(device)],
            None => profile
                .touch_events
                .iter()
                .map(|n| PathBuf::from(format!("/dev/input/event{}", n)))
                .collect(),
        };

        let splash_partition = non_empty(env(SPLASH_PARTITION_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(config.splash_image.partition.as_str()));

        let context = Self {
            tmp_dir: tmp_dir(&env),
            config,
            flags,
            profile,
            options,
            framebuffer,
            touch_candidates,
            splash_partition,
        };
        info!(
            "hw_code {:?}, fast boot {}, framebuffer {}, touch {:?}",
            context.profile.hw_code,
            context.fast_boot(),
            context.framebuffer.display(),
            context.touch_candidates
        );
        context
    }

    /// Fast-boot gesture path enabled
    pub fn fast_boot(&self) -> bool {
        self.flags.fast_boot()
    }

    /// Font scale exponent for the surface's logical width
    pub fn font_scale(&self, logical_width: u32) -> u8 {
        self.config.display.font_scale_for(logical_width)
    }

    pub fn fifo_path(&self) -> PathBuf {
        fifo_path(&self.config, &self.tmp_dir)
    }

    pub fn launcher_path(&self) -> PathBuf {
        self.tmp_dir.join(self.config.channel.launcher_file.as_str())
    }

    pub fn progress_file(&self) -> PathBuf {
        PathBuf::from(self.config.channel.progress_file.as_str())
    }

    pub fn splash_mount_point(&self) -> PathBuf {
        PathBuf::from(self.config.splash_image.mount_point.as_str())
    }

    /// Image file inside the mounted splash partition
    pub fn splash_image_path(&self) -> PathBuf {
        self.splash_mount_point()
            .join(self.config.splash_image.file_name.as_str())
    }

    pub fn boot_counter(&self) -> LinuxBootCounter {
        boot_counter_for(self.profile.boot_counter)
    }
}

/// `TMPDIR`, or `/tmp`
pub fn tmp_dir<F>(env: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(env("TMPDIR"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TMP_DIR))
}

/// Control FIFO location inside `tmp_dir`
pub fn fifo_path(config: &SplashConfig, tmp_dir: &Path) -> PathBuf {
    tmp_dir.join(config.channel.fifo_name.as_str())
}

pub fn boot_counter_for(store: BootCounterStore) -> LinuxBootCounter {
    match store {
        BootCounterStore::Emmc => LinuxBootCounter::emmc(),
        BootCounterStore::Nvram => LinuxBootCounter::nvram(),
    }
}

/// Kernel command line, empty when unreadable
pub fn read_cmdline(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(cmdline) => {
            debug!("kernel command line: {}", cmdline.trim_end());
            cmdline
        }
        Err(e) => {
            warn!("cannot read {}: {}", path.display(), e);
            String::new()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn context(cmdline: &str, vars: &[(&str, &str)]) -> RuntimeContext {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeContext::resolve(
            LaunchOptions::default(),
            SplashConfig::default(),
            cmdline,
            |name| vars.get(name).cloned(),
        )
    }

    #[test]
    fn test_defaults_without_environment() {
        let ctx = context("", &[]);
        assert_eq!(ctx.tmp_dir, PathBuf::from("/tmp"));
        assert_eq!(ctx.fifo_path(), PathBuf::from("/tmp/bootglow_fifo"));
        assert_eq!(ctx.launcher_path(), PathBuf::from("/tmp/taptap"));
        assert_eq!(ctx.framebuffer, PathBuf::from("/dev/fb0"));
        assert_eq!(ctx.touch_candidates, vec![PathBuf::from("/dev/input/event1")]);
        assert_eq!(ctx.splash_partition, PathBuf::from("/dev/mmcblk1p1"));
        assert_eq!(
            ctx.splash_image_path(),
            PathBuf::from("/mnt/factory/splashimage.bin")
        );
        assert_eq!(ctx.boot_counter(), LinuxBootCounter::nvram());
        assert!(!ctx.fast_boot());
    }

    #[test]
    fn test_environment_overrides() {
        let ctx = context(
            "hw_code=123",
            &[
                ("TMPDIR", "/run/splash"),
                ("FBDEV", "/dev/fb1"),
                ("TSDEVICE", "/dev/input/touchscreen0"),
                ("SPLASHPARTITION", "/dev/mmcblk0p3"),
            ],
        );
        assert_eq!(ctx.fifo_path(), PathBuf::from("/run/splash/bootglow_fifo"));
        assert_eq!(ctx.framebuffer, PathBuf::from("/dev/fb1"));
        assert_eq!(
            ctx.touch_candidates,
            vec![PathBuf::from("/dev/input/touchscreen0")]
        );
        assert_eq!(ctx.splash_partition, PathBuf::from("/dev/mmcblk0p3"));
    }

    #[test]
    fn test_empty_variables_are_ignored() {
        let ctx = context("", &[("TMPDIR", ""), ("FBDEV", "")]);
        assert_eq!(ctx.tmp_dir, PathBuf::from("/tmp"));
        assert_eq!(ctx.framebuffer, PathBuf::from("/dev/fb0"));
    }

    #[test]
    fn test_profile_selects_devices() {
        let ctx = context("hw_code=123", &[]);
        assert_eq!(
            ctx.touch_candidates,
            vec![
                PathBuf::from("/dev/input/event1"),
                PathBuf::from("/dev/input/event0")
            ]
        );

        let ctx = context("hw_code=131", &[]);
        assert_eq!(ctx.boot_counter(), LinuxBootCounter::emmc());
    }

    #[test]
    fn test_fast_boot_flags() {
        let ctx = context("hw_code=122 fastboot=y hw_dispid=122", &[]);
        assert!(ctx.fast_boot());
    }

    #[test]
    fn test_options_from_args() {
        let args = Args::parse_from_env(["bootglow-splash", "-n", "-np", "--notouch", "-a", "180"])
            .unwrap();
        let options = LaunchOptions::from(&args);
        assert!(!options.console_switch);
        assert!(!options.progress_bar);
        assert!(!options.touch);
        assert!(!options.infinite_progress);
        assert_eq!(options.rotation, Rotation::Deg180);
    }

    #[test]
    fn test_unreadable_cmdline() {
        assert_eq!(read_cmdline(Path::new("/nonexistent/cmdline")), "");
    }
}
