//! Linux implementations of the bootglow device traits
//!
//! Every type here wraps one kernel interface:
//!
//! | Type | Trait | Interface |
//! |------|-------|-----------|
//! | [`FbDevice`] | `FrameMemory` | `/dev/fb*` ioctls + `mmap` |
//! | [`EvdevTouch`] | `TouchInput` | `/dev/input/event*` |
//! | [`FifoChannel`] | `ControlChannel` | named pipe + `poll` |
//! | [`LinuxBootCounter`] | `BootCounter` | eMMC boot partition or RTC NVRAM |
//! | [`FileLauncher`] | `LauncherSync` | plain file in `TMPDIR` |
//! | [`VtConsole`] | `ConsoleSwitch` | `/dev/tty*` VT ioctls |
//! | [`SysfsBacklight`] | `Backlight` | `/sys/class/backlight` |
//! | [`LinuxSystem`], [`ThreadDelay`] | `SystemControl`, `Delay` | `sync`, `reboot`, sleeps |
//!
//! Opening devices fails with [`DeviceError`]; once open, each type reports
//! through the small error enums of `bootglow-hal`.

pub mod backlight;
pub mod boot_counter;
pub mod console;
pub mod error;
pub mod fifo;
pub mod framebuffer;
pub mod launcher;
pub mod system;
pub mod touch;

pub use backlight::SysfsBacklight;
pub use boot_counter::LinuxBootCounter;
pub use console::VtConsole;
pub use error::DeviceError;
pub use fifo::{write_command, FifoChannel};
pub use framebuffer::FbDevice;
pub use launcher::FileLauncher;
pub use system::{LinuxSystem, ThreadDelay};
pub use touch::EvdevTouch;
