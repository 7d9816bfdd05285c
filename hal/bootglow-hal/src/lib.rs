//! bootglow Hardware Abstraction Layer
//!
//! This crate defines the device traits the splash logic talks to. The
//! Linux implementations live in `bootglow-hal-linux`; tests use small
//! in-memory mocks of the same traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  bootglow-splash (event loop, gesture)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bootglow-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ bootglow-hal- │       │  test mocks   │
//! │    linux      │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`framebuffer::FrameMemory`] - Mapped display memory
//! - [`touch::TouchInput`] - Press/release edges from a touchscreen
//! - [`channel::ControlChannel`] - Readiness-polled command pipe
//! - [`storage::BootCounter`] - Boot counter shared with the bootloader
//! - [`launcher::LauncherSync`] - Status handoff to the application launcher
//! - [`console::ConsoleSwitch`] - Virtual console ownership
//! - [`backlight::Backlight`] - Panel brightness restore
//! - [`system::SystemControl`], [`system::Delay`] - Sync, reboot, pacing

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod backlight;
pub mod channel;
pub mod console;
pub mod framebuffer;
pub mod launcher;
pub mod storage;
pub mod system;
pub mod touch;

// Re-export key traits at crate root for convenience
pub use backlight::{Backlight, BacklightError};
pub use channel::{ChannelError, ControlChannel, Readiness};
pub use console::{ConsoleSwitch, NoConsole};
pub use framebuffer::{Bitfield, FrameMemory, ScreenInfo};
pub use launcher::{LauncherError, LauncherStatus, LauncherSync};
pub use storage::{
    BootCounter, StorageError, BOOT_COUNTER_CLEAR, BOOT_COUNTER_MAGIC, BOOT_COUNTER_RECOVERY,
};
pub use system::{Delay, SystemControl, SystemError};
pub use touch::{TouchEdge, TouchError, TouchInput};
