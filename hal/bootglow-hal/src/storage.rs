//! Boot counter storage
//!
//! The bootloader counts failed boots in a small persistent cell. Writing 0
//! marks a successful boot; writing a value above the bootloader's limit
//! forces the recovery (config) OS on the next boot.

use core::fmt;

/// Value written after a successful boot
pub const BOOT_COUNTER_CLEAR: u8 = 0;

/// Value that forces the recovery OS on the next boot
pub const BOOT_COUNTER_RECOVERY: u8 = 100;

/// Magic byte preceding the counter value in every storage medium
pub const BOOT_COUNTER_MAGIC: u8 = 0xbc;

/// Errors from boot counter storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Storage node could not be opened
    Open,
    /// Write-protect toggle failed
    WriteProtect,
    /// Seek to the counter location failed
    Seek,
    /// Writing the counter failed
    Write,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Open => f.write_str("cannot open boot counter storage"),
            StorageError::WriteProtect => f.write_str("cannot toggle write protection"),
            StorageError::Seek => f.write_str("cannot seek to boot counter"),
            StorageError::Write => f.write_str("boot counter write failed"),
        }
    }
}

/// Persistent boot counter
pub trait BootCounter {
    /// Store `value` as the new counter
    fn set(&mut self, value: u8) -> Result<(), StorageError>;
}

impl<T: BootCounter + ?Sized> BootCounter for &mut T {
    fn set(&mut self, value: u8) -> Result<(), StorageError> {
        (**self).set(value)
    }
}
