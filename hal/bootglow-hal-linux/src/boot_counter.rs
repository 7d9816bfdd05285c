//! Boot counter storage on eMMC or RTC NVRAM
//!
//! Both media hold the same two bytes, `[BOOT_COUNTER_MAGIC, value]`. The
//! eMMC copy lives in the second boot partition, which the kernel keeps
//! read-only until `force_ro` is cleared.

use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use bootglow_hal::{BootCounter, StorageError, BOOT_COUNTER_MAGIC};
use log::{debug, warn};

/// eMMC boot partition holding the counter
pub const EMMC_BOOT_DEVICE: &str = "/dev/mmcblk1boot1";

/// Write-protect switch of [`EMMC_BOOT_DEVICE`]
pub const EMMC_FORCE_RO: &str = "/sys/block/mmcblk1boot1/force_ro";

/// Byte offset of the counter inside the boot partition
pub const EMMC_COUNTER_OFFSET: u64 = 0x80000;

/// RTC battery-backed RAM holding the counter
pub const NVRAM_DEVICE: &str = "/sys/class/rtc/rtc0/device/nvram";

/// Boot counter backed by a device file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinuxBootCounter {
    /// eMMC boot partition, unlocked around the write
    Emmc {
        device: PathBuf,
        force_ro: PathBuf,
        offset: u64,
    },
    /// RTC NVRAM, written from its first byte
    Nvram { device: PathBuf },
}

impl LinuxBootCounter {
    /// Counter in the standard eMMC boot partition
    pub fn emmc() -> Self {
        LinuxBootCounter::Emmc {
            device: EMMC_BOOT_DEVICE.into(),
            force_ro: EMMC_FORCE_RO.into(),
            offset: EMMC_COUNTER_OFFSET,
        }
    }

    /// Counter in the standard RTC NVRAM
    pub fn nvram() -> Self {
        LinuxBootCounter::Nvram {
            device: NVRAM_DEVICE.into(),
        }
    }
}

impl BootCounter for LinuxBootCounter {
    fn set(&mut self, value: u8) -> Result<(), StorageError> {
        let record = [BOOT_COUNTER_MAGIC, value];
        match self {
            LinuxBootCounter::Emmc {
                device,
                force_ro,
                offset,
            } => {
                debug!("setting boot counter {} in eMMC", value);
                write_emmc(device, force_ro, *offset, &record)
            }
            LinuxBootCounter::Nvram { device } => {
                debug!("setting boot counter {} in NVRAM", value);
                let mut file = open_for_write(device)?;
                file.write_all(&record).map_err(|e| {
                    warn!("boot counter write failed: {}", e);
                    StorageError::Write
                })
            }
        }
    }
}

fn write_emmc(
    device: &Path,
    force_ro: &Path,
    offset: u64,
    record: &[u8; 2],
) -> Result<(), StorageError> {
    let mut file = open_for_write(device)?;
    file.seek(SeekFrom::Start(offset))
        .map_err(|_| StorageError::Seek)?;

    set_force_ro(force_ro, false)?;
    let written = file.write_all(record).and_then(|_| file.flush());
    drop(file);

    // Lock again even when the write failed
    let locked = set_force_ro(force_ro, true);
    written.map_err(|e| {
        warn!("boot counter write failed: {}", e);
        StorageError::Write
    })?;
    locked
}

fn open_for_write(path: &Path) -> Result<File, StorageError> {
    // Never truncate, the target may be a block device
    OpenOptions::new().write(true).open(path).map_err(|e| {
        warn!("cannot open {}: {}", path.display(), e);
        StorageError::Open
    })
}

fn set_force_ro(path: &Path, read_only: bool) -> Result<(), StorageError> {
    let flag: &[u8] = if read_only { b"1" } else { b"0" };
    OpenOptions::new()
        .write(true)
        .open(path)
        .and_then(|mut f| f.write_all(flag))
        .map_err(|e| {
            warn!("cannot set {} to read_only={}: {}", path.display(), read_only, e);
            StorageError::WriteProtect
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootglow_hal::BOOT_COUNTER_RECOVERY;
    use std::fs;

    #[test]
    fn test_nvram_record() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut counter = LinuxBootCounter::Nvram {
            device: file.path().into(),
        };

        counter.set(BOOT_COUNTER_RECOVERY).unwrap();
        assert_eq!(fs::read(file.path()).unwrap(), [0xbc, 100]);

        counter.set(0).unwrap();
        assert_eq!(fs::read(file.path()).unwrap(), [0xbc, 0]);
    }

    #[test]
    fn test_emmc_record_at_offset_and_relocked() {
        let dir = tempfile::tempdir().unwrap();
        let device = dir.path().join("mmcblk1boot1");
        let force_ro = dir.path().join("force_ro");
        fs::write(&device, [0xffu8; 64]).unwrap();
        fs::write(&force_ro, "1").unwrap();

        let mut counter = LinuxBootCounter::Emmc {
            device: device.clone(),
            force_ro: force_ro.clone(),
            offset: 16,
        };
        counter.set(7).unwrap();

        let data = fs::read(&device).unwrap();
        assert_eq!(data.len(), 64);
        assert_eq!(&data[16..18], &[0xbc, 7]);
        assert_eq!(data[15], 0xff);
        assert_eq!(data[18], 0xff);
        assert_eq!(fs::read_to_string(&force_ro).unwrap(), "1");
    }

    #[test]
    fn test_missing_device() {
        let mut counter = LinuxBootCounter::Nvram {
            device: "/nonexistent/nvram".into(),
        };
        assert_eq!(counter.set(0), Err(StorageError::Open));
    }

    #[test]
    fn test_missing_write_protect_switch() {
        let dir = tempfile::tempdir().unwrap();
        let device = dir.path().join("mmcblk1boot1");
        fs::write(&device, [0u8; 8]).unwrap();

        let mut counter = LinuxBootCounter::Emmc {
            device,
            force_ro: dir.path().join("missing_force_ro"),
            offset: 0,
        };
        assert_eq!(counter.set(0), Err(StorageError::WriteProtect));
    }

    #[test]
    fn test_default_locations() {
        assert_eq!(
            LinuxBootCounter::emmc(),
            LinuxBootCounter::Emmc {
                device: PathBuf::from("/dev/mmcblk1boot1"),
                force_ro: PathBuf::from("/sys/block/mmcblk1boot1/force_ro"),
                offset: 0x80000,
            }
        );
        assert!(matches!(LinuxBootCounter::nvram(), LinuxBootCounter::Nvram { .. }));
    }
}
