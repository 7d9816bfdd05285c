//! sysfs backlight with SEEPROM-stored brightness
//!
//! The user's brightness lives as one byte (0..=255) in the panel SEEPROM.
//! It is scaled onto the driver range `1..=max_brightness` and ramped up
//! from the lowest level over about one second.

use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use bootglow_hal::{Backlight, BacklightError};
use log::{debug, info, warn};

/// Directory listing the backlight drivers
pub const BACKLIGHT_CLASS_DIR: &str = "/sys/class/backlight";

/// Panel SEEPROM on i2c bus 0, address 0x54
pub const SEEPROM_PATH: &str = "/sys/class/i2c-dev/i2c-0/device/0-0054/eeprom";

/// Offset of the brightness byte inside the SEEPROM
pub const SEEPROM_BRIGHTNESS_OFFSET: u64 = 128;

/// Used when the SEEPROM cannot be read
pub const DEFAULT_SEEPROM_LEVEL: u8 = 255;

/// Used when the driver reports a `max_brightness` outside 1..=255
pub const FALLBACK_MAX_BRIGHTNESS: u32 = 100;

/// Total duration of the brightness ramp
pub const RAMP_DURATION: Duration = Duration::from_secs(1);

/// Backlight driven through `/sys/class/backlight/<device>/`
#[derive(Debug, Clone)]
pub struct SysfsBacklight {
    class_dir: PathBuf,
    seeprom: PathBuf,
    ramp: Duration,
}

impl Default for SysfsBacklight {
    fn default() -> Self {
        Self::new(BACKLIGHT_CLASS_DIR, SEEPROM_PATH)
    }
}

impl SysfsBacklight {
    pub fn new(class_dir: impl Into<PathBuf>, seeprom: impl Into<PathBuf>) -> Self {
        Self {
            class_dir: class_dir.into(),
            seeprom: seeprom.into(),
            ramp: RAMP_DURATION,
        }
    }

    /// Override the ramp duration (zero disables the pauses)
    pub fn with_ramp(mut self, ramp: Duration) -> Self {
        self.ramp = ramp;
        self
    }

    fn device_dir(&self) -> Result<PathBuf, BacklightError> {
        let entries = fs::read_dir(&self.class_dir).map_err(|_| BacklightError::NotFound)?;
        entries
            .filter_map(Result::ok)
            .find(|entry| !entry.file_name().to_string_lossy().starts_with('.'))
            .map(|entry| entry.path())
            .ok_or(BacklightError::NotFound)
    }

    fn seeprom_level(&self) -> u8 {
        match read_byte_at(&self.seeprom, SEEPROM_BRIGHTNESS_OFFSET) {
            Ok(level) => level,
            Err(e) => {
                warn!("cannot read brightness from {}: {}", self.seeprom.display(), e);
                DEFAULT_SEEPROM_LEVEL
            }
        }
    }
}

impl Backlight for SysfsBacklight {
    fn restore(&mut self) -> Result<(), BacklightError> {
        let device = self.device_dir()?;

        let raw = fs::read_to_string(device.join("max_brightness"))
            .map_err(|_| BacklightError::Read)?;
        let max = raw
            .trim()
            .parse::<i64>()
            .map(sanitize_max)
            .map_err(|_| BacklightError::Read)?;

        let stored = self.seeprom_level();
        let target = scale_level(stored, max);
        info!(
            "backlight {}: level {} of {} (stored {})",
            device.display(),
            target,
            max,
            stored
        );

        let brightness = device.join("brightness");
        let step = self.ramp / target;
        for level in 1..target {
            write_level(&brightness, level)?;
            if !step.is_zero() {
                thread::sleep(step);
            }
        }
        write_level(&brightness, target)
    }
}

/// Keep `max_brightness` inside 1..=255
pub fn sanitize_max(raw: i64) -> u32 {
    match u32::try_from(raw) {
        Ok(max @ 1..=255) => max,
        _ => FALLBACK_MAX_BRIGHTNESS,
    }
}

/// Map a stored 0..=255 level onto `1..=max`, rounding up
pub fn scale_level(stored: u8, max: u32) -> u32 {
    let max = max.max(1);
    let scaled = (u32::from(stored) * max).div_ceil(255);
    scaled.clamp(1, max)
}

fn read_byte_at(path: &Path, offset: u64) -> std::io::Result<u8> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    let mut byte = [0u8; 1];
    file.read_exact(&mut byte)?;
    Ok(byte[0])
}

fn write_level(path: &Path, level: u32) -> Result<(), BacklightError> {
    debug!("brightness {}", level);
    fs::write(path, level.to_string()).map_err(|e| {
        warn!("cannot write {}: {}", path.display(), e);
        BacklightError::Write
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_sysfs(max: &str, stored: Option<u8>) -> (tempfile::TempDir, SysfsBacklight) {
        let root = tempfile::tempdir().unwrap();
        let device = root.path().join("class/backlight");
        fs::create_dir_all(device.join("panel0")).unwrap();
        fs::write(device.join("panel0/max_brightness"), max).unwrap();

        let seeprom = root.path().join("eeprom");
        if let Some(level) = stored {
            let mut data = vec![0u8; 256];
            data[128] = level;
            fs::write(&seeprom, data).unwrap();
        }

        let backlight = SysfsBacklight::new(device, seeprom).with_ramp(Duration::ZERO);
        (root, backlight)
    }

    fn brightness(root: &tempfile::TempDir) -> String {
        fs::read_to_string(root.path().join("class/backlight/panel0/brightness")).unwrap()
    }

    #[test]
    fn test_scale_level() {
        assert_eq!(scale_level(255, 100), 100);
        assert_eq!(scale_level(0, 100), 1);
        assert_eq!(scale_level(128, 100), 51);
        assert_eq!(scale_level(1, 255), 1);
        assert_eq!(scale_level(200, 7), 6);
    }

    #[test]
    fn test_sanitize_max() {
        assert_eq!(sanitize_max(255), 255);
        assert_eq!(sanitize_max(1), 1);
        assert_eq!(sanitize_max(0), 100);
        assert_eq!(sanitize_max(1023), 100);
        assert_eq!(sanitize_max(-5), 100);
    }

    #[test]
    fn test_restore_from_seeprom() {
        let (root, mut backlight) = fake_sysfs("7\n", Some(128));
        backlight.restore().unwrap();
        assert_eq!(brightness(&root), "4");
    }

    #[test]
    fn test_unreadable_seeprom_means_full_brightness() {
        let (root, mut backlight) = fake_sysfs("50\n", None);
        backlight.restore().unwrap();
        assert_eq!(brightness(&root), "50");
    }

    #[test]
    fn test_out_of_range_max() {
        let (root, mut backlight) = fake_sysfs("4095\n", Some(255));
        backlight.restore().unwrap();
        assert_eq!(brightness(&root), "100");
    }

    #[test]
    fn test_garbage_max_is_an_error() {
        let (_root, mut backlight) = fake_sysfs("abc", Some(255));
        assert_eq!(backlight.restore(), Err(BacklightError::Read));
    }

    #[test]
    fn test_no_device() {
        let root = tempfile::tempdir().unwrap();
        let mut backlight = SysfsBacklight::new(root.path(), root.path().join("eeprom"));
        assert_eq!(backlight.restore(), Err(BacklightError::NotFound));
    }
}
