//! evdev touchscreen input
//!
//! Reads raw `input_event` records from `/dev/input/eventN` without
//! blocking and reports press/release of the primary contact.

use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use bootglow_hal::{TouchEdge, TouchError, TouchInput};
use log::{debug, trace, warn};

use crate::error::DeviceError;

/// Size of one kernel `input_event` record
pub const EVENT_SIZE: usize = std::mem::size_of::<libc::input_event>();

/// Key event type
pub const EV_KEY: u16 = 0x01;

/// Touch contact key
pub const BTN_TOUCH: u16 = 0x14a;

/// Left button, reported by some resistive controllers instead of `BTN_TOUCH`
pub const BTN_LEFT: u16 = 0x110;

/// Non-blocking evdev touchscreen
#[derive(Debug)]
pub struct EvdevTouch {
    file: File,
    path: PathBuf,
}

impl EvdevTouch {
    /// Open one event device
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DeviceError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .map_err(|e| DeviceError::open(path, e))?;

        debug!("touch input on {}", path.display());
        Ok(Self {
            file,
            path: path.into(),
        })
    }

    /// Open the first candidate that exists and can be read
    pub fn open_first<P: AsRef<Path>>(candidates: &[P]) -> Result<Self, DeviceError> {
        for candidate in candidates {
            match Self::open(candidate) {
                Ok(touch) => return Ok(touch),
                Err(e) => debug!("{}", e),
            }
        }
        Err(DeviceError::NoTouchDevice)
    }

    /// Device node in use
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TouchInput for EvdevTouch {
    fn poll_edge(&mut self) -> Result<Option<TouchEdge>, TouchError> {
        let mut record = [0u8; EVENT_SIZE];

        loop {
            match self.file.read(&mut record) {
                Ok(0) => return Ok(None),
                Ok(n) if n == EVENT_SIZE => {
                    if let Some(edge) = decode_event(&record) {
                        trace!("touch {:?}", edge);
                        return Ok(Some(edge));
                    }
                }
                Ok(n) => {
                    warn!("short read of {} bytes from {}", n, self.path.display());
                    return Err(TouchError::Read);
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(None),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("touch read on {} failed: {}", self.path.display(), e);
                    return Err(TouchError::Read);
                }
            }
        }
    }
}

/// Decode one `input_event` record into a touch edge
///
/// The record ends with `type: u16`, `code: u16`, `value: i32` in native
/// byte order, preceded by a timestamp whose size depends on the ABI.
pub fn decode_event(record: &[u8]) -> Option<TouchEdge> {
    let tail = record.get(record.len().checked_sub(8)?..)?;
    let kind = u16::from_ne_bytes([tail[0], tail[1]]);
    let code = u16::from_ne_bytes([tail[2], tail[3]]);
    let value = i32::from_ne_bytes([tail[4], tail[5], tail[6], tail[7]]);

    if kind != EV_KEY || !(code == BTN_TOUCH || code == BTN_LEFT) {
        return None;
    }
    match value {
        0 => Some(TouchEdge::Released),
        1 => Some(TouchEdge::Pressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(kind: u16, code: u16, value: i32) -> [u8; EVENT_SIZE] {
        let mut out = [0u8; EVENT_SIZE];
        let tail = EVENT_SIZE - 8;
        out[tail..tail + 2].copy_from_slice(&kind.to_ne_bytes());
        out[tail + 2..tail + 4].copy_from_slice(&code.to_ne_bytes());
        out[tail + 4..].copy_from_slice(&value.to_ne_bytes());
        out
    }

    #[test]
    fn test_decode_touch_and_left_button() {
        assert_eq!(
            decode_event(&record(EV_KEY, BTN_TOUCH, 1)),
            Some(TouchEdge::Pressed)
        );
        assert_eq!(
            decode_event(&record(EV_KEY, BTN_LEFT, 0)),
            Some(TouchEdge::Released)
        );
    }

    #[test]
    fn test_decode_ignores_other_events() {
        // EV_ABS position
        assert_eq!(decode_event(&record(0x03, 0x00, 512)), None);
        // SYN_REPORT
        assert_eq!(decode_event(&record(0x00, 0x00, 0)), None);
        // Autorepeat
        assert_eq!(decode_event(&record(EV_KEY, BTN_TOUCH, 2)), None);
        // Other key
        assert_eq!(decode_event(&record(EV_KEY, 0x1c, 1)), None);
        assert_eq!(decode_event(&[0u8; 4]), None);
    }

    #[test]
    fn test_poll_skips_noise_between_edges() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for rec in [
            record(EV_KEY, BTN_TOUCH, 1),
            record(0x03, 0x00, 100),
            record(0x00, 0x00, 0),
            record(EV_KEY, BTN_TOUCH, 0),
        ] {
            file.write_all(&rec).unwrap();
        }
        file.flush().unwrap();

        let mut touch = EvdevTouch::open(file.path()).unwrap();
        assert_eq!(touch.poll_edge(), Ok(Some(TouchEdge::Pressed)));
        assert_eq!(touch.poll_edge(), Ok(Some(TouchEdge::Released)));
        assert_eq!(touch.poll_edge(), Ok(None));
    }

    #[test]
    fn test_open_first_falls_through() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let candidates = [
            PathBuf::from("/nonexistent/event9"),
            file.path().to_path_buf(),
        ];

        let touch = EvdevTouch::open_first(&candidates).unwrap();
        assert_eq!(touch.path(), file.path());

        let err = EvdevTouch::open_first(&candidates[..1]).unwrap_err();
        assert!(matches!(err, DeviceError::NoTouchDevice));
    }
}
