//! Device setup errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while opening or configuring a device
#[derive(Debug, Error)]
pub enum DeviceError {
    /// Device node or file could not be opened
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An ioctl on the device failed
    #[error("{request} failed on {}: {source}", .path.display())]
    Ioctl {
        request: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The framebuffer is below 16 bpp and refused both fallback formats
    #[error("unsupported {bits_per_pixel} bpp framebuffer")]
    PixelFormat { bits_per_pixel: u32 },

    /// Mapping display memory failed
    #[error("cannot map {}: {source}", .path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the named pipe failed
    #[error("cannot create fifo {}: {source}", .path.display())]
    Fifo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Path contains an interior NUL byte
    #[error("invalid path {}", .path.display())]
    InvalidPath { path: PathBuf },

    /// None of the candidate touch devices could be opened
    #[error("no touch device available")]
    NoTouchDevice,

    /// Any other I/O failure
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DeviceError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DeviceError::Open {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = DeviceError::open(
            "/dev/fb7",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(err.to_string().starts_with("cannot open /dev/fb7"));

        let err = DeviceError::PixelFormat { bits_per_pixel: 8 };
        assert_eq!(err.to_string(), "unsupported 8 bpp framebuffer");
    }
}
