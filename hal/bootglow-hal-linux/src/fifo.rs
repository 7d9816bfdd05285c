//! Named-pipe control channel
//!
//! The splash creates the FIFO, reads it non-blocking and removes it when
//! dropped. [`write_command`] is the other end, used by the client binary.

use std::ffi::CString;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::os::fd::AsRawFd;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use bootglow_hal::{ChannelError, ControlChannel, Readiness};
use log::{debug, warn};

use crate::error::DeviceError;

/// Permissions of a freshly created FIFO (before umask)
pub const FIFO_MODE: libc::mode_t = 0o660;

/// Read end of the control FIFO
#[derive(Debug)]
pub struct FifoChannel {
    path: PathBuf,
    file: Option<File>,
}

impl FifoChannel {
    /// Create (or reuse) the FIFO at `path` and open it for reading
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DeviceError> {
        let path = path.as_ref();
        let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| {
            DeviceError::InvalidPath {
                path: path.into(),
            }
        })?;

        // SAFETY: c_path is a valid NUL-terminated string
        if unsafe { libc::mkfifo(c_path.as_ptr(), FIFO_MODE) } != 0 {
            let source = io::Error::last_os_error();
            if source.kind() != io::ErrorKind::AlreadyExists {
                return Err(DeviceError::Fifo {
                    path: path.into(),
                    source,
                });
            }
            debug!("reusing existing fifo {}", path.display());
        }

        let file = open_reader(path).map_err(|e| DeviceError::open(path, e))?;
        Ok(Self {
            path: path.into(),
            file: Some(file),
        })
    }

    /// Location of the FIFO
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ControlChannel for FifoChannel {
    fn wait_readable(&mut self, timeout_ms: u32) -> Result<Readiness, ChannelError> {
        let file = self.file.as_ref().ok_or(ChannelError::Wait)?;
        let mut pfd = libc::pollfd {
            fd: file.as_raw_fd(),
            events: libc::POLLIN,
            revents: 0,
        };
        let timeout = libc::c_int::try_from(timeout_ms).unwrap_or(libc::c_int::MAX);

        // SAFETY: one valid pollfd
        let rc = unsafe { libc::poll(&mut pfd, 1, timeout) };
        match rc {
            0 => Ok(Readiness::TimedOut),
            rc if rc > 0 => Ok(Readiness::Readable),
            _ => {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    Err(ChannelError::Interrupted)
                } else {
                    warn!("poll on {} failed: {}", self.path.display(), err);
                    Err(ChannelError::Wait)
                }
            }
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ChannelError> {
        let file = self.file.as_mut().ok_or(ChannelError::Read)?;
        file.read(buf).map_err(|e| match e.kind() {
            io::ErrorKind::Interrupted => ChannelError::Interrupted,
            _ => ChannelError::Read,
        })
    }

    fn reopen(&mut self) -> Result<(), ChannelError> {
        // Close first so the kernel sees no reader in between
        self.file = None;
        let file = open_reader(&self.path).map_err(|e| {
            warn!("cannot reopen {}: {}", self.path.display(), e);
            ChannelError::Reopen
        })?;
        self.file = Some(file);
        Ok(())
    }
}

impl Drop for FifoChannel {
    fn drop(&mut self) {
        self.file = None;
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!("cannot remove {}: {}", self.path.display(), e);
        }
    }
}

fn open_reader(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
}

/// Send one command to a running splash
///
/// Fails immediately when nobody has the FIFO open for reading. The command
/// is written with its NUL terminator in a single write.
pub fn write_command(path: impl AsRef<Path>, command: &str) -> Result<(), DeviceError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .write(true)
        .custom_flags(libc::O_NONBLOCK)
        .open(path)
        .map_err(|e| DeviceError::open(path, e))?;

    let mut frame = Vec::with_capacity(command.len() + 1);
    frame.extend_from_slice(command.as_bytes());
    frame.push(0);
    file.write_all(&frame)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_wait_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bootglow_fifo");
        let mut channel = FifoChannel::create(&path).unwrap();

        assert_eq!(channel.wait_readable(10), Ok(Readiness::TimedOut));

        write_command(&path, "PROGRESS 42").unwrap();
        assert_eq!(channel.wait_readable(100), Ok(Readiness::Readable));

        let mut buf = [0u8; 64];
        let n = channel.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"PROGRESS 42\0");
    }

    #[test]
    fn test_end_of_stream_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bootglow_fifo");
        let mut channel = FifoChannel::create(&path).unwrap();

        write_command(&path, "QUIT").unwrap();
        let mut buf = [0u8; 16];
        assert_eq!(channel.read(&mut buf), Ok(5));
        // Writer is gone, the pipe now reports end-of-stream
        assert_eq!(channel.read(&mut buf), Ok(0));

        channel.reopen().unwrap();
        assert_eq!(channel.wait_readable(10), Ok(Readiness::TimedOut));
    }

    #[test]
    fn test_existing_fifo_is_reused_and_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bootglow_fifo");

        drop(FifoChannel::create(&path).unwrap());
        assert!(!path.exists());

        let first = FifoChannel::create(&path).unwrap();
        // A second reader on the same node is fine
        let second = FifoChannel::create(&path).unwrap();
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn test_write_without_reader_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_fifo");
        let err = write_command(&path, "QUIT").unwrap_err();
        assert!(matches!(err, DeviceError::Open { .. }));
    }

    #[test]
    fn test_mkfifo_in_missing_dir() {
        let err = FifoChannel::create("/nonexistent/dir/fifo").unwrap_err();
        assert!(matches!(err, DeviceError::Fifo { .. }));
    }
}
