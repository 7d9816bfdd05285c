//! Launcher sync file

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use bootglow_hal::{LauncherError, LauncherStatus, LauncherSync};
use log::{info, warn};

/// Writes the launcher status keyword to a plain file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLauncher {
    path: PathBuf,
}

impl FileLauncher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sync file `name` inside `dir` (normally `TMPDIR`)
    pub fn in_dir(dir: impl AsRef<Path>, name: &str) -> Self {
        Self::new(dir.as_ref().join(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LauncherSync for FileLauncher {
    fn notify(&mut self, status: LauncherStatus) -> Result<(), LauncherError> {
        let mut file = File::create(&self.path).map_err(|e| {
            warn!("cannot open {}: {}", self.path.display(), e);
            LauncherError::Open
        })?;
        file.write_all(status.as_str().as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| {
                warn!("cannot write {}: {}", self.path.display(), e);
                LauncherError::Write
            })?;

        info!("launcher status: {}", status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_status_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let mut launcher = FileLauncher::in_dir(dir.path(), "taptap");

        launcher.notify(LauncherStatus::Wait).unwrap();
        assert_eq!(fs::read_to_string(launcher.path()).unwrap(), "wait");

        launcher.notify(LauncherStatus::DisableKiosk).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("taptap")).unwrap(),
            "disable-kiosk"
        );
    }

    #[test]
    fn test_unwritable_location() {
        let mut launcher = FileLauncher::new("/nonexistent/dir/taptap");
        assert_eq!(
            launcher.notify(LauncherStatus::Wait),
            Err(LauncherError::Open)
        );
    }
}
