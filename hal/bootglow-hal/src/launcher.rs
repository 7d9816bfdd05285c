//! Launcher synchronization
//!
//! The application launcher that starts after the splash reads a status
//! keyword to decide whether to wait, start in kiosk mode, or open the
//! system settings.

use core::fmt;

/// Status keywords understood by the launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherStatus {
    /// Hold off, a boot-mode decision is in progress
    Wait,
    /// Open the system settings in default mode
    DisableKiosk,
    /// Open the system settings and start touch calibration
    DisableKioskCalibrate,
}

impl LauncherStatus {
    /// Keyword written for the launcher
    pub fn as_str(self) -> &'static str {
        match self {
            LauncherStatus::Wait => "wait",
            LauncherStatus::DisableKiosk => "disable-kiosk",
            LauncherStatus::DisableKioskCalibrate => "disable-kiosk-tchcalibrate",
        }
    }
}

impl fmt::Display for LauncherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from launcher synchronization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherError {
    /// Sync file could not be created
    Open,
    /// Writing the keyword failed
    Write,
}

impl fmt::Display for LauncherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LauncherError::Open => f.write_str("cannot open launcher sync file"),
            LauncherError::Write => f.write_str("launcher sync write failed"),
        }
    }
}

/// Status handoff to the launcher
pub trait LauncherSync {
    /// Publish `status`, replacing any previous one
    fn notify(&mut self, status: LauncherStatus) -> Result<(), LauncherError>;
}

impl<T: LauncherSync + ?Sized> LauncherSync for &mut T {
    fn notify(&mut self, status: LauncherStatus) -> Result<(), LauncherError> {
        (**self).notify(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_keywords() {
        assert_eq!(LauncherStatus::Wait.as_str(), "wait");
        assert_eq!(LauncherStatus::DisableKiosk.as_str(), "disable-kiosk");
        assert_eq!(
            LauncherStatus::DisableKioskCalibrate.as_str(),
            "disable-kiosk-tchcalibrate"
        );
    }
}
