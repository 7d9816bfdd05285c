//! Process-level system control

use std::io;
use std::thread;
use std::time::Duration;

use bootglow_hal::{Delay, SystemControl, SystemError};
use log::{error, info};

/// `sync(2)` and `reboot(2)` on the running kernel
#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxSystem;

impl SystemControl for LinuxSystem {
    fn sync(&mut self) {
        // SAFETY: no preconditions
        unsafe { libc::sync() };
    }

    fn reboot(&mut self) -> Result<(), SystemError> {
        info!("rebooting");
        // SAFETY: no preconditions; on success this does not return
        let rc = unsafe { libc::reboot(libc::RB_AUTOBOOT) };
        if rc != 0 {
            error!("reboot failed: {}", io::Error::last_os_error());
        }
        Err(SystemError::RebootRejected)
    }

    fn halt(&mut self) -> ! {
        error!("waiting for the system to go down");
        loop {
            thread::sleep(Duration::from_secs(60));
        }
    }
}

/// Delay backed by `thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
