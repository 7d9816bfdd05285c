//! Termination signals
//!
//! SIGHUP, SIGINT and SIGQUIT only raise a flag. The event loop checks it
//! at the top of every iteration; the signal also interrupts a pending
//! channel wait so the check happens promptly.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

static TERMINATE: AtomicBool = AtomicBool::new(false);

const SIGNALS: [libc::c_int; 3] = [libc::SIGHUP, libc::SIGINT, libc::SIGQUIT];

extern "C" fn on_signal(_: libc::c_int) {
    TERMINATE.store(true, Ordering::SeqCst);
}

/// Install the handlers
pub fn install() -> io::Result<()> {
    for signal in SIGNALS {
        // SAFETY: the handler only stores to an atomic
        let previous = unsafe { libc::signal(signal, on_signal as libc::sighandler_t) };
        if previous == libc::SIG_ERR {
            return Err(io::Error::last_os_error());
        }
    }
    debug!("termination handlers installed");
    Ok(())
}

/// Whether a termination signal arrived
pub fn terminate_requested() -> bool {
    TERMINATE.load(Ordering::SeqCst)
}
