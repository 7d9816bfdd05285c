//! Virtual terminal switching
//!
//! The splash moves to a free VT in graphics mode and asks the kernel to
//! signal it (SIGUSR1) before switching away, so it can step aside cleanly.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::sync::atomic::{AtomicBool, Ordering};

use bootglow_hal::ConsoleSwitch;
use log::{debug, info, warn};

const VT_OPENQRY: u32 = 0x5600;
const VT_SETMODE: u32 = 0x5602;
const VT_GETSTATE: u32 = 0x5603;
const VT_RELDISP: u32 = 0x5605;
const VT_ACTIVATE: u32 = 0x5606;
const VT_WAITACTIVE: u32 = 0x5607;
const KDSETMODE: u32 = 0x4b3a;

const KD_TEXT: libc::c_int = 0x00;
const KD_GRAPHICS: libc::c_int = 0x01;

const VT_AUTO: libc::c_char = 0x00;
const VT_PROCESS: libc::c_char = 0x01;
const VT_ACKACQ: libc::c_int = 0x02;

/// Console used to look up a free VT and to reset VT mode
const CONSOLE_DEVICE: &str = "/dev/tty0";

/// Set by the SIGUSR1 handler, cleared by [`VtConsole::vt_requested`]
static SWITCH_REQUESTED: AtomicBool = AtomicBool::new(false);

extern "C" fn on_vt_signal(_: libc::c_int) {
    SWITCH_REQUESTED.store(true, Ordering::SeqCst);
}

fn install_switch_handler() -> io::Result<()> {
    // SAFETY: the handler only touches an atomic
    let previous = unsafe { libc::signal(libc::SIGUSR1, on_vt_signal as libc::sighandler_t) };
    if previous == libc::SIG_ERR {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// `struct vt_stat`
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default)]
struct VtStat {
    v_active: libc::c_ushort,
    v_signal: libc::c_ushort,
    v_state: libc::c_ushort,
}

/// `struct vt_mode`
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default)]
struct VtMode {
    mode: libc::c_char,
    waitv: libc::c_char,
    relsig: libc::c_short,
    acqsig: libc::c_short,
    frsig: libc::c_short,
}

/// Linux virtual terminal owned by the splash
#[derive(Debug, Default)]
pub struct VtConsole {
    tty: Option<File>,
    vt: libc::c_int,
    initial_vt: Option<libc::c_int>,
    visible: bool,
}

impl VtConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the VT in use, once switched
    pub fn vt(&self) -> Option<i32> {
        self.tty.as_ref().map(|_| self.vt)
    }

    fn try_switch(&mut self) -> io::Result<()> {
        let console = OpenOptions::new().write(true).open(CONSOLE_DEVICE)?;
        let mut vt: libc::c_int = -1;
        ioctl_ptr(&console, VT_OPENQRY, &mut vt)?;
        drop(console);

        let tty = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NDELAY)
            .open(format!("/dev/tty{}", vt))?;

        let mut state = VtStat::default();
        if ioctl_ptr(&tty, VT_GETSTATE, &mut state).is_ok() {
            self.initial_vt = Some(libc::c_int::from(state.v_active));
        }

        if let Err(e) = install_switch_handler() {
            warn!("cannot install the VT switch handler: {}", e);
        }

        let mut mode = VtMode {
            mode: VT_PROCESS,
            relsig: libc::SIGUSR1 as libc::c_short,
            acqsig: libc::SIGUSR1 as libc::c_short,
            ..Default::default()
        };
        if let Err(e) = ioctl_ptr(&tty, VT_SETMODE, &mut mode) {
            warn!("VT_SETMODE failed: {}", e);
        }

        if let Err(e) = ioctl(&tty, VT_ACTIVATE, vt) {
            warn!("VT_ACTIVATE {} failed: {}", vt, e);
        }
        if let Err(e) = ioctl(&tty, VT_WAITACTIVE, vt) {
            warn!("VT_WAITACTIVE {} failed: {}", vt, e);
        }
        if let Err(e) = ioctl(&tty, KDSETMODE, KD_GRAPHICS) {
            warn!("KDSETMODE KD_GRAPHICS failed: {}", e);
        }

        info!("switched to tty{}", vt);
        self.vt = vt;
        self.tty = Some(tty);
        self.visible = true;
        Ok(())
    }
}

impl ConsoleSwitch for VtConsole {
    fn switch(&mut self) {
        if let Err(e) = self.try_switch() {
            warn!("console switch failed: {}", e);
        }
    }

    fn vt_requested(&mut self) -> bool {
        if !SWITCH_REQUESTED.swap(false, Ordering::SeqCst) {
            return false;
        }

        if let Some(tty) = &self.tty {
            let ack = if self.visible { 1 } else { VT_ACKACQ };
            if let Err(e) = ioctl(tty, VT_RELDISP, ack) {
                warn!("VT_RELDISP failed: {}", e);
            }
            self.visible = !self.visible;
        }
        debug!("virtual console switch requested");
        true
    }

    fn reset(&mut self) {
        let Some(tty) = self.tty.take() else {
            return;
        };

        if let Err(e) = ioctl(&tty, KDSETMODE, KD_TEXT) {
            warn!("KDSETMODE KD_TEXT failed: {}", e);
        }

        // Only switch back if nobody else moved the console meanwhile
        let mut state = VtStat::default();
        let still_active = ioctl_ptr(&tty, VT_GETSTATE, &mut state).is_ok()
            && libc::c_int::from(state.v_active) == self.vt;
        if still_active {
            if let Some(initial) = self.initial_vt.take() {
                let _ = ioctl(&tty, VT_ACTIVATE, initial);
                let _ = ioctl(&tty, VT_WAITACTIVE, initial);
            }
        }
        drop(tty);

        match OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_NDELAY)
            .open(CONSOLE_DEVICE)
        {
            Ok(console) => {
                let mut mode = VtMode {
                    mode: VT_AUTO,
                    ..Default::default()
                };
                if let Err(e) = ioctl_ptr(&console, VT_SETMODE, &mut mode) {
                    warn!("VT_SETMODE VT_AUTO failed: {}", e);
                }
            }
            Err(e) => warn!("cannot open {}: {}", CONSOLE_DEVICE, e),
        }
    }
}

/// ioctl taking a plain integer argument
fn ioctl(file: &File, request: u32, arg: libc::c_int) -> io::Result<()> {
    // SAFETY: only called with requests that take an int by value
    let rc = unsafe { libc::ioctl(file.as_raw_fd(), request as _, arg) };
    check(rc)
}

/// ioctl taking a pointer to a kernel struct
fn ioctl_ptr<T>(file: &File, request: u32, arg: &mut T) -> io::Result<()> {
    // SAFETY: T is the repr(C) struct the request reads or fills
    let rc = unsafe { libc::ioctl(file.as_raw_fd(), request as _, arg as *mut T) };
    check(rc)
}

fn check(rc: libc::c_int) -> io::Result<()> {
    if rc == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_without_switch_is_noop() {
        let mut console = VtConsole::new();
        console.reset();
        assert_eq!(console.vt(), None);
    }

    #[test]
    fn test_request_is_acknowledged_once() {
        let mut console = VtConsole::new();
        SWITCH_REQUESTED.store(true, Ordering::SeqCst);
        assert!(console.vt_requested());
        assert!(!console.vt_requested());
    }

    #[test]
    fn test_switch_handler_installs() {
        install_switch_handler().unwrap();
    }

    #[test]
    fn test_ioctl_on_regular_file_fails() {
        let file = tempfile::tempfile().unwrap();
        assert!(ioctl(&file, KDSETMODE, KD_TEXT).is_err());
    }
}
