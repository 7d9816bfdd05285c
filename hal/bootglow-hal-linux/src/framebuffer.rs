//! Linux fbdev framebuffer
//!
//! Opens `/dev/fbN`, makes sure the pixel format is at least 16 bpp and maps
//! the visible area read/write.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};
use std::ptr::{self, NonNull};

use bootglow_hal::{Bitfield, FrameMemory, ScreenInfo};
use log::{debug, info, warn};

use crate::error::DeviceError;

const FBIOGET_VSCREENINFO: u32 = 0x4600;
const FBIOPUT_VSCREENINFO: u32 = 0x4601;
const FBIOGET_FSCREENINFO: u32 = 0x4602;

const FALLBACK_PAGE_SIZE: usize = 4096;

#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct FbBitfield {
    offset: u32,
    length: u32,
    msb_right: u32,
}

impl FbBitfield {
    const fn new(offset: u32, length: u32) -> Self {
        Self {
            offset,
            length,
            msb_right: 0,
        }
    }
}

/// `struct fb_var_screeninfo`
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
struct VarScreenInfo {
    xres: u32,
    yres: u32,
    xres_virtual: u32,
    yres_virtual: u32,
    xoffset: u32,
    yoffset: u32,
    bits_per_pixel: u32,
    grayscale: u32,
    red: FbBitfield,
    green: FbBitfield,
    blue: FbBitfield,
    transp: FbBitfield,
    nonstd: u32,
    activate: u32,
    height: u32,
    width: u32,
    accel_flags: u32,
    pixclock: u32,
    left_margin: u32,
    right_margin: u32,
    upper_margin: u32,
    lower_margin: u32,
    hsync_len: u32,
    vsync_len: u32,
    sync: u32,
    vmode: u32,
    rotate: u32,
    colorspace: u32,
    reserved: [u32; 4],
}

/// `struct fb_fix_screeninfo`
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default, Clone, Copy)]
struct FixScreenInfo {
    id: [u8; 16],
    smem_start: libc::c_ulong,
    smem_len: u32,
    kind: u32,
    type_aux: u32,
    visual: u32,
    xpanstep: u16,
    ypanstep: u16,
    ywrapstep: u16,
    line_length: u32,
    mmio_start: libc::c_ulong,
    mmio_len: u32,
    accel: u32,
    capabilities: u16,
    reserved: [u16; 2],
}

/// Formats tried, in order, when the device comes up below 16 bpp
const FALLBACK_FORMATS: [(u32, FbBitfield, FbBitfield, FbBitfield); 2] = [
    (
        32,
        FbBitfield::new(0, 8),
        FbBitfield::new(8, 8),
        FbBitfield::new(16, 8),
    ),
    (
        16,
        FbBitfield::new(11, 5),
        FbBitfield::new(5, 6),
        FbBitfield::new(0, 5),
    ),
];

/// A mapped fbdev framebuffer
///
/// The mapping is released when the device is dropped.
#[derive(Debug)]
pub struct FbDevice {
    file: File,
    path: PathBuf,
    info: ScreenInfo,
    base: NonNull<u8>,
    map_len: usize,
    offset: usize,
}

impl FbDevice {
    /// Open and map a framebuffer device
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DeviceError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| DeviceError::open(path, e))?;
        let fd = file.as_raw_fd();

        let mut var = get_var(fd, path)?;
        if var.bits_per_pixel < 16 {
            warn!(
                "{} bpp framebuffers are not supported, trying to change pixel format",
                var.bits_per_pixel
            );
            negotiate_format(fd, &mut var)?;
            var = get_var(fd, path)?;
        }

        // line_length can change with the pixel format, so query it last
        let fix = get_fix(fd, path)?;
        let info = screen_info(&var, &fix);

        let offset = page_offset(fix.smem_start as usize, page_size());
        let map_len = info.frame_len() + offset;

        // SAFETY: fresh shared mapping of an open fd, checked below
        let raw = unsafe {
            libc::mmap(
                ptr::null_mut(),
                map_len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                fd,
                0,
            )
        };
        if raw == libc::MAP_FAILED {
            return Err(DeviceError::Map {
                path: path.into(),
                source: io::Error::last_os_error(),
            });
        }
        let base = NonNull::new(raw.cast::<u8>()).ok_or_else(|| DeviceError::Map {
            path: path.into(),
            source: io::Error::from(io::ErrorKind::InvalidData),
        })?;

        info!(
            "{}: {}x{} {} bpp, stride {}",
            path.display(),
            info.width,
            info.height,
            info.bits_per_pixel,
            info.stride
        );
        debug!(
            "rgb {}/{} {}/{} {}/{}, mapped {} bytes at offset {}",
            info.red.offset,
            info.red.length,
            info.green.offset,
            info.green.length,
            info.blue.offset,
            info.blue.length,
            map_len,
            offset
        );

        Ok(Self {
            file,
            path: path.into(),
            info,
            base,
            map_len,
            offset,
        })
    }

    /// Geometry and pixel format reported by the device
    pub fn screen_info(&self) -> ScreenInfo {
        self.info
    }

    /// Device node this framebuffer was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn frame_ptr(&self) -> *mut u8 {
        // SAFETY: offset < map_len, inside the mapping
        unsafe { self.base.as_ptr().add(self.offset) }
    }
}

impl FrameMemory for FbDevice {
    fn as_bytes(&self) -> &[u8] {
        // SAFETY: the mapping covers offset + frame_len bytes and lives as long as self
        unsafe { std::slice::from_raw_parts(self.frame_ptr(), self.info.frame_len()) }
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: as above, and &mut self guarantees exclusive access
        unsafe { std::slice::from_raw_parts_mut(self.frame_ptr(), self.info.frame_len()) }
    }
}

impl Drop for FbDevice {
    fn drop(&mut self) {
        // SAFETY: base/map_len come from the successful mmap in open()
        let rc = unsafe { libc::munmap(self.base.as_ptr().cast(), self.map_len) };
        if rc != 0 {
            warn!(
                "munmap of {} failed: {}",
                self.path.display(),
                io::Error::last_os_error()
            );
        }
        debug!("closing {} (fd {})", self.path.display(), self.file.as_raw_fd());
    }
}

fn get_var(fd: RawFd, path: &Path) -> Result<VarScreenInfo, DeviceError> {
    let mut var = VarScreenInfo::default();
    // SAFETY: VarScreenInfo matches the kernel layout
    let rc = unsafe { libc::ioctl(fd, FBIOGET_VSCREENINFO as _, &mut var as *mut VarScreenInfo) };
    if rc == -1 {
        return Err(ioctl_error("FBIOGET_VSCREENINFO", path));
    }
    Ok(var)
}

fn get_fix(fd: RawFd, path: &Path) -> Result<FixScreenInfo, DeviceError> {
    let mut fix = FixScreenInfo::default();
    // SAFETY: FixScreenInfo matches the kernel layout
    let rc = unsafe { libc::ioctl(fd, FBIOGET_FSCREENINFO as _, &mut fix as *mut FixScreenInfo) };
    if rc == -1 {
        return Err(ioctl_error("FBIOGET_FSCREENINFO", path));
    }
    Ok(fix)
}

fn negotiate_format(fd: RawFd, var: &mut VarScreenInfo) -> Result<(), DeviceError> {
    let original_bpp = var.bits_per_pixel;

    for format in FALLBACK_FORMATS {
        let bpp = request_format(var, format);

        // SAFETY: VarScreenInfo matches the kernel layout
        let rc = unsafe { libc::ioctl(fd, FBIOPUT_VSCREENINFO as _, &mut *var as *mut VarScreenInfo) };
        if rc == 0 {
            info!("switched to a {} bpp framebuffer", bpp);
            return Ok(());
        }
        warn!(
            "failed to switch to {} bpp: {}",
            bpp,
            io::Error::last_os_error()
        );
    }

    Err(DeviceError::PixelFormat {
        bits_per_pixel: original_bpp,
    })
}

/// Fill `var` with a format request, returns the requested depth
///
/// The virtual area shrinks to the visible one: drivers refuse a deeper
/// format when a panning area sized for the old depth no longer fits.
fn request_format(
    var: &mut VarScreenInfo,
    (bpp, red, green, blue): (u32, FbBitfield, FbBitfield, FbBitfield),
) -> u32 {
    var.yres_virtual = var.yres;
    var.bits_per_pixel = bpp;
    var.red = red;
    var.green = green;
    var.blue = blue;
    var.transp = FbBitfield::default();
    bpp
}

fn ioctl_error(request: &'static str, path: &Path) -> DeviceError {
    DeviceError::Ioctl {
        request,
        path: path.into(),
        source: io::Error::last_os_error(),
    }
}

fn screen_info(var: &VarScreenInfo, fix: &FixScreenInfo) -> ScreenInfo {
    ScreenInfo {
        width: var.xres,
        height: var.yres,
        bits_per_pixel: var.bits_per_pixel,
        stride: fix.line_length,
        red: Bitfield::new(var.red.offset, var.red.length),
        green: Bitfield::new(var.green.offset, var.green.length),
        blue: Bitfield::new(var.blue.offset, var.blue.length),
    }
}

fn page_size() -> usize {
    // SAFETY: sysconf has no preconditions
    let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if size > 0 {
        size as usize
    } else {
        FALLBACK_PAGE_SIZE
    }
}

/// Offset of the visible frame inside the first mapped page
fn page_offset(smem_start: usize, page_size: usize) -> usize {
    smem_start % page_size
}
