//! Display errors

use core::fmt;

/// Errors from setting up a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Zero width, height or bytes per pixel
    EmptyGeometry,
    /// Row stride cannot hold a full row of pixels
    StrideTooSmall { stride: u32, needed: u32 },
    /// Mapped memory is shorter than `stride * height`
    MemoryTooSmall { needed: usize, available: usize },
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::EmptyGeometry => f.write_str("framebuffer reports an empty geometry"),
            DisplayError::StrideTooSmall { stride, needed } => {
                write!(f, "stride {} below the {} bytes of a row", stride, needed)
            }
            DisplayError::MemoryTooSmall { needed, available } => {
                write!(f, "frame needs {} bytes, {} mapped", needed, available)
            }
        }
    }
}

/// Errors from parsing a custom splash image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashError {
    /// File shorter than the header
    HeaderTooShort { len: usize },
    /// Width outside 10..=screen width
    Width(u32),
    /// Height below 10 after clamping
    Height(u32),
}

impl fmt::Display for SplashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplashError::HeaderTooShort { len } => {
                write!(f, "splash image too short for its header ({} bytes)", len)
            }
            SplashError::Width(w) => write!(f, "splash image width error: {}", w),
            SplashError::Height(h) => write!(f, "splash image height error: {}", h),
        }
    }
}
