//! Framebuffer abstractions
//!
//! A framebuffer is a linear block of display memory plus the format the
//! kernel reported for it. Drawing code only ever sees these two pieces.

/// Position and width of one color channel inside a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitfield {
    /// Bit offset of the channel's least significant bit
    pub offset: u32,
    /// Number of bits in the channel
    pub length: u32,
}

impl Bitfield {
    /// Create a new bitfield description
    pub const fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }
}

/// Geometry and pixel format of a framebuffer, as reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    /// Visible width in pixels
    pub width: u32,
    /// Visible height in pixels
    pub height: u32,
    /// Bits per pixel (16, 24 or 32 are drawable)
    pub bits_per_pixel: u32,
    /// Bytes per row, may include padding
    pub stride: u32,
    /// Red channel layout
    pub red: Bitfield,
    /// Green channel layout
    pub green: Bitfield,
    /// Blue channel layout
    pub blue: Bitfield,
}

impl ScreenInfo {
    /// Bytes occupied by one pixel
    pub const fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Bytes needed to hold the visible area
    pub const fn frame_len(&self) -> usize {
        self.stride as usize * self.height as usize
    }
}

/// Mapped display memory
///
/// The slice returned by both accessors must be at least
/// [`ScreenInfo::frame_len`] bytes long and must stay valid for the lifetime
/// of the implementor. Releasing the mapping happens on drop.
pub trait FrameMemory {
    /// Read access to the visible frame
    fn as_bytes(&self) -> &[u8];

    /// Write access to the visible frame
    fn as_bytes_mut(&mut self) -> &mut [u8];
}

impl<const N: usize> FrameMemory for [u8; N] {
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(feature = "alloc")]
impl FrameMemory for alloc::vec::Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<T: FrameMemory + ?Sized> FrameMemory for &mut T {
    fn as_bytes(&self) -> &[u8] {
        (**self).as_bytes()
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        (**self).as_bytes_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_len_uses_stride() {
        let info = ScreenInfo {
            width: 800,
            height: 480,
            bits_per_pixel: 16,
            stride: 1664,
            red: Bitfield::new(11, 5),
            green: Bitfield::new(5, 6),
            blue: Bitfield::new(0, 5),
        };

        assert_eq!(info.bytes_per_pixel(), 2);
        assert_eq!(info.frame_len(), 1664 * 480);
    }

    #[test]
    fn test_array_frame_memory() {
        let mut mem = [0u8; 8];
        mem.as_bytes_mut()[3] = 0x5a;
        assert_eq!(mem.as_bytes()[3], 0x5a);
    }
}
