//! Colors and pixel layouts
//!
//! Drawing code works in 8-bit RGB. The layout detected from the reported
//! channel bitfields decides how a color becomes bytes in display memory.

use bootglow_hal::{Bitfield, ScreenInfo};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Highlight color used after a `>` marker and for confirmed icons
    pub const YELLOW: Rgb = Rgb::new(0xff, 0xff, 0x00);

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

/// Channel arrangement of a framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// red 11/5, green 5/6, blue 0/5
    Rgb565,
    /// red 0/5, green 5/6, blue 11/5
    Bgr565,
    /// red 16/8, green 8/8, blue 0/8
    Rgb888,
    /// red 0/8, green 8/8, blue 8/8 (as reported by the panels that use it)
    Bgr888,
    /// Anything else, drawn by shifting each channel into its bitfield
    Generic,
}

impl PixelLayout {
    /// Classify the channel bitfields reported by the device
    pub fn detect(red: Bitfield, green: Bitfield, blue: Bitfield) -> Self {
        let fields = |r: (u32, u32), g: (u32, u32), b: (u32, u32)| {
            red == Bitfield::new(r.0, r.1)
                && green == Bitfield::new(g.0, g.1)
                && blue == Bitfield::new(b.0, b.1)
        };

        if fields((11, 5), (5, 6), (0, 5)) {
            PixelLayout::Rgb565
        } else if fields((0, 5), (5, 6), (11, 5)) {
            PixelLayout::Bgr565
        } else if fields((16, 8), (8, 8), (0, 8)) {
            PixelLayout::Rgb888
        } else if fields((0, 8), (8, 8), (8, 8)) {
            PixelLayout::Bgr888
        } else {
            PixelLayout::Generic
        }
    }

    fn is_rgb_family(self) -> bool {
        matches!(self, PixelLayout::Rgb565 | PixelLayout::Rgb888)
    }
}

/// Everything needed to turn a color into pixel bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    pub layout: PixelLayout,
    pub bits_per_pixel: u32,
    pub red: Bitfield,
    pub green: Bitfield,
    pub blue: Bitfield,
}

impl PixelFormat {
    /// Derive the format from the device report
    pub fn from_screen(info: &ScreenInfo) -> Self {
        Self {
            layout: PixelLayout::detect(info.red, info.green, info.blue),
            bits_per_pixel: info.bits_per_pixel,
            red: info.red,
            green: info.green,
            blue: info.blue,
        }
    }

    /// Whether `encode` writes anything at this depth
    pub fn is_drawable(&self) -> bool {
        match self.layout {
            PixelLayout::Generic => matches!(self.bits_per_pixel, 16 | 32),
            _ => matches!(self.bits_per_pixel, 16 | 24 | 32),
        }
    }

    /// Write `color` into one pixel slot
    ///
    /// `out` starts at the pixel and must hold `bits_per_pixel / 8` bytes.
    /// 24/32-bit RGB and BGR layouts leave the fourth byte untouched.
    /// Unsupported depths write nothing.
    pub fn encode(&self, color: Rgb, out: &mut [u8]) {
        let Rgb { r, g, b } = color;

        match (self.layout, self.bits_per_pixel) {
            (PixelLayout::Generic, 16) => {
                let value = self.pack_generic(color) as u16;
                write_bytes(out, &value.to_ne_bytes());
            }
            (PixelLayout::Generic, 32) => {
                let value = self.pack_generic(color);
                write_bytes(out, &value.to_ne_bytes());
            }
            (PixelLayout::Generic, _) => {}
            (layout, 24 | 32) => {
                let bytes = if layout.is_rgb_family() { [b, g, r] } else { [r, g, b] };
                write_bytes(out, &bytes);
            }
            (layout, 16) => {
                let (hi, lo) = if layout.is_rgb_family() { (r, b) } else { (b, r) };
                let value = (u16::from(hi >> 3) << 11) | (u16::from(g >> 2) << 5) | u16::from(lo >> 3);
                write_bytes(out, &value.to_ne_bytes());
            }
            _ => {}
        }
    }

    /// Read a pixel back, expanding narrow channels by shifting left
    pub fn decode(&self, bytes: &[u8]) -> Rgb {
        match (self.layout, self.bits_per_pixel) {
            (PixelLayout::Generic, 16) => {
                let value = u16::from_ne_bytes(read_array(bytes)) as u32;
                self.unpack_generic(value)
            }
            (PixelLayout::Generic, 32) => {
                let value = u32::from_ne_bytes(read_array(bytes));
                self.unpack_generic(value)
            }
            (layout, 24 | 32) => {
                let [c0, g, c2]: [u8; 3] = read_array(bytes);
                if layout.is_rgb_family() {
                    Rgb::new(c2, g, c0)
                } else {
                    Rgb::new(c0, g, c2)
                }
            }
            (layout, 16) => {
                let value = u16::from_ne_bytes(read_array(bytes));
                let hi = ((value >> 11) & 0x1f) as u8;
                let g = ((value >> 5) & 0x3f) as u8;
                let lo = (value & 0x1f) as u8;
                let (r, b) = if layout.is_rgb_family() { (hi, lo) } else { (lo, hi) };
                Rgb::new(r << 3, g << 2, b << 3)
            }
            _ => Rgb::BLACK,
        }
    }

    fn pack_generic(&self, color: Rgb) -> u32 {
        channel_in(color.r, self.red) | channel_in(color.g, self.green) | channel_in(color.b, self.blue)
    }

    fn unpack_generic(&self, value: u32) -> Rgb {
        Rgb::new(
            channel_out(value, self.red),
            channel_out(value, self.green),
            channel_out(value, self.blue),
        )
    }
}

fn channel_in(value: u8, field: Bitfield) -> u32 {
    let length = field.length.min(8);
    (u32::from(value) >> (8 - length))
        .checked_shl(field.offset)
        .unwrap_or(0)
}

fn channel_out(value: u32, field: Bitfield) -> u8 {
    let length = field.length.min(8);
    if length == 0 {
        return 0;
    }
    let mask = (1u32 << length) - 1;
    let raw = value.checked_shr(field.offset).unwrap_or(0) & mask;
    (raw << (8 - length)) as u8
}

fn write_bytes(out: &mut [u8], bytes: &[u8]) {
    let n = bytes.len().min(out.len());
    out[..n].copy_from_slice(&bytes[..n]);
}

fn read_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let n = N.min(bytes.len());
    out[..n].copy_from_slice(&bytes[..n]);
    out
}
