//! Custom splash image
//!
//! A raw RGB565 dump with a fixed header, written by the panel
//! configuration tools:
//!
//! ```text
//! +---------------------------+
//! | 56 x u32 LE header        |  word 0: row stride in half-pixels
//! |                           |  word 2: total size in half-pixels
//! +---------------------------+
//! | rows of u16 LE pixels     |
//! +---------------------------+
//! ```
//!
//! Known incompatibility: the psplash loader reads only 56 *bytes* of
//! header and starts the pixel rows at byte 56. Files produced for it
//! decode here shifted by 168 bytes (84 pixels), so they must be
//! re-padded to the 224-byte header before use.

use bootglow_hal::FrameMemory;
use log::debug;

use crate::color::Rgb;
use crate::error::SplashError;
use crate::surface::{Surface, Target};

/// Header length in 32-bit words
pub const HEADER_WORDS: usize = 56;

/// Header length in bytes
pub const HEADER_LEN: usize = HEADER_WORDS * 4;

const STRIDE_WORD: usize = 0;
const SIZE_WORD: usize = 2;

/// Smallest accepted width and height
pub const MIN_DIMENSION: u32 = 10;

/// A validated splash image borrowing its pixel rows from the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashImage<'a> {
    pub width: u32,
    pub height: u32,
    rows: &'a [u8],
}

fn header_word(bytes: &[u8], index: usize) -> u32 {
    let at = index * 4;
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

impl<'a> SplashImage<'a> {
    /// Parse and validate an image for a `screen_w` x `screen_h` surface
    ///
    /// Heights beyond the screen are clamped. Rows missing at the end of
    /// the file are left undrawn.
    pub fn parse(bytes: &'a [u8], screen_w: u32, screen_h: u32) -> Result<Self, SplashError> {
        if bytes.len() < HEADER_LEN {
            return Err(SplashError::HeaderTooShort { len: bytes.len() });
        }

        let width = header_word(bytes, STRIDE_WORD) / 2 + 1;
        if width > screen_w || width < MIN_DIMENSION {
            return Err(SplashError::Width(width));
        }

        let height = (header_word(bytes, SIZE_WORD) / 2 / width).min(screen_h);
        if height < MIN_DIMENSION {
            return Err(SplashError::Height(height));
        }

        Ok(Self {
            width,
            height,
            rows: &bytes[HEADER_LEN..],
        })
    }

    /// Pixel `x` of row `y`, `None` when the file ends before that row
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let row_len = self.width as usize * 2;
        let row = self.rows.get(y as usize * row_len..(y as usize + 1) * row_len)?;
        let at = x as usize * 2;
        let c = u16::from_le_bytes([*row.get(at)?, *row.get(at + 1)?]);
        Some(expand_565(c))
    }

    /// Draw the image centered on the surface
    pub fn draw<M: FrameMemory>(&self, surface: &mut Surface<M>, target: Target) {
        let x0 = (surface.width().saturating_sub(self.width) / 2) as i32;
        let y0 = (surface.height().saturating_sub(self.height) / 2) as i32;
        debug!("splash image {}x{} at ({}, {})", self.width, self.height, x0, y0);

        for y in 0..self.height {
            if self.pixel(0, y).is_none() {
                continue;
            }
            for x in 0..self.width {
                if let Some(color) = self.pixel(x, y) {
                    surface.plot(target, x0 + x as i32, y0 + y as i32, color);
                }
            }
        }
    }
}

/// RGB565 to 8-bit channels, the way the panel tools expect it
///
/// Each channel takes the byte the 565 field lands in after shifting, so
/// neighbouring fields bleed into the low bits.
pub fn expand_565(c: u16) -> Rgb {
    Rgb::new((c >> 8) as u8, (c >> 3) as u8, (c << 3) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::Rotation;
    use crate::surface::tests::surface;

    fn image_file(width: u32, height: u32, rows: usize, pixel: u16) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes[0..4].copy_from_slice(&((width - 1) * 2).to_le_bytes());
        bytes[8..12].copy_from_slice(&(width * height * 2).to_le_bytes());
        for _ in 0..rows * width as usize {
            bytes.extend_from_slice(&pixel.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_parse_dimensions() {
        let file = image_file(20, 12, 12, 0);
        let image = SplashImage::parse(&file, 64, 64).unwrap();
        assert_eq!((image.width, image.height), (20, 12));
    }

    #[test]
    fn test_height_clamped_to_screen() {
        let file = image_file(20, 100, 100, 0);
        let image = SplashImage::parse(&file, 64, 48).unwrap();
        assert_eq!(image.height, 48);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert_eq!(
            SplashImage::parse(&[0u8; 100], 64, 64),
            Err(SplashError::HeaderTooShort { len: 100 })
        );
        let file = image_file(65, 20, 0, 0);
        assert_eq!(SplashImage::parse(&file, 64, 64), Err(SplashError::Width(65)));
        let file = image_file(9, 20, 0, 0);
        assert_eq!(SplashImage::parse(&file, 64, 64), Err(SplashError::Width(9)));
        let file = image_file(20, 9, 0, 0);
        assert_eq!(SplashImage::parse(&file, 64, 64), Err(SplashError::Height(9)));
    }

    #[test]
    fn test_expand_565() {
        assert_eq!(expand_565(0xffff), Rgb::new(0xff, 0xff, 0xf8));
        assert_eq!(expand_565(0xf800), Rgb::new(0xf8, 0x00, 0x00));
        assert_eq!(expand_565(0x001f), Rgb::new(0x00, 0x03, 0xf8));
    }

    #[test]
    fn test_draw_centered_partial_file() {
        let file = image_file(10, 10, 4, 0xf800);
        let image = SplashImage::parse(&file, 20, 20).unwrap();
        let mut s = surface(20, 20, 32, Rotation::Deg0);
        image.draw(&mut s, Target::Live);

        // Centered at (5, 5); only the 4 rows present in the file are drawn
        assert_eq!(s.pixel(Target::Live, 5, 5), Some(Rgb::new(0xf8, 0, 0)));
        assert_eq!(s.pixel(Target::Live, 14, 8), Some(Rgb::new(0xf8, 0, 0)));
        assert_eq!(s.pixel(Target::Live, 5, 9), Some(Rgb::BLACK));
        assert_eq!(s.pixel(Target::Live, 4, 5), Some(Rgb::BLACK));
    }
}
