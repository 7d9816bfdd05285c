//! Drawing surface
//!
//! A surface pairs the mapped display memory with a shadow buffer of the
//! same size. Drawing to the shadow and flushing a rectangle afterwards
//! replaces a region in one pass, which keeps animations free of flicker.

use alloc::vec;
use alloc::vec::Vec;

use bootglow_hal::{FrameMemory, ScreenInfo};
use log::{debug, warn};

use crate::color::{PixelFormat, Rgb};
use crate::error::DisplayError;
use crate::rle::RleImage;
use crate::rotation::Rotation;

/// Buffer a drawing call writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Mapped display memory, visible immediately
    Live,
    /// Off-screen copy, visible after [`Surface::flush`]
    Shadow,
}

/// Display memory plus shadow buffer, drawn in logical coordinates
pub struct Surface<M: FrameMemory> {
    live: M,
    shadow: Vec<u8>,
    info: ScreenInfo,
    format: PixelFormat,
    rotation: Rotation,
    width: u32,
    height: u32,
}

impl<M: FrameMemory> Surface<M> {
    /// Wrap mapped memory described by `info`
    ///
    /// Fails when the memory is smaller than `stride * height` or the
    /// reported geometry cannot hold a single pixel.
    pub fn new(live: M, info: ScreenInfo, rotation: Rotation) -> Result<Self, DisplayError> {
        if info.width == 0 || info.height == 0 || info.bytes_per_pixel() == 0 {
            return Err(DisplayError::EmptyGeometry);
        }
        let min_stride = info.width as usize * info.bytes_per_pixel();
        if (info.stride as usize) < min_stride {
            return Err(DisplayError::StrideTooSmall {
                stride: info.stride,
                needed: min_stride as u32,
            });
        }

        let needed = info.frame_len();
        let available = live.as_bytes().len();
        if available < needed {
            return Err(DisplayError::MemoryTooSmall { needed, available });
        }

        let format = PixelFormat::from_screen(&info);
        if !format.is_drawable() {
            warn!(
                "{} bpp {:?} framebuffer is not drawable, output stays blank",
                info.bits_per_pixel, format.layout
            );
        }

        let (width, height) = rotation.logical_size(info.width, info.height);
        debug!(
            "surface {}x{} ({}x{} physical), {} bpp, stride {}, {:?}, rotated {}",
            width,
            height,
            info.width,
            info.height,
            info.bits_per_pixel,
            info.stride,
            format.layout,
            rotation.degrees()
        );

        Ok(Self {
            live,
            shadow: vec![0; needed],
            info,
            format,
            rotation,
            width,
            height,
        })
    }

    /// Logical width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn format(&self) -> &PixelFormat {
        &self.format
    }

    pub fn screen_info(&self) -> &ScreenInfo {
        &self.info
    }

    /// Byte offset of a logical coordinate, `None` outside the surface
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let (px, py) = self.rotation.map(x, y, self.width, self.height);
        Some(py as usize * self.info.stride as usize + px as usize * self.info.bytes_per_pixel())
    }

    fn buffer_mut(&mut self, target: Target) -> &mut [u8] {
        match target {
            Target::Live => self.live.as_bytes_mut(),
            Target::Shadow => &mut self.shadow,
        }
    }

    fn buffer(&self, target: Target) -> &[u8] {
        match target {
            Target::Live => self.live.as_bytes(),
            Target::Shadow => &self.shadow,
        }
    }

    /// Set one pixel; coordinates outside the surface are ignored
    pub fn plot(&mut self, target: Target, x: i32, y: i32, color: Rgb) {
        let Some(off) = self.offset(x, y) else {
            return;
        };
        let bpp = self.info.bytes_per_pixel();
        let format = self.format;
        if let Some(slot) = self.buffer_mut(target).get_mut(off..off + bpp) {
            format.encode(color, slot);
        }
    }

    /// Read one pixel back
    pub fn pixel(&self, target: Target, x: i32, y: i32) -> Option<Rgb> {
        let off = self.offset(x, y)?;
        let bpp = self.info.bytes_per_pixel();
        self.buffer(target)
            .get(off..off + bpp)
            .map(|slot| self.format.decode(slot))
    }

    /// Fill a rectangle, clipped to the surface
    pub fn fill_rect(&mut self, target: Target, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        for (cx, cy) in clip(x, y, width, height, self.width, self.height) {
            self.plot(target, cx, cy, color);
        }
    }

    /// Fill the whole surface
    pub fn clear(&mut self, target: Target, color: Rgb) {
        self.fill_rect(target, 0, 0, self.width, self.height, color);
    }

    /// Draw a run-length encoded image with its top-left corner at `(x, y)`
    pub fn blit_image(&mut self, target: Target, x: i32, y: i32, image: &RleImage<'_>) {
        for pixel in image.pixels() {
            if pixel.opaque {
                self.plot(target, x + pixel.x as i32, y + pixel.y as i32, pixel.color);
            }
        }
    }

    /// Copy a rectangle of the shadow buffer to the display
    pub fn flush(&mut self, x: i32, y: i32, width: u32, height: u32) {
        let bpp = self.info.bytes_per_pixel();
        for (cx, cy) in clip(x, y, width, height, self.width, self.height) {
            let Some(off) = self.offset(cx, cy) else {
                continue;
            };
            if let (Some(src), Some(dst)) = (
                self.shadow.get(off..off + bpp),
                self.live.as_bytes_mut().get_mut(off..off + bpp),
            ) {
                dst.copy_from_slice(src);
            }
        }
    }

    /// Give back the display memory
    pub fn into_memory(self) -> M {
        self.live
    }
}

/// Cells of a rectangle that fall inside a `bound_w` x `bound_h` area
fn clip(
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    bound_w: u32,
    bound_h: u32,
) -> impl Iterator<Item = (i32, i32)> {
    let x0 = i64::from(x).max(0);
    let y0 = i64::from(y).max(0);
    let x1 = (i64::from(x) + i64::from(width)).min(i64::from(bound_w));
    let y1 = (i64::from(y) + i64::from(height)).min(i64::from(bound_h));

    (y0..y1).flat_map(move |cy| (x0..x1).map(move |cx| (cx as i32, cy as i32)))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use bootglow_hal::Bitfield;
    use proptest::prelude::*;

    pub(crate) fn screen(width: u32, height: u32, bpp: u32) -> ScreenInfo {
        let (red, green, blue) = match bpp {
            16 => (Bitfield::new(11, 5), Bitfield::new(5, 6), Bitfield::new(0, 5)),
            _ => (Bitfield::new(16, 8), Bitfield::new(8, 8), Bitfield::new(0, 8)),
        };
        ScreenInfo {
            width,
            height,
            bits_per_pixel: bpp,
            // Padded rows, like most real drivers
            stride: width * bpp / 8 + 8,
            red,
            green,
            blue,
        }
    }

    pub(crate) fn surface(width: u32, height: u32, bpp: u32, rotation: Rotation) -> Surface<Vec<u8>> {
        let info = screen(width, height, bpp);
        Surface::new(vec![0u8; info.frame_len()], info, rotation).unwrap()
    }

    #[test]
    fn test_rejects_short_memory() {
        let info = screen(8, 8, 32);
        let result = Surface::new(vec![0u8; 16], info, Rotation::Deg0);
        assert!(matches!(result, Err(DisplayError::MemoryTooSmall { .. })));
    }

    #[test]
    fn test_rejects_narrow_stride() {
        let mut info = screen(8, 8, 32);
        info.stride = 16;
        let result = Surface::new(vec![0u8; 1024], info, Rotation::Deg0);
        assert!(matches!(result, Err(DisplayError::StrideTooSmall { .. })));
    }

    #[test]
    fn test_logical_dimensions() {
        let s = surface(20, 10, 32, Rotation::Deg90);
        assert_eq!((s.width(), s.height()), (10, 20));
        let s = surface(20, 10, 32, Rotation::Deg180);
        assert_eq!((s.width(), s.height()), (20, 10));
    }

    #[test]
    fn test_plot_out_of_bounds_is_dropped() {
        let mut s = surface(4, 4, 32, Rotation::Deg0);
        let red = Rgb::new(255, 0, 0);
        s.plot(Target::Live, -1, 0, red);
        s.plot(Target::Live, 4, 0, red);
        s.plot(Target::Live, 0, 4, red);
        assert!(s.into_memory().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_plot_respects_rotation() {
        let mut s = surface(4, 2, 32, Rotation::Deg90);
        s.plot(Target::Live, 0, 0, Rgb::new(1, 2, 3));

        // Logical (0, 0) is physical (0, lw - 1) = (0, 1)
        let stride = s.screen_info().stride as usize;
        let mem = s.into_memory();
        assert_eq!(&mem[stride..stride + 3], &[3, 2, 1]);
    }

    #[test]
    fn test_shadow_invisible_until_flush() {
        let mut s = surface(8, 8, 16, Rotation::Deg0);
        let color = Rgb::new(0xf8, 0xfc, 0xf8);
        s.fill_rect(Target::Shadow, 2, 2, 3, 3, color);
        assert_eq!(s.pixel(Target::Live, 3, 3), Some(Rgb::BLACK));

        s.flush(0, 0, 8, 8);
        assert_eq!(s.pixel(Target::Live, 3, 3), Some(color));
        assert_eq!(s.pixel(Target::Live, 1, 1), Some(Rgb::BLACK));
    }

    #[test]
    fn test_flush_only_touches_rectangle() {
        let mut s = surface(6, 6, 32, Rotation::Deg270);
        s.clear(Target::Shadow, Rgb::new(9, 9, 9));
        s.flush(1, 2, 2, 3);

        for y in 0..6 {
            for x in 0..6 {
                let inside = (1..3).contains(&x) && (2..5).contains(&y);
                let expected = if inside { Rgb::new(9, 9, 9) } else { Rgb::BLACK };
                assert_eq!(s.pixel(Target::Live, x, y), Some(expected), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut s = surface(4, 4, 32, Rotation::Deg0);
        s.fill_rect(Target::Live, -2, -2, 4, 4, Rgb::new(5, 5, 5));
        assert_eq!(s.pixel(Target::Live, 0, 0), Some(Rgb::new(5, 5, 5)));
        assert_eq!(s.pixel(Target::Live, 1, 1), Some(Rgb::new(5, 5, 5)));
        assert_eq!(s.pixel(Target::Live, 2, 2), Some(Rgb::BLACK));
    }

    #[test]
    fn test_blit_skips_transparent() {
        let mut s = surface(4, 1, 32, Rotation::Deg0);
        s.clear(Target::Live, Rgb::new(7, 7, 7));
        let data = [0x02, 1, 1, 1, 0, 2, 2, 2, 255];
        s.blit_image(Target::Live, 1, 0, &RleImage::new(2, 1, 4, &data));

        assert_eq!(s.pixel(Target::Live, 1, 0), Some(Rgb::new(7, 7, 7)));
        assert_eq!(s.pixel(Target::Live, 2, 0), Some(Rgb::new(2, 2, 2)));
    }

    proptest! {
        #[test]
        fn prop_plot_read_back_exact_for_32bpp(
            x in 0i32..12, y in 0i32..7, rgb in any::<[u8; 3]>(), angle in 0u32..4,
        ) {
            let rotation = Rotation::from_degrees(angle * 90).unwrap();
            let mut s = surface(12, 12, 32, rotation);
            s.plot(Target::Shadow, x, y, Rgb::from(rgb));
            prop_assert_eq!(s.pixel(Target::Shadow, x, y), Some(Rgb::from(rgb)));
        }

        #[test]
        fn prop_plot_read_back_rounded_for_16bpp(x in 0i32..8, y in 0i32..8, rgb in any::<[u8; 3]>()) {
            let mut s = surface(8, 8, 16, Rotation::Deg180);
            s.plot(Target::Live, x, y, Rgb::from(rgb));
            let expected = Rgb::new(rgb[0] & 0xf8, rgb[1] & 0xfc, rgb[2] & 0xf8);
            prop_assert_eq!(s.pixel(Target::Live, x, y), Some(expected));
        }

        #[test]
        fn prop_flush_matches_shadow_in_rect(
            x in -3i32..10, y in -3i32..10, w in 0u32..10, h in 0u32..10,
        ) {
            let mut s = surface(8, 6, 32, Rotation::Deg90);
            for (i, b) in s.shadow.iter_mut().enumerate() {
                *b = (i % 251) as u8 | 1;
            }
            s.flush(x, y, w, h);

            let bpp = s.info.bytes_per_pixel();
            let mut touched = vec![false; s.shadow.len()];
            for (cx, cy) in clip(x, y, w, h, s.width, s.height) {
                let off = s.offset(cx, cy).unwrap();
                touched[off..off + bpp].iter_mut().for_each(|t| *t = true);
            }
            let live = s.live.as_bytes();
            for (i, &t) in touched.iter().enumerate() {
                if t {
                    prop_assert_eq!(live[i], s.shadow[i]);
                } else {
                    prop_assert_eq!(live[i], 0);
                }
            }
        }
    }
}
