//! Run-length image codec
//!
//! Stream format, one run after another:
//!
//! ```text
//! 1ccccccc <pixel>            repeat: one pixel, emitted `c` times
//! 0ccccccc <pixel> x c        literal: `c` pixels in a row
//! ```
//!
//! A pixel is 3 (RGB) or 4 (RGBA) bytes. A run with `c = 0` ends the
//! stream. Pixels fill the image left to right, wrapping at the width, and
//! decoding stops after `width * height` pixels or when the input runs out.

use crate::color::Rgb;

const REPEAT_FLAG: u8 = 0x80;
const COUNT_MASK: u8 = 0x7f;

/// A run-length encoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleImage<'a> {
    pub width: u32,
    pub height: u32,
    /// 3 for RGB, 4 for RGBA (alpha 0 is transparent)
    pub bytes_per_pixel: u8,
    pub data: &'a [u8],
}

impl<'a> RleImage<'a> {
    pub const fn new(width: u32, height: u32, bytes_per_pixel: u8, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            bytes_per_pixel,
            data,
        }
    }

    /// Iterate over the decoded pixels
    pub fn pixels(&self) -> RleDecoder<'a> {
        RleDecoder::new(self)
    }
}

/// One decoded pixel, relative to the image origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedPixel {
    pub x: u32,
    pub y: u32,
    pub color: Rgb,
    /// False for RGBA pixels with zero alpha
    pub opaque: bool,
}

#[derive(Debug, Clone, Copy)]
enum Run {
    Repeat { at: usize },
    Literal,
}

/// Streaming decoder, see the module docs for the format
#[derive(Debug, Clone)]
pub struct RleDecoder<'a> {
    data: &'a [u8],
    pos: usize,
    bpp: usize,
    width: u32,
    budget: u64,
    run: Run,
    run_left: u8,
    x: u32,
    y: u32,
    done: bool,
}

impl<'a> RleDecoder<'a> {
    fn new(image: &RleImage<'a>) -> Self {
        let bpp = image.bytes_per_pixel as usize;
        Self {
            data: image.data,
            pos: 0,
            bpp,
            width: image.width,
            budget: u64::from(image.width) * u64::from(image.height),
            run: Run::Literal,
            run_left: 0,
            x: 0,
            y: 0,
            done: !(3..=4).contains(&bpp) || image.width == 0,
        }
    }

    fn start_run(&mut self) -> Option<()> {
        let header = *self.data.get(self.pos)?;
        self.pos += 1;

        let count = header & COUNT_MASK;
        if count == 0 {
            return None;
        }

        self.run = if header & REPEAT_FLAG != 0 {
            let at = self.pos;
            self.pos += self.bpp;
            Run::Repeat { at }
        } else {
            Run::Literal
        };
        self.run_left = count;
        Some(())
    }

    fn next_pixel_bytes(&mut self) -> Option<&'a [u8]> {
        let at = match self.run {
            Run::Repeat { at } => at,
            Run::Literal => {
                let at = self.pos;
                self.pos += self.bpp;
                at
            }
        };
        self.data.get(at..at + self.bpp)
    }
}

impl Iterator for RleDecoder<'_> {
    type Item = DecodedPixel;

    fn next(&mut self) -> Option<DecodedPixel> {
        if self.done || self.budget == 0 {
            return None;
        }

        if self.run_left == 0 && self.start_run().is_none() {
            self.done = true;
            return None;
        }

        let bytes = match self.next_pixel_bytes() {
            Some(bytes) => bytes,
            None => {
                self.done = true;
                return None;
            }
        };

        let pixel = DecodedPixel {
            x: self.x,
            y: self.y,
            color: Rgb::new(bytes[0], bytes[1], bytes[2]),
            opaque: self.bpp < 4 || bytes[3] != 0,
        };

        self.run_left -= 1;
        self.budget -= 1;
        self.x += 1;
        if self.x >= self.width {
            self.x = 0;
            self.y += 1;
        }

        Some(pixel)
    }
}
