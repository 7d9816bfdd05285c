//! Text metrics and rendering
//!
//! Glyphs are scaled by powers of two: with scale `s` every font pixel
//! becomes a `2^s` x `2^s` block. A `>` switches the rest of its line to
//! the highlight color, which is how the active menu choice is marked.

use bootglow_hal::FrameMemory;

use crate::color::Rgb;
use crate::font::Font;
use crate::surface::{Surface, Target};

/// Marker that starts highlighting
pub const HIGHLIGHT_MARKER: char = '>';

/// Substitute for characters the font lacks
pub const REPLACEMENT_CHAR: char = '?';

fn resolve(font: &Font, c: char) -> char {
    if font.glyph(c).is_some() {
        c
    } else {
        REPLACEMENT_CHAR
    }
}

/// Width and height of `text` in pixels
///
/// The width is the widest line. The height is one glyph height per
/// newline, and one glyph height for text without any.
pub fn text_extent(font: &Font, text: &str, scale: u8) -> (u32, u32) {
    let widest = text
        .split('\n')
        .map(|line| line.chars().map(|c| font.advance(resolve(font, c))).sum::<u32>())
        .max()
        .unwrap_or(0);
    let newlines = text.chars().filter(|&c| c == '\n').count() as u32;

    (widest << scale, (newlines.max(1) * font.height) << scale)
}

/// Draw `text` with its top-left corner at `(x, y)`
#[allow(clippy::too_many_arguments)]
pub fn draw_text<M: FrameMemory>(
    surface: &mut Surface<M>,
    target: Target,
    x: i32,
    y: i32,
    color: Rgb,
    font: &Font,
    text: &str,
    scale: u8,
) {
    let block = 1u32 << scale;
    let line_height = (font.height << scale) as i32;
    let mut dx = 0i32;
    let mut dy = 0i32;
    let mut ink = color;

    for c in text.chars() {
        if c == '\n' {
            dx = 0;
            dy += line_height;
            ink = color;
            continue;
        }
        if c == HIGHLIGHT_MARKER {
            ink = Rgb::YELLOW;
        }

        let c = resolve(font, c);
        let advance = (font.advance(c) << scale) as i32;
        let Some(rows) = font.glyph(c) else {
            dx += advance;
            continue;
        };

        for (row, bits) in rows.iter().enumerate() {
            let py = y + dy + (row as i32) * block as i32;
            for col in 0..font.width.min(8) {
                if bits & (0x80 >> col) != 0 {
                    let px = x + dx + (col * block) as i32;
                    surface.fill_rect(target, px, py, block, block, ink);
                }
            }
        }

        dx += advance;
    }
}
