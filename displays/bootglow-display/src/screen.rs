//! Splash screen composition
//!
//! Places the pieces of the boot screen on a surface:
//!
//! ```text
//! +----------------------------------+
//! |          status message          |  y = 10
//! |                                  |
//! |              icon                |  y = 100 (service menu only)
//! |                                  |
//! |          logo / splash           |  centered in the top 5/6
//! |                                  |
//! |        [=====-------]            |  y = h - h/6
//! +----------------------------------+
//! ```

use bootglow_hal::FrameMemory;
use log::trace;

use crate::color::Rgb;
use crate::font::Font;
use crate::rle::RleImage;
use crate::splash::SplashImage;
use crate::surface::{Surface, Target};
use crate::text::{draw_text, text_extent};

/// Top of the status message area
pub const MESSAGE_TOP: i32 = 10;

/// Baseline offset of the status text inside the message area
pub const MESSAGE_TEXT_TOP: i32 = 15;

/// Top edge of service menu icons
pub const ICON_TOP: i32 = 100;

/// Extra drop of the determinate bar below the infinite one
pub const PROGRESS_BAR_DROP: i32 = 4;

/// Screen colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub text_background: Rgb,
    /// Message background on fast-boot panels
    pub text_background_fastboot: Rgb,
    pub bar: Rgb,
    pub bar_background: Rgb,
}

/// Progress bar size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGeometry {
    pub width: u32,
    pub height: u32,
}

/// Options that stay fixed for the life of the screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenOptions {
    pub palette: Palette,
    pub bar: BarGeometry,
    pub font: &'static Font,
    /// Power-of-two text scale
    pub font_scale: u8,
    /// Use the fast-boot message background
    pub fast_boot: bool,
    /// Progress bar drawing enabled
    pub progress_bar: bool,
}

/// Moving block of the infinite progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfiniteProgress {
    offset: Option<i32>,
    relative_size: u32,
    step: i32,
}

/// Block position for one animation frame, relative to the track origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFrame {
    pub offset: i32,
    pub width: i32,
}

impl InfiniteProgress {
    /// `relative_size`: track width divided by block width
    pub fn new(relative_size: u32, step: i32) -> Self {
        Self {
            offset: None,
            relative_size: relative_size.max(1),
            step,
        }
    }

    /// Current block offset, `None` before the first frame
    pub fn offset(&self) -> Option<i32> {
        self.offset
    }

    /// Compute this frame's block and advance the animation
    ///
    /// The block enters from the left, slides across and wraps once its
    /// offset passes the track width.
    pub fn next_frame(&mut self, track_width: u32) -> BlockFrame {
        let track = track_width as i32;
        let block = track_width.div_ceil(self.relative_size) as i32;

        let offset = match self.offset {
            Some(offset) if offset <= track => offset,
            _ => -block,
        };

        let overflow = (offset + block - track).max(0);
        let width = if offset <= 0 {
            block + offset
        } else {
            block - overflow
        };

        self.offset = Some(offset + self.step);
        BlockFrame { offset, width }
    }
}

/// The boot screen
pub struct Screen<M: FrameMemory> {
    surface: Surface<M>,
    options: ScreenOptions,
}

impl<M: FrameMemory> Screen<M> {
    pub fn new(surface: Surface<M>, options: ScreenOptions) -> Self {
        Self { surface, options }
    }

    pub fn surface(&self) -> &Surface<M> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface<M> {
        &mut self.surface
    }

    pub fn options(&self) -> &ScreenOptions {
        &self.options
    }

    /// Release the surface
    pub fn into_surface(self) -> Surface<M> {
        self.surface
    }

    fn width(&self) -> i32 {
        self.surface.width() as i32
    }

    fn height(&self) -> i32 {
        self.surface.height() as i32
    }

    /// Fill the whole screen with the background color
    pub fn draw_background(&mut self) {
        let color = self.options.palette.background;
        self.surface.clear(Target::Live, color);
    }

    /// Draw the compiled-in logo centered in the top five sixths
    pub fn draw_logo(&mut self, logo: &RleImage<'_>) {
        let x = (self.width() - logo.width as i32) / 2;
        let y = (self.height() * 5 / 6 - logo.height as i32) / 2;
        self.surface.blit_image(Target::Live, x, y, logo);
    }

    /// Draw a custom splash image centered on the screen
    pub fn draw_splash(&mut self, image: &SplashImage<'_>) {
        image.draw(&mut self.surface, Target::Live);
    }

    /// Replace the status message
    pub fn draw_message(&mut self, text: &str) {
        let opts = self.options;
        let (text_w, text_h) = text_extent(opts.font, text, opts.font_scale);
        trace!("message {:?} {}x{}", text, text_w, text_h);

        let background = if opts.fast_boot {
            opts.palette.text_background_fastboot
        } else {
            opts.palette.text_background
        };
        self.surface.fill_rect(
            Target::Live,
            0,
            MESSAGE_TOP,
            self.surface.width(),
            text_h + MESSAGE_TOP as u32,
            background,
        );

        let x = (self.width() - text_w as i32) / 2;
        draw_text(
            &mut self.surface,
            Target::Live,
            x,
            MESSAGE_TEXT_TOP,
            opts.palette.text,
            opts.font,
            text,
            opts.font_scale,
        );
    }

    /// Draw a service menu icon centered at [`ICON_TOP`] on a solid backdrop
    pub fn draw_icon(&mut self, icon: &RleImage<'_>, backdrop: Rgb) {
        let x = (self.width() - icon.width as i32) / 2;
        self.surface
            .fill_rect(Target::Live, x, ICON_TOP, icon.width, icon.height, backdrop);
        self.surface.blit_image(Target::Live, x, ICON_TOP, icon);
    }

    /// Top-left corner of the progress track for a given vertical drop
    fn bar_origin(&self, drop: i32) -> (i32, i32) {
        let x = (self.width() - self.options.bar.width as i32) / 2;
        let y = self.height() - self.height() / 6 + drop;
        (x, y)
    }

    /// Draw the determinate progress bar
    ///
    /// Positive values fill from the left, zero or negative values fill
    /// `-value` percent from the right. Values are clamped to 100.
    pub fn draw_progress(&mut self, value: i32) {
        if !self.options.progress_bar {
            return;
        }

        let BarGeometry { width, height } = self.options.bar;
        let palette = self.options.palette;
        let (x, y) = self.bar_origin(PROGRESS_BAR_DROP);

        let percent = if value > 0 {
            value.clamp(0, 100)
        } else {
            value.saturating_neg().clamp(0, 100)
        };
        let filled = (percent as u32 * width) / 100;
        let empty = width - filled;

        if value > 0 {
            self.surface.fill_rect(
                Target::Live,
                x + filled as i32,
                y,
                empty,
                height,
                palette.bar_background,
            );
            self.surface
                .fill_rect(Target::Live, x, y, filled, height, palette.bar);
        } else {
            self.surface
                .fill_rect(Target::Live, x, y, empty, height, palette.bar_background);
            self.surface.fill_rect(
                Target::Live,
                x + empty as i32,
                y,
                filled,
                height,
                palette.bar,
            );
        }
        trace!("progress {} -> {} of {} px", value, filled, width);
    }

    /// Draw one frame of the infinite progress animation
    ///
    /// Composed off-screen and flushed in one go so the moving block never
    /// flickers against the track.
    pub fn draw_infinite_progress(&mut self, progress: &mut InfiniteProgress) {
        if !self.options.progress_bar {
            return;
        }

        let BarGeometry { width, height } = self.options.bar;
        let palette = self.options.palette;
        let (x, y) = self.bar_origin(0);
        let block = progress.next_frame(width);

        self.surface
            .fill_rect(Target::Shadow, x, y, width, height, palette.bar_background);
        self.surface.fill_rect(
            Target::Shadow,
            x + block.offset,
            y,
            block.width.max(0) as u32,
            height,
            palette.bar,
        );
        self.surface.flush(x, y, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;
    use crate::font::CONSOLE_8X16;
    use crate::rotation::Rotation;
    use crate::surface::tests::surface;

    const BG: Rgb = Rgb::new(0xec, 0xec, 0xe0);
    const TEXT: Rgb = Rgb::new(0x60, 0x60, 0x70);
    const TEXT_BG: Rgb = Rgb::new(0xe0, 0xe0, 0xe0);
    const TEXT_BG_FB: Rgb = Rgb::new(0, 0, 0x10);
    const BAR: Rgb = Rgb::new(0x60, 0x68, 0x70);
    const BAR_BG: Rgb = Rgb::new(0xd0, 0xd0, 0xc8);

    fn options() -> ScreenOptions {
        ScreenOptions {
            palette: Palette {
                background: BG,
                text: TEXT,
                text_background: TEXT_BG,
                text_background_fastboot: TEXT_BG_FB,
                bar: BAR,
                bar_background: BAR_BG,
            },
            bar: BarGeometry {
                width: 100,
                height: 8,
            },
            font: &CONSOLE_8X16,
            font_scale: 0,
            fast_boot: false,
            progress_bar: true,
        }
    }

    fn screen(opts: ScreenOptions) -> Screen<Vec<u8>> {
        Screen::new(surface(200, 120, 32, Rotation::Deg0), opts)
    }

    fn live(screen: &Screen<Vec<u8>>, x: i32, y: i32) -> Rgb {
        screen.surface().pixel(Target::Live, x, y).unwrap()
    }

    #[test]
    fn test_progress_fills_from_left() {
        let mut s = screen(options());
        s.draw_progress(42);

        // Track at x = 50, y = 120 - 20 + 4
        assert_eq!(live(&s, 50, 104), BAR);
        assert_eq!(live(&s, 91, 104), BAR);
        assert_eq!(live(&s, 92, 104), BAR_BG);
        assert_eq!(live(&s, 149, 111), BAR_BG);
        assert_eq!(live(&s, 150, 104), Rgb::BLACK);
    }

    #[test]
    fn test_negative_progress_fills_from_right() {
        let mut s = screen(options());
        s.draw_progress(-25);

        assert_eq!(live(&s, 50, 104), BAR_BG);
        assert_eq!(live(&s, 124, 104), BAR_BG);
        assert_eq!(live(&s, 125, 104), BAR);
        assert_eq!(live(&s, 149, 104), BAR);
    }

    #[test]
    fn test_progress_clamps() {
        let mut s = screen(options());
        s.draw_progress(250);
        assert_eq!(live(&s, 149, 104), BAR);
        s.draw_progress(i32::MIN);
        assert_eq!(live(&s, 50, 104), BAR);
    }

    #[test]
    fn test_progress_disabled() {
        let mut opts = options();
        opts.progress_bar = false;
        let mut s = screen(opts);
        s.draw_progress(50);
        s.draw_infinite_progress(&mut InfiniteProgress::new(4, 2));
        assert!(s.into_surface().into_memory().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_message_area() {
        let mut s = screen(options());
        s.draw_background();
        s.draw_message("hi");

        // Background band from y = 10 to 10 + 16 + 10
        assert_eq!(live(&s, 0, 10), TEXT_BG);
        assert_eq!(live(&s, 199, 35), TEXT_BG);
        assert_eq!(live(&s, 0, 36), BG);
        assert_eq!(live(&s, 0, 9), BG);

        // Text centered: 16 px wide at x = 92
        let inked = (15..31)
            .flat_map(|y| (0..200).map(move |x| (x, y)))
            .filter(|&(x, y)| live(&s, x, y) == TEXT)
            .map(|(x, _)| x);
        let (min, max) = inked.fold((i32::MAX, i32::MIN), |(a, b), x| (a.min(x), b.max(x)));
        assert!(min >= 92 && max < 108);
    }

    #[test]
    fn test_fast_boot_message_background() {
        let mut opts = options();
        opts.fast_boot = true;
        let mut s = screen(opts);
        s.draw_message("x");
        assert_eq!(live(&s, 0, 10), TEXT_BG_FB);
    }

    #[test]
    fn test_icon_backdrop() {
        let mut s = screen(options());
        s.draw_icon(&assets::SETTINGS, Rgb::YELLOW);
        // Corner of the 64x64 icon at x = 68 is transparent
        assert_eq!(live(&s, 68, ICON_TOP), Rgb::YELLOW);
        assert_eq!(live(&s, 67, ICON_TOP), Rgb::BLACK);
    }

    #[test]
    fn test_infinite_progress_block_sequence() {
        let mut progress = InfiniteProgress::new(4, 2);
        assert_eq!(progress.offset(), None);

        let first = progress.next_frame(100);
        assert_eq!(first, BlockFrame { offset: -25, width: 0 });
        assert_eq!(progress.offset(), Some(-23));

        // Walk until the block is fully inside
        let mut frame = first;
        while frame.offset < 10 {
            frame = progress.next_frame(100);
        }
        assert_eq!(frame, BlockFrame { offset: 11, width: 25 });

        // Overflow trims the block at the right end
        while frame.offset < 90 {
            frame = progress.next_frame(100);
        }
        assert_eq!(frame, BlockFrame { offset: 91, width: 9 });

        // Past the end it wraps
        while frame.offset <= 100 {
            frame = progress.next_frame(100);
            if frame.offset < 0 {
                break;
            }
        }
        assert_eq!(frame.offset, -25);
    }

    #[test]
    fn test_infinite_progress_only_touches_track() {
        let mut s = screen(options());
        let mut progress = InfiniteProgress::new(4, 2);
        for _ in 0..40 {
            s.draw_infinite_progress(&mut progress);
        }

        // Track at x = 50, y = 100; last block at offset 53, 25 wide
        assert_eq!(live(&s, 50, 100), BAR_BG);
        assert_eq!(live(&s, 102, 100), BAR_BG);
        assert_eq!(live(&s, 103, 100), BAR);
        assert_eq!(live(&s, 127, 107), BAR);
        assert_eq!(live(&s, 128, 100), BAR_BG);
        assert_eq!(live(&s, 49, 100), Rgb::BLACK);
        assert_eq!(live(&s, 60, 108), Rgb::BLACK);
    }
}
