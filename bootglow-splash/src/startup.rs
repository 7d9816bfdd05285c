//! First frame of the splash
//!
//! A factory-provided image on the splash partition replaces the
//! compiled-in logo when it is present and fits the screen.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use bootglow_core::config::ColorConfig;
use bootglow_display::{
    assets, BarGeometry, Palette, Rgb, Screen, ScreenOptions, SplashImage, CONSOLE_8X16,
};
use bootglow_hal::FrameMemory;
use log::{debug, info, warn};

use crate::runtime::RuntimeContext;

/// Screen options for a surface `logical_width` pixels wide
pub fn screen_options(context: &RuntimeContext, logical_width: u32) -> ScreenOptions {
    let progress = &context.config.progress;
    ScreenOptions {
        palette: palette(&context.config.colors),
        bar: BarGeometry {
            width: progress.bar_width,
            height: progress.bar_height,
        },
        font: &CONSOLE_8X16,
        font_scale: context.font_scale(logical_width),
        fast_boot: context.fast_boot(),
        progress_bar: context.options.progress_bar,
    }
}

pub fn palette(colors: &ColorConfig) -> Palette {
    Palette {
        background: Rgb::from(colors.background),
        text: Rgb::from(colors.text),
        text_background: Rgb::from(colors.text_background),
        text_background_fastboot: Rgb::from(colors.text_background_fastboot),
        bar: Rgb::from(colors.bar),
        bar_background: Rgb::from(colors.bar_background),
    }
}

/// Background, splash image or logo, and the empty progress bar
pub fn draw_boot_screen<M: FrameMemory>(
    screen: &mut Screen<M>,
    context: &RuntimeContext,
    image: Option<&[u8]>,
) {
    screen.draw_background();

    let (width, height) = (screen.surface().width(), screen.surface().height());
    let splash = image.and_then(|bytes| match SplashImage::parse(bytes, width, height) {
        Ok(splash) => Some(splash),
        Err(e) => {
            warn!("splash image rejected: {}", e);
            None
        }
    });

    match splash {
        Some(splash) => {
            info!("custom splash {}x{}", splash.width, splash.height);
            screen.draw_splash(&splash);
        }
        None => screen.draw_logo(&assets::LOGO),
    }

    if !context.options.infinite_progress {
        screen.draw_progress(0);
    }
}

/// Mount the splash partition and read the image, `None` if either fails
pub fn load_splash_image(context: &RuntimeContext) -> Option<Vec<u8>> {
    let mount_point = context.splash_mount_point();
    if let Err(e) = mount_read_only(&context.splash_partition, &mount_point) {
        warn!(
            "cannot mount {} on {}: {}",
            context.splash_partition.display(),
            mount_point.display(),
            e
        );
    }

    let path = context.splash_image_path();
    match fs::read(&path) {
        Ok(bytes) => {
            debug!("{} bytes read from {}", bytes.len(), path.display());
            Some(bytes)
        }
        Err(e) => {
            info!("no custom splash ({}: {}), using the logo", path.display(), e);
            None
        }
    }
}

/// `mount -o ro <partition> <mount_point>`, creating the mount point
fn mount_read_only(partition: &Path, mount_point: &Path) -> io::Result<()> {
    fs::create_dir_all(mount_point)?;
    let status = Command::new("mount")
        .arg("-o")
        .arg("ro")
        .arg(partition)
        .arg(mount_point)
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("mount exited with {}", status),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::platform::mock;
    use crate::runtime::LaunchOptions;
    use bootglow_display::Target;

    fn context(options: LaunchOptions) -> RuntimeContext {
        RuntimeContext::resolve(options, config::embedded(), "", |_| None)
    }

    /// 20x12 image of one RGB565 color
    fn splash_bytes(color: u16) -> Vec<u8> {
        let (width, height) = (20u32, 12u32);
        let mut header = [0u32; 56];
        header[0] = (width - 1) * 2;
        header[2] = width * height * 2;
        let mut bytes: Vec<u8> = header.iter().flat_map(|w| w.to_le_bytes()).collect();
        for _ in 0..width * height {
            bytes.extend_from_slice(&color.to_le_bytes());
        }
        bytes
    }

    fn center(screen: &Screen<Vec<u8>>) -> Rgb {
        screen
            .surface()
            .pixel(Target::Live, mock::WIDTH as i32 / 2, mock::HEIGHT as i32 / 2)
            .unwrap()
    }

    #[test]
    fn test_screen_options_follow_context() {
        let ctx = context(LaunchOptions {
            progress_bar: false,
            ..LaunchOptions::default()
        });
        let options = screen_options(&ctx, 320);
        assert_eq!(options.font_scale, 0);
        assert!(!options.progress_bar);
        assert!(!options.fast_boot);
        assert_eq!(options.bar, BarGeometry { width: 400, height: 16 });
        assert_eq!(options.palette.background, Rgb::new(0xec, 0xec, 0xe1));

        assert_eq!(screen_options(&ctx, 800).font_scale, 1);
    }

    #[test]
    fn test_custom_splash_replaces_logo() {
        let ctx = context(LaunchOptions::default());
        let mut screen = mock::screen(true, false);

        // Pure red in RGB565
        draw_boot_screen(&mut screen, &ctx, Some(&splash_bytes(0xf800)));
        assert_eq!(center(&screen), Rgb::new(0xf8, 0x00, 0x00));
    }

    #[test]
    fn test_bad_splash_falls_back_to_logo() {
        let ctx = context(LaunchOptions::default());
        let mut with_garbage = mock::screen(true, false);
        draw_boot_screen(&mut with_garbage, &ctx, Some(&[0u8; 16]));

        let mut with_logo = mock::screen(true, false);
        draw_boot_screen(&mut with_logo, &ctx, None);

        assert_eq!(
            with_garbage.into_surface().into_memory(),
            with_logo.into_surface().into_memory()
        );
    }

    #[test]
    fn test_progress_bar_track_drawn_unless_infinite() {
        let left = (mock::WIDTH as i32 - 400) / 2;
        let top = mock::HEIGHT as i32 - mock::HEIGHT as i32 / 6 + 4;

        let ctx = context(LaunchOptions::default());
        let mut screen = mock::screen(true, false);
        draw_boot_screen(&mut screen, &ctx, None);
        let track = screen.surface().pixel(Target::Live, left + 10, top).unwrap();
        assert_eq!(track, screen.options().palette.bar_background);

        let ctx = context(LaunchOptions {
            infinite_progress: true,
            ..LaunchOptions::default()
        });
        let mut screen = mock::screen(true, false);
        draw_boot_screen(&mut screen, &ctx, None);
        let track = screen.surface().pixel(Target::Live, left + 10, top).unwrap();
        assert_eq!(track, screen.options().palette.background);
    }

    #[test]
    fn test_missing_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = context(LaunchOptions::default());
        let _ = ctx.config.splash_image.mount_point.clear();
        let _ = ctx
            .config
            .splash_image
            .mount_point
            .push_str(dir.path().join("factory").to_str().unwrap());
        ctx.splash_partition = dir.path().join("no-such-partition");

        assert_eq!(load_splash_image(&ctx), None);
        assert!(dir.path().join("factory").is_dir());
    }
}
