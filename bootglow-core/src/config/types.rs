//! Configuration type definitions
//!
//! These types describe the look and timing of the splash. The binary
//! ships an embedded `splash.toml` with the same values as the `Default`
//! impls below; a site-specific file can override any section.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of a file system path in the config
pub const MAX_PATH_LEN: usize = 128;

/// Maximum length of a bare file name in the config
pub const MAX_NAME_LEN: usize = 32;

/// 8-bit red, green, blue triplet
pub type RgbTriplet = [u8; 3];

/// Complete splash configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplashConfig {
    /// Display device and font selection
    pub display: DisplayConfig,
    /// Palette
    pub colors: ColorConfig,
    /// Progress bar geometry and animation
    pub progress: ProgressConfig,
    /// Tap-tap gesture thresholds
    pub gesture: GestureConfig,
    /// Control channel locations
    pub channel: ChannelConfig,
    /// Custom splash image source
    pub splash_image: SplashImageConfig,
}

/// Display device and font selection
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Framebuffer device, overridden by `FBDEV`
    pub device: String<MAX_PATH_LEN>,
    /// Logical widths below this use the 1x font, others the 2x font
    pub small_font_threshold: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            device: path("/dev/fb0"),
            small_font_threshold: 480,
        }
    }
}

impl DisplayConfig {
    /// Font scale exponent for a given logical width (0 = 1x, 1 = 2x)
    pub fn font_scale_for(&self, logical_width: u32) -> u8 {
        if logical_width < self.small_font_threshold {
            0
        } else {
            1
        }
    }
}

/// Palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorConfig {
    /// Full-screen background
    pub background: RgbTriplet,
    /// Status text
    pub text: RgbTriplet,
    /// Status text area background
    pub text_background: RgbTriplet,
    /// Status text area background on fast-boot panels
    pub text_background_fastboot: RgbTriplet,
    /// Progress bar fill
    pub bar: RgbTriplet,
    /// Progress bar track
    pub bar_background: RgbTriplet,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [0xec, 0xec, 0xe1],
            text: [0x6d, 0x6d, 0x70],
            text_background: [0xec, 0xec, 0xe1],
            text_background_fastboot: [0x00, 0x00, 0x00],
            bar: [0x6d, 0x6d, 0x70],
            bar_background: [0xd4, 0xd4, 0xcc],
        }
    }
}

/// Progress bar geometry and animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressConfig {
    /// Bar width in pixels
    pub bar_width: u32,
    /// Bar height in pixels
    pub bar_height: u32,
    /// Track width divided by the moving block width (infinite mode)
    pub infinite_relative_size: u32,
    /// Pixels the moving block advances per animation tick
    pub infinite_step: i32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            bar_width: 400,
            bar_height: 16,
            infinite_relative_size: 4,
            infinite_step: 2,
        }
    }
}

/// Tap-tap gesture thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Taps above this count show the on-screen counter
    pub feedback_threshold: u32,
    /// Taps above this count start the boot-mode countdown
    pub trigger_threshold: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            feedback_threshold: 4,
            trigger_threshold: 20,
        }
    }
}

/// Control channel locations
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelConfig {
    /// FIFO name, created inside `TMPDIR`
    pub fifo_name: String<MAX_NAME_LEN>,
    /// File receiving the last progress value on `QUIT`
    pub progress_file: String<MAX_PATH_LEN>,
    /// Launcher sync file name, created inside `TMPDIR`
    pub launcher_file: String<MAX_NAME_LEN>,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            fifo_name: name("bootglow_fifo"),
            progress_file: path("/tmp/splash_progress"),
            launcher_file: name("taptap"),
        }
    }
}

/// Custom splash image source
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SplashImageConfig {
    /// Partition holding the image, overridden by `SPLASHPARTITION`
    pub partition: String<MAX_PATH_LEN>,
    /// Read-only mount point for the partition
    pub mount_point: String<MAX_PATH_LEN>,
    /// Image file name inside the mount point
    pub file_name: String<MAX_NAME_LEN>,
}

impl Default for SplashImageConfig {
    fn default() -> Self {
        Self {
            partition: path("/dev/mmcblk1p1"),
            mount_point: path("/mnt/factory"),
            file_name: name("splashimage.bin"),
        }
    }
}

fn path(s: &str) -> String<MAX_PATH_LEN> {
    let mut out = String::new();
    let _ = out.push_str(s);
    out
}

fn name(s: &str) -> String<MAX_NAME_LEN> {
    let mut out = String::new();
    let _ = out.push_str(s);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_scale_threshold() {
        let display = DisplayConfig::default();
        assert_eq!(display.font_scale_for(320), 0);
        assert_eq!(display.font_scale_for(479), 0);
        assert_eq!(display.font_scale_for(480), 1);
        assert_eq!(display.font_scale_for(1280), 1);
    }

    #[test]
    fn test_defaults() {
        let config = SplashConfig::default();
        assert_eq!(config.channel.fifo_name.as_str(), "bootglow_fifo");
        assert_eq!(config.gesture.trigger_threshold, 20);
        assert!(config.gesture.feedback_threshold < config.gesture.trigger_threshold);
        assert_eq!(config.progress.infinite_relative_size, 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SplashConfig = toml::from_str(
            r#"
            [gesture]
            trigger_threshold = 12

            [colors]
            bar = [255, 0, 0]
            "#,
        )
        .unwrap();

        assert_eq!(config.gesture.trigger_threshold, 12);
        assert_eq!(config.gesture.feedback_threshold, 4);
        assert_eq!(config.colors.bar, [255, 0, 0]);
        assert_eq!(config.colors.text, ColorConfig::default().text);
        assert_eq!(config.display, DisplayConfig::default());
    }
}
