//! Framebuffer rendering for bootglow
//!
//! This crate provides:
//! - `Surface` over mapped display memory with a flicker-free shadow buffer
//! - Pixel layout detection and encoding (RGB565, BGR565, RGB888, BGR888,
//!   and a generic bitfield fallback)
//! - Rotation by right angles
//! - A run-length image codec and the compiled-in icons
//! - An 8x16 bitmap font with power-of-two scaling
//! - The custom splash image format
//! - `Screen`, which lays out message, icon, logo and progress bar
//!
//! # Architecture
//!
//! Nothing here opens a device. The Linux HAL maps the framebuffer and hands
//! the memory over as a `FrameMemory`; tests use a plain `Vec<u8>`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod assets;
pub mod color;
pub mod error;
pub mod font;
pub mod rle;
pub mod rotation;
pub mod screen;
pub mod splash;
pub mod surface;
pub mod text;

// Re-export key types
pub use color::{PixelFormat, PixelLayout, Rgb};
pub use error::{DisplayError, SplashError};
pub use font::{Font, CONSOLE_8X16};
pub use rle::{DecodedPixel, RleImage};
pub use rotation::Rotation;
pub use screen::{BarGeometry, InfiniteProgress, Palette, Screen, ScreenOptions};
pub use splash::SplashImage;
pub use surface::{Surface, Target};
pub use text::{draw_text, text_extent};
