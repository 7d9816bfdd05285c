//! Compiled-in icons
//!
//! RGBA run-length streams (see [`crate::rle`]); transparent pixels let
//! the background rectangle drawn underneath show through.

use crate::rle::RleImage;

/// Boot logo, shown when no custom splash image is installed
pub const LOGO: RleImage<'static> = RleImage::new(262, 56, 4, &LOGO_DATA);

/// Restart into the configuration OS
pub const CONFIG_OS: RleImage<'static> = RleImage::new(64, 64, 4, &CONFIG_OS_DATA);

/// System settings
pub const SETTINGS: RleImage<'static> = RleImage::new(64, 64, 4, &SETTINGS_DATA);

/// Touchscreen calibration
pub const CALIBRATION: RleImage<'static> = RleImage::new(64, 64, 4, &CALIBRATION_DATA);

#[rustfmt::skip]
static LOGO_DATA: [u8; 5186] = [
    0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe,
    0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xb6, 0x00,
    0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00,
    0x00, 0x00, 0x83, 0x00, 0x00, 0x00, 0x00, 0x8d, 0xe8, 0x9a, 0x1c, 0x80, 0xfe, 0x00, 0x00, 0x00,
    0x00, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0x80, 0x89, 0x00, 0x00, 0x00, 0x00,
    0x85, 0xe8, 0x9a, 0x1c, 0x80, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xf3, 0x00, 0x00, 0x00, 0x00, 0x83,
    0xe8, 0x9a, 0x1c, 0x80, 0x91, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0xfe, 0x00,
    0x00, 0x00, 0x00, 0xef, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0x95, 0x00, 0x00,
    0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xec, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x99, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80,
    0xfe, 0x00, 0x00, 0x00, 0x00, 0xe9, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0x89,
    0x00, 0x00, 0x00, 0x00, 0x89, 0xe8, 0x9a, 0x1c, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8,
    0x9a, 0x1c, 0x80, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xe6, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a,
    0x1c, 0x80, 0x87, 0x00, 0x00, 0x00, 0x00, 0x8f, 0xe8, 0x9a, 0x1c, 0xff, 0x87, 0x00, 0x00, 0x00,
    0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0x90, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff,
    0xc8, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x89,
    0x6d, 0x6d, 0x70, 0xff, 0xcb, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x87, 0x00,
    0x00, 0x00, 0x00, 0x93, 0xe8, 0x9a, 0x1c, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a,
    0x1c, 0x80, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0xc8, 0x00, 0x00, 0x00,
    0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff,
    0xcb, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x86, 0x00, 0x00, 0x00, 0x00, 0x87,
    0xe8, 0x9a, 0x1c, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x87, 0xe8, 0x9a, 0x1c, 0xff, 0x86, 0x00,
    0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d,
    0x70, 0xff, 0xc8, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0xaa, 0x00, 0x00, 0x00,
    0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0xca, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80,
    0x85, 0x00, 0x00, 0x00, 0x00, 0x86, 0xe8, 0x9a, 0x1c, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x86,
    0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x91, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xc5, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0xad, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xc9, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x85, 0x00, 0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0xff,
    0x91, 0x00, 0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x82,
    0xe8, 0x9a, 0x1c, 0x80, 0x90, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xc5, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xad, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0xc8, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x85, 0x00, 0x00, 0x00,
    0x00, 0x85, 0xe8, 0x9a, 0x1c, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0xff,
    0x85, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0xc5, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xad, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xc8, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a,
    0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x88, 0x00, 0x00, 0x00,
    0x00, 0x87, 0xe8, 0x9a, 0x1c, 0xff, 0x88, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0xc5, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xad, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xc7, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a,
    0x1c, 0x80, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x87, 0x00, 0x00, 0x00,
    0x00, 0x8b, 0xe8, 0x9a, 0x1c, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x85, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0xc5, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xad, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xc7, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a,
    0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00,
    0x00, 0x8f, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0xc5, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xad, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xc7, 0x00, 0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a,
    0x1c, 0x80, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00,
    0x00, 0x91, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x85, 0x00, 0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x8c,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00,
    0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8c, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00,
    0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a,
    0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x93, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00,
    0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80,
    0x8d, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x8f,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00,
    0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff,
    0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x85, 0x00,
    0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x95, 0xe8, 0x9a,
    0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00,
    0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff,
    0x8c, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x8f,
    0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00,
    0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x01,
    0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00,
    0x00, 0x00, 0x00, 0x95, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a,
    0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x8d, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a,
    0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00,
    0x00, 0x97, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x97,
    0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00,
    0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00,
    0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x97, 0xe8, 0x9a,
    0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x97, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83,
    0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00,
    0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x97, 0xe8, 0x9a,
    0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x97, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83,
    0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00,
    0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x97, 0xe8, 0x9a,
    0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x97, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83,
    0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00,
    0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x97, 0xe8, 0x9a,
    0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x97, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83,
    0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00,
    0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x95, 0xe8, 0x9a,
    0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00,
    0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00,
    0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x95, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83,
    0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x8d, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x95, 0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x82,
    0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00,
    0x00, 0x00, 0x00, 0x93, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a,
    0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8d, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x95, 0x6d, 0x6d, 0x70, 0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a,
    0x1c, 0x80, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00,
    0x00, 0x91, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff,
    0x85, 0x00, 0x00, 0x00, 0x00, 0x01, 0xe8, 0x9a, 0x1c, 0x80, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00,
    0x00, 0x95, 0x6d, 0x6d, 0x70, 0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80,
    0x84, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x8f,
    0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00,
    0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d,
    0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x8c,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x85, 0x00, 0x00, 0x00,
    0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x8b, 0xe8, 0x9a, 0x1c, 0xff,
    0x87, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x82,
    0xe8, 0x9a, 0x1c, 0x80, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00,
    0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d,
    0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff,
    0x89, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x95, 0x00,
    0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x84, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a,
    0x1c, 0xff, 0x88, 0x00, 0x00, 0x00, 0x00, 0x87, 0xe8, 0x9a, 0x1c, 0xff, 0x88, 0x00, 0x00, 0x00,
    0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80,
    0x8f, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x8f,
    0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00,
    0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d,
    0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00,
    0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x83, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x82,
    0xe8, 0x9a, 0x1c, 0x80, 0x85, 0x00, 0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0xff, 0x93, 0x00,
    0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a,
    0x1c, 0x80, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xde, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x85, 0x00, 0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0xff,
    0x91, 0x00, 0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x82,
    0xe8, 0x9a, 0x1c, 0x80, 0xf9, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xdf, 0x00,
    0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x85, 0x00, 0x00, 0x00, 0x00, 0x86, 0xe8, 0x9a,
    0x1c, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x86, 0xe8, 0x9a, 0x1c, 0xff, 0x85, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0xfa, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0xe0, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x86, 0x00, 0x00, 0x00, 0x00, 0x87,
    0xe8, 0x9a, 0x1c, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x87, 0xe8, 0x9a, 0x1c, 0xff, 0x86, 0x00,
    0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0xef, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xe0, 0x00, 0x00, 0x00,
    0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0x87, 0x00, 0x00, 0x00, 0x00, 0x93, 0xe8, 0x9a, 0x1c, 0xff,
    0x87, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0xef, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xe1, 0x00,
    0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0x87, 0x00, 0x00, 0x00, 0x00, 0x8f, 0xe8, 0x9a,
    0x1c, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0xf0, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0xe2, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0x89, 0x00, 0x00, 0x00, 0x00, 0x89,
    0xe8, 0x9a, 0x1c, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0xf4, 0x00,
    0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff, 0xe7, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a,
    0x1c, 0x80, 0x99, 0x00, 0x00, 0x00, 0x00, 0x82, 0xe8, 0x9a, 0x1c, 0x80, 0xf6, 0x00, 0x00, 0x00,
    0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff, 0xe8, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80,
    0x95, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0xf7, 0x00, 0x00, 0x00, 0x00, 0x8c,
    0x6d, 0x6d, 0x70, 0xff, 0xea, 0x00, 0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0x91, 0x00,
    0x00, 0x00, 0x00, 0x83, 0xe8, 0x9a, 0x1c, 0x80, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xf3, 0x00, 0x00,
    0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c, 0x80, 0x89, 0x00, 0x00, 0x00, 0x00, 0x85, 0xe8, 0x9a, 0x1c,
    0x80, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xf8, 0x00, 0x00, 0x00, 0x00, 0x8d, 0xe8, 0x9a, 0x1c, 0x80,
    0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0x83, 0x00, 0x00, 0x00, 0x00, 0x01,
    0xe8, 0x9a, 0x1c, 0x80, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00,
    0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00,
    0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x00, 0x00, 0x00,
    0x00, 0x00,
];

#[rustfmt::skip]
static CONFIG_OS_DATA: [u8; 1326] = [
    0xfe, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xdf, 0x00, 0x00, 0x00, 0x00, 0x8a,
    0x6d, 0x6d, 0x70, 0xff, 0xb2, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x6d, 0x6d, 0x70, 0xff, 0xb1, 0x00,
    0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0xaf, 0x00, 0x00, 0x00, 0x00, 0x91, 0x6d, 0x6d,
    0x70, 0xff, 0xad, 0x00, 0x00, 0x00, 0x00, 0x93, 0x6d, 0x6d, 0x70, 0xff, 0xac, 0x00, 0x00, 0x00,
    0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x82, 0x6d, 0x6d, 0x70, 0xff,
    0x9e, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x6d, 0x6d, 0x70, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00,
    0x00, 0x00, 0x00, 0x8b, 0x6d, 0x6d, 0x70, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d,
    0x70, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff, 0x91, 0x00, 0x00, 0x00,
    0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x6d, 0x6d, 0x70, 0xff,
    0x92, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x8b,
    0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00,
    0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d,
    0x70, 0xff, 0x9c, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00,
    0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x9d, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff,
    0x91, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x9e, 0x00, 0x00, 0x00, 0x00, 0x8b,
    0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x9f, 0x00,
    0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x9f, 0x00, 0x00, 0x00,
    0x00, 0x82, 0x6d, 0x6d, 0x70, 0xff, 0x83, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff,
    0x8e, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x9f, 0x00, 0x00, 0x00, 0x00, 0x82,
    0x6d, 0x6d, 0x70, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8d, 0x00,
    0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d,
    0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d, 0x70, 0xff,
    0x8b, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8b, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00,
    0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8b, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x83,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00,
    0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d,
    0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff,
    0x8b, 0x00, 0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00,
    0x00, 0x00, 0x00, 0x92, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d,
    0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0xa6, 0x00, 0x00, 0x00,
    0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff,
    0xa4, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x86,
    0x6d, 0x6d, 0x70, 0xff, 0xa4, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00,
    0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0xa2, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d,
    0x70, 0xff, 0x91, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0xa0, 0x00, 0x00, 0x00,
    0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff,
    0x9e, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0x88,
    0x6d, 0x6d, 0x70, 0xff, 0x9c, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0x95, 0x00,
    0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d,
    0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x98, 0x00, 0x00, 0x00,
    0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff,
    0x94, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0x8b,
    0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x8b, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00,
    0x00, 0x00, 0x00, 0x8d, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x8d, 0x6d, 0x6d,
    0x70, 0xff, 0x9e, 0x00, 0x00, 0x00, 0x00, 0xa0, 0x6d, 0x6d, 0x70, 0xff, 0xa1, 0x00, 0x00, 0x00,
    0x00, 0x9e, 0x6d, 0x6d, 0x70, 0xff, 0xa4, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d, 0x6d, 0x70, 0xff,
    0xa8, 0x00, 0x00, 0x00, 0x00, 0x96, 0x6d, 0x6d, 0x70, 0xff, 0xac, 0x00, 0x00, 0x00, 0x00, 0x92,
    0x6d, 0x6d, 0x70, 0xff, 0xb2, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff, 0xfe, 0x00,
    0x00, 0x00, 0x00, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xdf, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
static SETTINGS_DATA: [u8; 1016] = [
    0xfe, 0x00, 0x00, 0x00, 0x00, 0xdd, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff, 0xb7,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d,
    0x6d, 0x70, 0xff, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0xb8, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70,
    0xff, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x82, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x82, 0x6d, 0x6d, 0x70, 0xff, 0x9b,
    0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d,
    0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x98, 0x00, 0x00,
    0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70,
    0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00,
    0x87, 0x6d, 0x6d, 0x70, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x84,
    0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d,
    0x6d, 0x70, 0xff, 0x01, 0x00, 0x00, 0x00, 0x00, 0x98, 0x6d, 0x6d, 0x70, 0xff, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00, 0xae, 0x6d, 0x6d, 0x70,
    0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0xae, 0x6d, 0x6d, 0x70, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00,
    0xaa, 0x6d, 0x6d, 0x70, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0xa8, 0x6d, 0x6d, 0x70, 0xff, 0x99,
    0x00, 0x00, 0x00, 0x00, 0xa6, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0xa4, 0x6d,
    0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0xa6, 0x6d, 0x6d, 0x70, 0xff, 0x9a, 0x00, 0x00,
    0x00, 0x00, 0xa6, 0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0xa8, 0x6d, 0x6d, 0x70,
    0xff, 0x98, 0x00, 0x00, 0x00, 0x00, 0x91, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00,
    0x91, 0x6d, 0x6d, 0x70, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70, 0xff, 0x8a,
    0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d,
    0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00,
    0x00, 0x00, 0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x6d, 0x6d, 0x70,
    0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x01, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00,
    0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x86,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x95, 0x6d,
    0x6d, 0x70, 0xff, 0x90, 0x00, 0x00, 0x00, 0x00, 0x95, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00,
    0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70,
    0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00,
    0x94, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x92,
    0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d,
    0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00,
    0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70,
    0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x92, 0x00, 0x00, 0x00, 0x00,
    0x94, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x95, 0x6d, 0x6d, 0x70, 0xff, 0x90,
    0x00, 0x00, 0x00, 0x00, 0x95, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x01, 0x6d,
    0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x90, 0x00, 0x00,
    0x00, 0x00, 0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x01, 0x6d, 0x6d, 0x70,
    0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00,
    0x8e, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x8c,
    0x00, 0x00, 0x00, 0x00, 0x8f, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x90, 0x6d,
    0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70, 0xff, 0x97, 0x00, 0x00,
    0x00, 0x00, 0x91, 0x6d, 0x6d, 0x70, 0xff, 0x86, 0x00, 0x00, 0x00, 0x00, 0x91, 0x6d, 0x6d, 0x70,
    0xff, 0x98, 0x00, 0x00, 0x00, 0x00, 0xa8, 0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00,
    0xa6, 0x6d, 0x6d, 0x70, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00, 0xa6, 0x6d, 0x6d, 0x70, 0xff, 0x9b,
    0x00, 0x00, 0x00, 0x00, 0xa4, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0xa6, 0x6d,
    0x6d, 0x70, 0xff, 0x99, 0x00, 0x00, 0x00, 0x00, 0xa8, 0x6d, 0x6d, 0x70, 0xff, 0x97, 0x00, 0x00,
    0x00, 0x00, 0xaa, 0x6d, 0x6d, 0x70, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0xae, 0x6d, 0x6d, 0x70,
    0xff, 0x92, 0x00, 0x00, 0x00, 0x00, 0xae, 0x6d, 0x6d, 0x70, 0xff, 0x93, 0x00, 0x00, 0x00, 0x00,
    0x89, 0x6d, 0x6d, 0x70, 0xff, 0x01, 0x00, 0x00, 0x00, 0x00, 0x98, 0x6d, 0x6d, 0x70, 0xff, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d,
    0x6d, 0x70, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70, 0xff, 0x84, 0x00, 0x00,
    0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70,
    0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00,
    0x86, 0x6d, 0x6d, 0x70, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d, 0x6d, 0x70, 0xff, 0x8b,
    0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x83, 0x6d,
    0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x82, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00,
    0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x82, 0x6d, 0x6d, 0x70,
    0xff, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0xb8, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x6d, 0x6d, 0x70, 0xff, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0xb8,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0xb8, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d,
    0x6d, 0x70, 0xff, 0xb7, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff, 0xfe, 0x00, 0x00,
    0x00, 0x00, 0xdd, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[rustfmt::skip]
static CALIBRATION_DATA: [u8; 1296] = [
    0xfe, 0x00, 0x00, 0x00, 0x00, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d,
    0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00,
    0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70,
    0xff, 0xbc, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xb9, 0x00, 0x00, 0x00, 0x00, 0x8a, 0x6d, 0x6d, 0x70, 0xff, 0xb3,
    0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70, 0xff, 0xae, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d,
    0x6d, 0x70, 0xff, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x98, 0x6d, 0x6d, 0x70, 0xff, 0xa7, 0x00, 0x00,
    0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70,
    0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0xa4, 0x00, 0x00, 0x00, 0x00,
    0x88, 0x6d, 0x6d, 0x70, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x85,
    0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0xa1, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d,
    0x6d, 0x70, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x87, 0x00, 0x00,
    0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x9f, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70,
    0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00,
    0x86, 0x6d, 0x6d, 0x70, 0xff, 0x9e, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x8a,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d,
    0x6d, 0x70, 0xff, 0x9d, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00,
    0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70,
    0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x9a,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d,
    0x6d, 0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00,
    0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70,
    0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x98, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8e,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d,
    0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00,
    0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70,
    0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8f,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d,
    0x6d, 0x70, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00,
    0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70,
    0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xa4, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xa4,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d,
    0x6d, 0x70, 0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x82, 0x00, 0x00,
    0x00, 0x00, 0x9a, 0x6d, 0x6d, 0x70, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d, 0x6d, 0x70,
    0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x82, 0x00, 0x00, 0x00, 0x00,
    0x9a, 0x6d, 0x6d, 0x70, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d, 0x6d, 0x70, 0xff, 0x82,
    0x00, 0x00, 0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d,
    0x6d, 0x70, 0xff, 0x84, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d, 0x6d, 0x70, 0xff, 0x82, 0x00, 0x00,
    0x00, 0x00, 0x84, 0xe8, 0x9a, 0x1c, 0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x9a, 0x6d, 0x6d, 0x70,
    0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xa4, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xa4,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x94, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d,
    0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00,
    0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x95, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70,
    0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8f,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8f, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d,
    0x6d, 0x70, 0xff, 0x96, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00,
    0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70,
    0xff, 0x97, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8e, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x98,
    0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d,
    0x6d, 0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x99, 0x00, 0x00,
    0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70,
    0xff, 0x8d, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x9a, 0x00, 0x00, 0x00, 0x00,
    0x85, 0x6d, 0x6d, 0x70, 0xff, 0x8c, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8c,
    0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x9b, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d,
    0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8b, 0x00, 0x00,
    0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70, 0xff, 0x9d, 0x00, 0x00, 0x00, 0x00, 0x85, 0x6d, 0x6d, 0x70,
    0xff, 0x8a, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x8a, 0x00, 0x00, 0x00, 0x00,
    0x85, 0x6d, 0x6d, 0x70, 0xff, 0x9e, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d, 0x6d, 0x70, 0xff, 0x89,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x89, 0x00, 0x00, 0x00, 0x00, 0x86, 0x6d,
    0x6d, 0x70, 0xff, 0x9f, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70, 0xff, 0x87, 0x00, 0x00,
    0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0x87, 0x00, 0x00, 0x00, 0x00, 0x87, 0x6d, 0x6d, 0x70,
    0xff, 0xa1, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0x85, 0x00, 0x00, 0x00, 0x00, 0x88, 0x6d, 0x6d, 0x70, 0xff, 0xa4,
    0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d,
    0x6d, 0x70, 0xff, 0x82, 0x00, 0x00, 0x00, 0x00, 0x89, 0x6d, 0x6d, 0x70, 0xff, 0xa7, 0x00, 0x00,
    0x00, 0x00, 0x98, 0x6d, 0x6d, 0x70, 0xff, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x94, 0x6d, 0x6d, 0x70,
    0xff, 0xae, 0x00, 0x00, 0x00, 0x00, 0x90, 0x6d, 0x6d, 0x70, 0xff, 0xb3, 0x00, 0x00, 0x00, 0x00,
    0x8a, 0x6d, 0x6d, 0x70, 0xff, 0xb9, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc,
    0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d,
    0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00,
    0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70,
    0xff, 0xbc, 0x00, 0x00, 0x00, 0x00, 0x84, 0x6d, 0x6d, 0x70, 0xff, 0xbc, 0x00, 0x00, 0x00, 0x00,
    0x84, 0x6d, 0x6d, 0x70, 0xff, 0xfe, 0x00, 0x00, 0x00, 0x00, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_decode_fully() {
        for icon in [LOGO, CONFIG_OS, SETTINGS, CALIBRATION] {
            let count = icon.pixels().count() as u32;
            assert_eq!(count, icon.width * icon.height);
        }
    }

    #[test]
    fn test_icons_have_ink_and_holes() {
        for icon in [CONFIG_OS, SETTINGS, CALIBRATION] {
            let opaque = icon.pixels().filter(|p| p.opaque).count();
            assert!(opaque > 0);
            assert!(opaque < (icon.width * icon.height) as usize);
        }
    }
}
