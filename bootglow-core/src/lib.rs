//! Device-agnostic logic for the bootglow boot splash
//!
//! This crate contains everything that does not touch a device node:
//!
//! - Configuration types and their defaults
//! - Kernel command line flags and the per-device profile table
//! - Tap-tap gesture counting and the debounced countdown
//! - Boot-mode state machine driven by the gesture

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod gesture;
pub mod state;
