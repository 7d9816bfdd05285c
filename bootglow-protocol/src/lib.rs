//! bootglow control channel protocol
//!
//! Boot scripts drive the splash by writing short text commands into a
//! named pipe. The protocol is deliberately trivial so that a shell `echo`
//! is a valid client.
//!
//! # Protocol Overview
//!
//! ```text
//! ┌──────────┬───┬──────────────────────┬────────────┐
//! │ COMMAND  │ ␠ │ ARGUMENT             │ TERMINATOR │
//! │ QUIT     │   │                      │ NUL or \n  │
//! │ PROGRESS │ ␠ │ signed integer       │ NUL or \n  │
//! │ MSG      │ ␠ │ text (may contain \n)│ NUL        │
//! └──────────┴───┴──────────────────────┴────────────┘
//! ```
//!
//! Bytes are accumulated until a read leaves the buffer ending in a
//! terminator; only then are the frames inside it handed out.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameAccumulator, FrameError, FrameIter, Frames, CHANNEL_BUFFER_SIZE};
pub use messages::{parse_strict_i32, Command, CommandError};
