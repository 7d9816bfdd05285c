//! Boot-mode state machine
//!
//! Tracks the service gesture from the moment it fires to the action it
//! ends in. Transitions are pure; the controller in the splash binary
//! performs the screen updates and side effects for each state.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{BootAction, BootMode};
