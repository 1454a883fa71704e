//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework. Maps `crossterm` key events into
//! [`crate::types::GameAction`] for the block stacker and
//! [`crate::types::Direction`] for snake. Repeat events are mapped like
//! presses, so holding a key repeats the move at the terminal's rate.

pub mod map;

pub use tui_arcade_types as types;

pub use map::{handle_key_event, handle_snake_key, is_restart, should_quit};
