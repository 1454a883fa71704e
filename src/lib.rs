//! TUI Arcade (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_arcade::{core,input,term,types}` and
//! holds the runner's own pieces: configuration and the session journal.

pub mod config;
pub mod journal;

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;
