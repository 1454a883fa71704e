//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer. It avoids widget/layout libraries and
//! renders into a plain framebuffer that is diffed and flushed to the terminal.
//!
//! - Views ([`BlocksView`], [`SnakeView`]) are pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns the terminal and only writes changed cells
//! - Board cells are 2 columns wide to keep them roughly square

pub mod blocks_view;
pub mod fb;
pub mod renderer;
pub mod snake_view;
pub mod view;

pub use tui_arcade_core as core;
pub use tui_arcade_types as types;

pub use blocks_view::BlocksView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snake_view::SnakeView;
pub use view::{AnchorY, Viewport};
