//! Terminal status module.
//!
//! A small rendering layer that shows the live coroutines of a scheduler in
//! a terminal. [`StatusView`] is pure and produces styled lines from a
//! snapshot; [`TerminalRenderer`] writes them with crossterm.

pub mod renderer;
pub mod status_view;

pub use frame_coro_core as core;
pub use frame_coro_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use status_view::{clip_lines, LineStyle, Rgb, StatusLine, StatusView};
