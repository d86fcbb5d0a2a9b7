//! Terminal rendering: framebuffer, renderer backend, and scene views.
//!
//! The split keeps the simulation deterministic and testable: `fb` and
//! `game_view` are pure and unit-tested, `renderer` is the only module that
//! touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
