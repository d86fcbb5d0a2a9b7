//! Core simulation: pure, deterministic, and free of I/O.
//!
//! Everything the game *is* lives here: the shape catalog, the piece
//! instance, the walled grid, and the per-frame session update. The crate
//! has no dependency on rendering, input, or timing; callers feed it a
//! frame counter and the actions pressed that frame.
//!
//! # Module structure
//!
//! - [`catalog`]: the seven shapes as static offset patterns
//! - [`piece`]: a placed shape with candidate-building moves
//! - [`board`]: the grid, legality testing, commit/erase, row clearing
//! - [`game`]: the session state machine (playing / game over)
//! - [`rng`]: seeded LCG for uniform piece selection
//!
//! # Error model
//!
//! One error condition exists: an illegal placement, reported by
//! [`Board::is_legal`] as a plain bool. Everything above it (rejected
//! moves, locking, game over) is policy layered on that single primitive.

pub mod board;
pub mod catalog;
pub mod game;
pub mod piece;
pub mod rng;

pub use blockfall_types as types;

pub use board::Board;
pub use catalog::{shape_def, CellOffset, ShapeDef};
pub use game::Game;
pub use piece::Piece;
pub use rng::SimpleRng;
