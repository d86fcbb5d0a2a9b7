//! Terminal input: crossterm key events mapped to discrete game actions.
//!
//! Deliberately free of any UI framework and of repeat/DAS logic: the
//! session contract is one discrete action per press, so this crate is a
//! pure mapping layer the binary queries while polling events.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_confirm, should_quit};
