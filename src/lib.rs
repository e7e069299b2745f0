//! A solver for the tile-merging puzzle Threes.
//!
//! Given a board, the engine picks the swipe with the best worst-case outcome against a computer
//! that places new cards adversarially. See [`engine::choose_move`].

pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod minmax;
pub mod move_gen;
pub mod position;
#[cfg(feature = "serde")]
pub mod protocol;
mod tests;

pub use error::EngineError;
