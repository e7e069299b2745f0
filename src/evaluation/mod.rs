//! Static evaluation of boards, used at the leaves of the search.

mod friction;

pub use friction::{board_evaluator, card_friction, compute_board_friction};

/// Scores are plain floats. Higher is better for the player.
pub type BoardScore = f64;
