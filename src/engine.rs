//! Value-in, value-out entry points for drivers.
//!
//! These mirror the `Board` methods, but take a board and return a new one,
//! so callers never share a mutable board with the engine.

use crate::error::EngineError;
use crate::minmax::{self, SearchSettings};
use crate::move_gen;
use crate::position::{Board, CardPlacement, NextColor, PlayerMove};

pub use crate::move_gen::game_is_over;

pub fn apply_shift(board: Board, mv: PlayerMove) -> Result<Board, EngineError> {
    let mut board = board;
    board.shift(mv)?;
    Ok(board)
}

pub fn apply_opponent_move(
    board: Board,
    mv: PlayerMove,
    placement: CardPlacement,
    next_color: NextColor,
) -> Result<Board, EngineError> {
    let mut board = board;
    board.computers_move(mv, placement, next_color)?;
    Ok(board)
}

/// The swipe with the best worst-case outcome, searching the default 4 plies.
/// Returns `None` if the game is over.
pub fn choose_move(board: &Board) -> Result<Option<PlayerMove>, EngineError> {
    minmax::search(board, &SearchSettings::default()).map(|result| result.best_move)
}

pub fn is_terminal(board: &Board) -> bool {
    move_gen::game_is_over(board)
}

pub fn enumerate_opponent_placements(board: &Board, mv: PlayerMove) -> Vec<CardPlacement> {
    move_gen::possible_placements(board, mv)
}
