//! Depth-bounded alpha-beta search over the player's swipes and the computer's placements.
//!
//! The player is the maximizing side. The computer is assumed to answer every swipe with
//! whichever placement, and whichever color hint for the following card, is worst for the player.
//! The hint is hidden from the player until the card is placed, so all three colors are searched.

use log::{debug, trace, warn};

use crate::error::EngineError;
use crate::evaluation::{board_evaluator, BoardScore};
use crate::move_gen::{game_is_over, generate_placements};
use crate::position::{Board, NextColor, PlayerMove};

/// Plies searched by default. One ply is a swipe followed by the computer's placement.
pub const DEFAULT_DEPTH: u16 = 4;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchSettings {
    depth: u16,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchSettings {
    /// Number of plies to search. At depth 0, the root is only evaluated statically, and no move is chosen.
    pub fn add_depth(mut self, depth: u16) -> Self {
        self.depth = depth;
        self
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }
}

/// The outcome of a search.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct MinimaxResult {
    /// `None` if no swipe is legal
    pub best_move: Option<PlayerMove>,
    pub score: BoardScore,
    /// True if every visited continuation ends with the board locked up.
    /// Branches skipped by alpha-beta cutoffs are not consulted, so this may be optimistic.
    pub death_guaranteed: bool,
}

impl MinimaxResult {
    fn dead_end() -> Self {
        MinimaxResult {
            best_move: None,
            score: BoardScore::MIN,
            death_guaranteed: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

/// Search `depth` plies from `board`, within the window `(alpha, beta)`.
///
/// Every branch works on its own copy of the board.
pub fn alpha_beta<F>(
    evaluator: &F,
    board: &Board,
    depth: u16,
    mut alpha: BoardScore,
    beta: BoardScore,
    stats: &mut SearchStats,
) -> Result<MinimaxResult, EngineError>
where
    F: Fn(&Board) -> BoardScore,
{
    stats.nodes += 1;

    if depth == 0 {
        stats.leaves += 1;
        if game_is_over(board) {
            return Ok(MinimaxResult::dead_end());
        }
        return Ok(MinimaxResult {
            best_move: None,
            score: evaluator(board),
            death_guaranteed: false,
        });
    }

    let mut best: Option<(PlayerMove, BoardScore)> = None;
    let mut death_guaranteed = true;
    let mut placements = vec![];

    for mv in PlayerMove::ALL {
        if !board.can_shift(mv) {
            continue;
        }
        let mut shifted = *board;
        shifted.shift(mv)?;

        placements.clear();
        generate_placements(&shifted, mv, &mut placements);
        // A swipe that moved anything always frees a cell on the entry edge
        if placements.is_empty() {
            return Err(EngineError::InternalInvariantViolation(format!(
                "computer has no placement after {} on board\n{:?}",
                mv, shifted
            )));
        }

        let mut move_score = beta;
        'computer: for placement in placements.iter() {
            for next_color in NextColor::ALL {
                let mut child = shifted;
                child.computers_move(mv, *placement, next_color)?;

                let result = alpha_beta(evaluator, &child, depth - 1, alpha, move_score, stats)?;
                if !result.death_guaranteed {
                    death_guaranteed = false;
                }
                if result.score < move_score {
                    move_score = result.score;
                }
                if move_score <= alpha {
                    stats.cutoffs += 1;
                    break 'computer;
                }
            }
        }

        trace!("Depth {}: {} scores {}", depth, mv, move_score);

        if best.map_or(true, |(_, best_score)| move_score > best_score) {
            best = Some((mv, move_score));
        }
        if move_score > alpha {
            alpha = move_score;
        }
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    match best {
        Some((best_move, score)) => Ok(MinimaxResult {
            best_move: Some(best_move),
            score,
            death_guaranteed,
        }),
        None => Ok(MinimaxResult::dead_end()),
    }
}

/// Run a full-window search from the root with a custom evaluation function.
pub fn run_minimax<F>(
    evaluator: F,
    board: &Board,
    settings: &SearchSettings,
) -> Result<(MinimaxResult, SearchStats), EngineError>
where
    F: Fn(&Board) -> BoardScore,
{
    let mut stats = SearchStats::default();
    let result = alpha_beta(
        &evaluator,
        board,
        settings.depth(),
        BoardScore::MIN,
        BoardScore::MAX,
        &mut stats,
    )?;

    debug!(
        "Searched {} nodes, {} leaves, {} cutoffs at depth {}. Best move {:?} with score {}",
        stats.nodes,
        stats.leaves,
        stats.cutoffs,
        settings.depth(),
        result.best_move,
        result.score
    );
    if result.death_guaranteed {
        warn!("Death is unavoidable at this point");
    }

    Ok((result, stats))
}

/// Search with the friction evaluator and the given settings.
pub fn search(board: &Board, settings: &SearchSettings) -> Result<MinimaxResult, EngineError> {
    run_minimax(board_evaluator, board, settings).map(|(result, _)| result)
}
