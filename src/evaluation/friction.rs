use crate::evaluation::BoardScore;
use crate::position::{Board, Card, CardPosition, BOARD_SIZE};

/// How many steps two neighbouring cards are from being mergeable. Symmetric, and 0 if either cell is empty.
///
/// 1s and 2s count as one extra step away from the 3-ladder. Beyond that,
/// each doubling between the two cards counts as one step.
pub fn card_friction(a: Card, b: Card) -> BoardScore {
    let (low, high) = if a.value() <= b.value() {
        (a.value(), b.value())
    } else {
        (b.value(), a.value())
    };

    if low == 0 {
        return 0.0;
    }

    let (low, extra_step) = match (low, high) {
        (1, 1) | (2, 2) => return 2.0,
        (1, 2) => return 0.0,
        (1, _) | (2, _) => (3, 1),
        _ => (low, 0),
    };

    debug_assert!(Card::is_three_family(low) && Card::is_three_family(high));

    (extra_step + (high / 3).ilog2() - (low / 3).ilog2()) as BoardScore
}

/// Total friction over all 24 pairs of horizontally or vertically adjacent cells.
pub fn compute_board_friction(board: &Board) -> BoardScore {
    let cell = |x: usize, y: usize| board[CardPosition::new(x as u8, y as u8)];
    let mut friction = 0.0;

    for x in 0..BOARD_SIZE - 1 {
        for y in 0..BOARD_SIZE {
            friction += card_friction(cell(x, y), cell(x + 1, y));
        }
    }

    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE - 1 {
            friction += card_friction(cell(x, y), cell(x, y + 1));
        }
    }

    friction
}

/// The highest card divided by the board's total friction.
///
/// A board with cards but no friction at all gets the largest finite score.
/// This happens when no two cards touch, or when every touching pair is a 1 and a 2.
/// An empty board scores 0.
pub fn board_evaluator(board: &Board) -> BoardScore {
    let friction = compute_board_friction(board);
    if friction > 0.0 {
        board.max_card().value() as BoardScore / friction
    } else if board.is_empty() {
        0.0
    } else {
        BoardScore::MAX
    }
}
