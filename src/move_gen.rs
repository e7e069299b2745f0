use arrayvec::ArrayVec;

use crate::position::{Board, Card, CardPlacement, NextColor, PlayerMove};

/// All swipes that move at least one card, in the order of `PlayerMove::ALL`.
pub fn legal_player_moves(board: &Board) -> ArrayVec<PlayerMove, 4> {
    PlayerMove::ALL
        .into_iter()
        .filter(|mv| board.can_shift(*mv))
        .collect()
}

/// The game is over when no swipe moves any card.
pub fn game_is_over(board: &Board) -> bool {
    PlayerMove::ALL.into_iter().all(|mv| !board.can_shift(mv))
}

/// Adds every placement the computer could make after the player swiped `mv`, to the provided vector.
///
/// Each empty cell on the entry edge may receive a card matching the board's color hint.
/// A white hint may also produce any bonus card on the 3-ladder strictly below the highest card on the board.
pub fn generate_placements(board: &Board, mv: PlayerMove, placements: &mut Vec<CardPlacement>) {
    let max_value = board.max_card().value();

    for position in mv.entry_edge() {
        if !board[position].is_empty() {
            continue;
        }
        let base_card = Card::from_valid_value(board.next_color().base_value());
        placements.push(CardPlacement::new(base_card, position));

        if board.next_color() == NextColor::White {
            let mut bonus_value = base_card.value() * 2;
            while bonus_value < max_value {
                placements.push(CardPlacement::new(
                    Card::from_valid_value(bonus_value),
                    position,
                ));
                bonus_value *= 2;
            }
        }
    }
}

/// Every placement the computer could make after the player swiped `mv`.
pub fn possible_placements(board: &Board, mv: PlayerMove) -> Vec<CardPlacement> {
    let mut placements = vec![];
    generate_placements(board, mv, &mut placements);
    placements
}
