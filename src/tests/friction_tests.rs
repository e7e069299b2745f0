use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::evaluation::{board_evaluator, card_friction, compute_board_friction, BoardScore};
use crate::position::{Board, Card, NextColor};
use crate::tests::{board_from_values, random_board};

fn card(value: u32) -> Card {
    Card::new(value).unwrap()
}

#[test]
fn card_friction_values_test() {
    let expected: [(u32, u32, BoardScore); 12] = [
        (1, 1, 2.0),
        (2, 2, 2.0),
        (1, 2, 0.0),
        (1, 3, 1.0),
        (2, 3, 1.0),
        (1, 6, 2.0),
        (2, 12, 3.0),
        (3, 3, 0.0),
        (3, 6, 1.0),
        (3, 24, 3.0),
        (6, 48, 3.0),
        (96, 96, 0.0),
    ];
    for (a, b, friction) in expected {
        assert_eq!(card_friction(card(a), card(b)), friction, "{} and {}", a, b);
    }
}

#[test]
fn card_friction_is_symmetric_test() {
    let values = [1, 2, 3, 6, 12, 24, 48, 96, 192, 384, 768];
    for a in values {
        for b in values {
            assert_eq!(card_friction(card(a), card(b)), card_friction(card(b), card(a)));
            assert!(card_friction(card(a), card(b)) >= 0.0);
        }
    }
}

#[test]
fn empty_cell_has_no_friction_test() {
    let empty = Card::EMPTY;
    for value in [1, 2, 3, 6, 768] {
        assert_eq!(card_friction(empty, card(value)), 0.0);
        assert_eq!(card_friction(card(value), empty), 0.0);
    }
    assert_eq!(card_friction(empty, empty), 0.0);
}

#[test]
fn board_friction_test() {
    let ladder = board_from_values(
        [3, 6, 12, 24, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        NextColor::Red,
    );
    assert_eq!(compute_board_friction(&ladder), 3.0);
    assert_eq!(board_evaluator(&ladder), 8.0);

    let mixed = board_from_values(
        [1, 3, 0, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        NextColor::Blue,
    );
    assert_eq!(compute_board_friction(&mixed), 3.0);
    assert_eq!(board_evaluator(&mixed), 2.0);
}

#[test]
fn checkerboard_friction_test() {
    let checkerboard = board_from_values(
        [3, 12, 3, 12, 12, 3, 12, 3, 3, 12, 3, 12, 12, 3, 12, 3],
        NextColor::White,
    );
    // All 24 neighbouring pairs are two doublings apart
    assert_eq!(compute_board_friction(&checkerboard), 48.0);
    assert_eq!(board_evaluator(&checkerboard), 0.25);
}

#[test]
fn frictionless_board_scores_highest_test() {
    let apart = board_from_values(
        [3, 0, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        NextColor::Red,
    );
    assert_eq!(compute_board_friction(&apart), 0.0);
    assert_eq!(board_evaluator(&apart), BoardScore::MAX);

    let ones_and_twos = board_from_values(
        [1, 2, 0, 0, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        NextColor::Red,
    );
    assert_eq!(compute_board_friction(&ones_and_twos), 0.0);
    assert_eq!(board_evaluator(&ones_and_twos), BoardScore::MAX);

    assert_eq!(board_evaluator(&Board::empty(NextColor::White)), 0.0);
}

#[test]
fn evaluator_is_finite_and_positive_test() {
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..1000 {
        let board = random_board(&mut rng);
        let score = board_evaluator(&board);
        assert!(score.is_finite());
        if board.is_empty() {
            assert_eq!(score, 0.0);
        } else {
            assert!(score > 0.0, "Score {} for board\n{:?}", score, board);
        }
    }
}
