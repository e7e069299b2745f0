use crate::error::EngineError;
use crate::position::{can_combine, Card, CardPlacement, CardPosition};
use crate::tests::placement;

const VALID_VALUES: [u32; 14] = [1, 2, 3, 6, 12, 24, 48, 96, 192, 384, 768, 1536, 3072, 6144];

fn card(value: u32) -> Card {
    Card::new(value).unwrap()
}

#[test]
fn valid_card_values_test() {
    for value in VALID_VALUES {
        assert!(Card::is_valid_value(value), "{} should be valid", value);
        assert_eq!(card(value).value(), value);
    }
    for value in [0, 4, 5, 7, 8, 9, 10, 15, 18, 36, 45, 100] {
        assert!(!Card::is_valid_value(value), "{} should be invalid", value);
    }
}

#[test]
fn valid_values_match_ladder_test() {
    for value in 0..10_000u32 {
        let on_ladder = value == 1
            || value == 2
            || (value % 3 == 0 && (value / 3).count_ones() == 1);
        assert_eq!(Card::is_valid_value(value), on_ladder, "Disagreement on {}", value);
    }
}

#[test]
fn empty_card_cannot_be_constructed_test() {
    assert!(matches!(Card::new(0), Err(EngineError::InvalidCardValue(0))));
    assert!(matches!(Card::new(4), Err(EngineError::InvalidCardValue(4))));
    assert!(matches!(Card::try_from(9u32), Err(EngineError::InvalidCardValue(9))));
}

#[test]
fn ones_do_not_combine_test() {
    assert!(!can_combine(card(1), card(1)));
    assert!(matches!(
        card(1).combine(card(1)),
        Err(EngineError::IllegalCombine)
    ));
}

#[test]
fn can_combine_test() {
    assert!(can_combine(card(1), card(2)));
    assert!(can_combine(card(2), card(1)));
    assert!(can_combine(card(3), card(3)));
    assert!(can_combine(card(96), card(96)));

    assert!(!can_combine(card(2), card(2)));
    assert!(!can_combine(card(1), card(3)));
    assert!(!can_combine(card(3), card(6)));
    assert!(!can_combine(card(12), card(6)));
}

#[test]
fn combine_test() {
    assert_eq!(card(1).combine(card(2)).unwrap(), card(3));
    assert_eq!(card(3).combine(card(3)).unwrap(), card(6));
    assert_eq!(card(384).combine(card(384)).unwrap(), card(768));
    assert!(matches!(
        card(3).combine(card(6)),
        Err(EngineError::InvalidCardValue(9))
    ));
}

#[test]
fn slide_into_empty_keeps_value_test() {
    for value in VALID_VALUES {
        assert!(can_combine(card(value), Card::EMPTY));
        assert_eq!(card(value).combine(Card::EMPTY).unwrap().value(), value);
    }
}

#[test]
fn parse_placement_test() {
    assert_eq!(
        "3 1 2".parse::<CardPlacement>().unwrap(),
        CardPlacement::new(card(3), CardPosition::new(1, 2))
    );
    assert_eq!("  12 0 3\n".parse::<CardPlacement>().unwrap(), placement(12, 0, 3));
    assert_eq!(placement(48, 3, 1).to_string(), "48 3 1");

    assert!(matches!(
        "3 4 0".parse::<CardPlacement>(),
        Err(EngineError::InvalidPosition { x: 4, y: 0 })
    ));
    assert!(matches!(
        "5 0 0".parse::<CardPlacement>(),
        Err(EngineError::InvalidCardValue(5))
    ));
    assert!(matches!(
        "3 1".parse::<CardPlacement>(),
        Err(EngineError::Parse(_))
    ));
    assert!(matches!(
        "three 1 1".parse::<CardPlacement>(),
        Err(EngineError::Parse(_))
    ));
}
