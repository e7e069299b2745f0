#[cfg(test)]
mod card_tests;
#[cfg(test)]
mod friction_tests;

#[cfg(test)]
use crate::position::{Board, Card, CardPlacement, CardPosition, NextColor, BOARD_CELLS};
#[cfg(test)]
use rand::Rng;

#[cfg(test)]
fn placement(value: u32, x: u8, y: u8) -> CardPlacement {
    CardPlacement::new(Card::new(value).unwrap(), CardPosition::new(x, y))
}

#[cfg(test)]
fn board_from_values(values: [u32; BOARD_CELLS], next_color: NextColor) -> Board {
    let placements = values
        .iter()
        .enumerate()
        .filter(|(_, value)| **value != 0)
        .map(|(i, value)| CardPlacement::new(Card::new(*value).unwrap(), CardPosition::from_index(i)));
    Board::from_placements(placements, next_color).unwrap()
}

/// A random, not necessarily reachable, board. Roughly half the cells are empty.
#[cfg(test)]
fn random_board<R: Rng>(rng: &mut R) -> Board {
    const VALUES: [u32; 8] = [0, 0, 0, 1, 2, 3, 6, 12];
    let mut values = [0; BOARD_CELLS];
    for value in values.iter_mut() {
        *value = VALUES[rng.gen_range(0..VALUES.len())];
    }
    let next_color = NextColor::ALL[rng.gen_range(0..NextColor::ALL.len())];
    board_from_values(values, next_color)
}
