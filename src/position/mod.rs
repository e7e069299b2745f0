//! The 4x4 board, its cards, and the two kinds of moves that change it:
//! the player's swipe, and the computer's placement of a new card on the entry edge.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::EngineError;

mod card;
mod mv;
mod square;

pub use card::{can_combine, Card, CardPlacement};
pub use mv::{NextColor, PlayerMove};
pub use square::{positions_iterator, CardPosition, CardVector};

pub const BOARD_SIZE: usize = 4;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// How a swipe walks the board.
/// The beam walks across all lanes, perpendicular to the swipe,
/// and each card on the beam is pushed one step along the shift vector.
#[derive(Clone, Copy, Debug)]
struct ShiftGeometry {
    beam_start: CardPosition,
    beam_vector: CardVector,
    shift_vector: CardVector,
}

impl PlayerMove {
    const fn shift_geometry(self) -> ShiftGeometry {
        match self {
            PlayerMove::SwipeUp => ShiftGeometry {
                beam_start: CardPosition::new(0, 1),
                beam_vector: CardVector::new(1, 0),
                shift_vector: CardVector::new(0, -1),
            },
            PlayerMove::SwipeDown => ShiftGeometry {
                beam_start: CardPosition::new(0, 2),
                beam_vector: CardVector::new(1, 0),
                shift_vector: CardVector::new(0, 1),
            },
            PlayerMove::SwipeLeft => ShiftGeometry {
                beam_start: CardPosition::new(1, 0),
                beam_vector: CardVector::new(0, 1),
                shift_vector: CardVector::new(-1, 0),
            },
            PlayerMove::SwipeRight => ShiftGeometry {
                beam_start: CardPosition::new(2, 0),
                beam_vector: CardVector::new(0, 1),
                shift_vector: CardVector::new(1, 0),
            },
        }
    }

    /// The cells on the edge opposite the swipe, where the computer places its next card.
    pub fn entry_edge(self) -> [CardPosition; BOARD_SIZE] {
        let (start, vector) = match self {
            PlayerMove::SwipeUp => (CardPosition::new(0, 3), CardVector::new(1, 0)),
            PlayerMove::SwipeDown => (CardPosition::new(0, 0), CardVector::new(1, 0)),
            PlayerMove::SwipeLeft => (CardPosition::new(3, 0), CardVector::new(0, 1)),
            PlayerMove::SwipeRight => (CardPosition::new(0, 0), CardVector::new(0, 1)),
        };
        let mut edge = [start; BOARD_SIZE];
        for (i, position) in edge.iter_mut().enumerate() {
            *position = start.jump_valid(vector, i as u8);
        }
        edge
    }

    pub fn is_on_entry_edge(self, position: CardPosition) -> bool {
        self.entry_edge().contains(&position)
    }
}

/// A full game state: every cell, plus the color of the next card.
///
/// Boards are small `Copy` values. Search code copies them freely instead of undoing moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Card; BOARD_CELLS],
    next_color: NextColor,
}

impl Board {
    pub fn empty(next_color: NextColor) -> Self {
        Board {
            cells: [Card::EMPTY; BOARD_CELLS],
            next_color,
        }
    }

    /// Build a board from the cards on it. Fails if two cards share a cell.
    pub fn from_placements<I>(placements: I, next_color: NextColor) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = CardPlacement>,
    {
        let mut board = Board::empty(next_color);
        for placement in placements {
            if !board[placement.position].is_empty() {
                return Err(EngineError::DuplicatePosition {
                    x: placement.position.x(),
                    y: placement.position.y(),
                });
            }
            board[placement.position] = placement.card;
        }
        Ok(board)
    }

    pub fn next_color(&self) -> NextColor {
        self.next_color
    }

    /// All occupied cells, row by row.
    pub fn cards(&self) -> impl Iterator<Item = CardPlacement> + '_ {
        positions_iterator()
            .map(|position| CardPlacement::new(self[position], position))
            .filter(|placement| !placement.card.is_empty())
    }

    /// The highest card on the board. Returns the empty card if the board is empty.
    pub fn max_card(&self) -> Card {
        self.cells.iter().copied().max().unwrap_or(Card::EMPTY)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|card| card.is_empty())
    }

    pub fn num_empty(&self) -> usize {
        self.cells.iter().filter(|card| card.is_empty()).count()
    }

    /// Whether swiping in this direction would move at least one card. Never changes the board.
    pub fn can_shift(&self, mv: PlayerMove) -> bool {
        let mut probe = *self;
        matches!(probe.shift_inner(mv, false), Ok(true))
    }

    /// Apply the player's swipe. Fails without changing the board if no card can move.
    pub fn shift(&mut self, mv: PlayerMove) -> Result<(), EngineError> {
        if self.shift_inner(mv, true)? {
            Ok(())
        } else {
            Err(EngineError::NoLegalShift(mv))
        }
    }

    /// Walks the board from the destination edge inwards, one lane position at a time.
    /// Every card moves or merges at most once per swipe.
    /// If `mutate` is false, returns as soon as any card could move, without touching the board.
    fn shift_inner(&mut self, mv: PlayerMove, mutate: bool) -> Result<bool, EngineError> {
        let geometry = mv.shift_geometry();
        let mut changed = false;

        for pass in 0..(BOARD_SIZE - 1) as u8 {
            let beam_position = geometry
                .beam_start
                .jump_valid(geometry.shift_vector.reverse(), pass);

            for lane in 0..BOARD_SIZE as u8 {
                let source = beam_position.jump_valid(geometry.beam_vector, lane);
                let target = source.jump_valid(geometry.shift_vector, 1);
                let card = self[source];

                if !card.is_empty() && card.can_combine(self[target]) {
                    if !mutate {
                        return Ok(true);
                    }
                    self[target] = card.combine(self[target])?;
                    self[source] = Card::EMPTY;
                    changed = true;
                }
            }
        }

        Ok(changed)
    }

    /// Apply the computer's response to a swipe: a new card on the entry edge, and a new color hint.
    pub fn computers_move(
        &mut self,
        mv: PlayerMove,
        placement: CardPlacement,
        next_color: NextColor,
    ) -> Result<(), EngineError> {
        if placement.card.is_empty()
            || !mv.is_on_entry_edge(placement.position)
            || !self[placement.position].is_empty()
        {
            return Err(EngineError::InvalidPlacement(placement));
        }
        self[placement.position] = placement.card;
        self.next_color = next_color;
        Ok(())
    }
}

impl Index<CardPosition> for Board {
    type Output = Card;

    fn index(&self, position: CardPosition) -> &Self::Output {
        &self.cells[position.index()]
    }
}

impl IndexMut<CardPosition> for Board {
    fn index_mut(&mut self, position: CardPosition) -> &mut Self::Output {
        &mut self.cells[position.index()]
    }
}

/// Pretty-prints the grid, with right-aligned card values.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_card().value().to_string().len();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let card = self[CardPosition::new(x as u8, y as u8)];
                write!(f, "{:>width$} ", card.value(), width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Next color: {}", self.next_color)
    }
}

/// Writes the compact one-line form: the next color, followed by all 16 card values row by row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.next_color)?;
        for card in self.cells.iter() {
            write!(f, " {}", card.value())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let next_color = words
            .next()
            .ok_or_else(|| EngineError::parse_error("Empty board string"))?
            .parse::<NextColor>()?;

        let values = words
            .map(|word| {
                word.parse::<u32>().map_err(|_| {
                    EngineError::parse_error(format!("Couldn't parse card value \"{}\"", word))
                })
            })
            .collect::<Result<Vec<u32>, EngineError>>()?;
        if values.len() != BOARD_CELLS {
            return Err(EngineError::parse_error(format!(
                "Expected {} card values, got {}",
                BOARD_CELLS,
                values.len()
            )));
        }

        let mut placements = Vec::with_capacity(BOARD_CELLS);
        for (i, value) in values.into_iter().enumerate() {
            if value != 0 {
                placements.push(CardPlacement::new(
                    Card::new(value)?,
                    CardPosition::from_index(i),
                ));
            }
        }
        Board::from_placements(placements, next_color)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
