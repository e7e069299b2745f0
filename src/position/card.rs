use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;
use crate::position::CardPosition;

/// A single tile. Valid values are 1, 2, and 3 times any power of two.
///
/// The value 0 is reserved for empty cells, and can only be created inside the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    value: u32,
}

impl Card {
    pub(crate) const EMPTY: Card = Card { value: 0 };

    pub fn new(value: u32) -> Result<Self, EngineError> {
        if Self::is_valid_value(value) {
            Ok(Card { value })
        } else {
            Err(EngineError::InvalidCardValue(value))
        }
    }

    /// For values the engine has already checked, such as the spawn values of each color.
    pub(crate) const fn from_valid_value(value: u32) -> Self {
        debug_assert!(Self::is_valid_value(value));
        Card { value }
    }

    pub const fn is_valid_value(value: u32) -> bool {
        value == 1 || value == 2 || Self::is_three_family(value)
    }

    /// Whether the value lies on the 3, 6, 12, 24... ladder.
    pub const fn is_three_family(value: u32) -> bool {
        value % 3 == 0 && (value / 3).is_power_of_two()
    }

    pub const fn value(self) -> u32 {
        self.value
    }

    pub const fn is_empty(self) -> bool {
        self.value == 0
    }

    /// Combine two cards into one. Combining with an empty cell returns the card unchanged.
    pub fn combine(self, other: Card) -> Result<Card, EngineError> {
        if self.value == 1 && other.value == 1 {
            return Err(EngineError::IllegalCombine);
        }
        Card::new(self.value.saturating_add(other.value))
    }

    /// Whether `self` may move onto a cell holding `other`, either merging with it or sliding into it if it is empty.
    pub const fn can_combine(self, other: Card) -> bool {
        if self.value == 1 && other.value == 1 {
            return false;
        }
        match self.value.checked_add(other.value) {
            Some(sum) => Self::is_valid_value(sum),
            None => false,
        }
    }
}

impl TryFrom<u32> for Card {
    type Error = EngineError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Card::new(value)
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> Self {
        card.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.value)
    }
}

/// Free-function form of [`Card::can_combine`].
pub fn can_combine(a: Card, b: Card) -> bool {
    a.can_combine(b)
}

/// A card together with the cell it occupies, or is about to be placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardPlacement {
    pub card: Card,
    pub position: CardPosition,
}

impl CardPlacement {
    pub const fn new(card: Card, position: CardPosition) -> Self {
        CardPlacement { card, position }
    }
}

impl fmt::Display for CardPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.card.value(),
            self.position.x(),
            self.position.y()
        )
    }
}

/// Parses `<value> <x> <y>`, as typed by a person relaying the computer's move.
impl FromStr for CardPlacement {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.len() != 3 {
            return Err(EngineError::parse_error(format!(
                "Expected \"<value> <x> <y>\", got \"{}\"",
                input.trim()
            )));
        }
        let numbers = words
            .iter()
            .map(|word| {
                word.parse::<usize>().map_err(|_| {
                    EngineError::parse_error(format!("Couldn't parse \"{}\" as a number", word))
                })
            })
            .collect::<Result<Vec<usize>, EngineError>>()?;
        let value = u32::try_from(numbers[0])
            .map_err(|_| EngineError::parse_error(format!("Card value {} too large", numbers[0])))?;
        Ok(CardPlacement {
            card: Card::new(value)?,
            position: CardPosition::try_new(numbers[1], numbers[2])?,
        })
    }
}
