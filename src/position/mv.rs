use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A swipe by the player. "Up" moves cards towards row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PlayerMove {
    SwipeUp,
    SwipeDown,
    SwipeLeft,
    SwipeRight,
}

impl PlayerMove {
    /// All swipes, in the order the search tries them.
    pub const ALL: [PlayerMove; 4] = [
        PlayerMove::SwipeUp,
        PlayerMove::SwipeDown,
        PlayerMove::SwipeLeft,
        PlayerMove::SwipeRight,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerMove::SwipeUp => "SWIPE_UP",
            PlayerMove::SwipeDown => "SWIPE_DOWN",
            PlayerMove::SwipeLeft => "SWIPE_LEFT",
            PlayerMove::SwipeRight => "SWIPE_RIGHT",
        }
    }
}

impl fmt::Display for PlayerMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerMove {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        PlayerMove::ALL
            .into_iter()
            .find(|mv| mv.as_str() == input.trim())
            .ok_or_else(|| EngineError::parse_error(format!("Unknown move \"{}\"", input.trim())))
    }
}

/// The color hint for the next card the computer will place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NextColor {
    Red,
    Blue,
    White,
}

impl NextColor {
    pub const ALL: [NextColor; 3] = [NextColor::Red, NextColor::Blue, NextColor::White];

    /// Face value of a card spawned with this color.
    /// White cards may also spawn as bonus cards; see `move_gen::possible_placements`.
    pub const fn base_value(self) -> u32 {
        match self {
            NextColor::Red => 1,
            NextColor::Blue => 2,
            NextColor::White => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NextColor::Red => "red",
            NextColor::Blue => "blue",
            NextColor::White => "white",
        }
    }
}

impl fmt::Display for NextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NextColor {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "red" => Ok(NextColor::Red),
            "blue" => Ok(NextColor::Blue),
            "white" => Ok(NextColor::White),
            _ => Err(EngineError::parse_error(format!(
                "Invalid color \"{}\"",
                input.trim()
            ))),
        }
    }
}
