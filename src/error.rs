use std::io;

use thiserror::Error;

use crate::position::{CardPlacement, PlayerMove};

/// Every way an engine operation, text parser or game driver can fail.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0} is not a valid card value")]
    InvalidCardValue(u32),
    #[error("two 1-cards cannot be combined")]
    IllegalCombine,
    #[error("no card can move when swiping {0}")]
    NoLegalShift(PlayerMove),
    #[error("the computer cannot place {0} after that swipe")]
    InvalidPlacement(CardPlacement),
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
    #[error("position ({x}, {y}) is outside the board")]
    InvalidPosition { x: usize, y: usize },
    #[error("position ({x}, {y}) was given more than one card")]
    DuplicatePosition { x: usize, y: usize },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("the game is already over")]
    GameOver,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn parse_error(message: impl Into<String>) -> Self {
        EngineError::Parse(message.into())
    }
}
