//! Plain request and response values, for running the engine behind a worker or a remote call.
//! The board travels in its compact text form.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::evaluation::BoardScore;
use crate::minmax::{self, SearchSettings};
use crate::position::{Board, PlayerMove};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: Board,
    #[serde(default)]
    pub depth: Option<u16>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    pub best_move: Option<PlayerMove>,
    pub score: BoardScore,
    pub death_guaranteed: bool,
}

pub fn handle_request(request: MoveRequest) -> Result<MoveResponse, EngineError> {
    let settings = match request.depth {
        Some(depth) => SearchSettings::default().add_depth(depth),
        None => SearchSettings::default(),
    };
    let result = minmax::search(&request.board, &settings)?;

    Ok(MoveResponse {
        best_move: result.best_move,
        score: result.score,
        death_guaranteed: result.death_guaranteed,
    })
}

/// Decode a JSON `MoveRequest`, search, and encode the `MoveResponse` as JSON.
pub fn handle_json_request(input: &str) -> Result<String, EngineError> {
    let request: MoveRequest = serde_json::from_str(input)?;
    let response = handle_request(request)?;
    Ok(serde_json::to_string(&response)?)
}
