//! Game loops that drive the engine against a real or simulated opponent.
//!
//! The engine itself never talks to the outside world. A driver only needs to show the
//! current board, and report where the computer placed its card after each swipe.

use std::io::{self, BufRead, Write};

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::EngineError;
use crate::minmax::{self, SearchSettings};
use crate::move_gen::{game_is_over, possible_placements};
use crate::position::{Board, Card, CardPlacement, NextColor, PlayerMove};

/// The computer's answer to a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputersResponse {
    pub placement: CardPlacement,
    pub next_color: NextColor,
}

pub trait GameIo {
    fn current_board(&mut self, board: &Board) -> Result<(), EngineError>;

    /// Where the computer placed its card after `mv`, and the color of the card after that.
    /// `previous_rejected` is set when the last answer for this swipe was not a legal placement.
    fn computers_response(
        &mut self,
        board: &Board,
        mv: PlayerMove,
        previous_rejected: bool,
    ) -> Result<ComputersResponse, EngineError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub moves_played: u64,
    pub final_board: Board,
}

impl GameSummary {
    pub fn max_card(&self) -> Card {
        self.final_board.max_card()
    }
}

/// Play until no swipe is possible, or until `max_moves` swipes have been made.
///
/// Fails with `GameOver` if the starting board is already locked up.
pub fn run_game<G: GameIo>(
    mut board: Board,
    io: &mut G,
    settings: &SearchSettings,
    max_moves: Option<u64>,
) -> Result<GameSummary, EngineError> {
    if game_is_over(&board) {
        return Err(EngineError::GameOver);
    }

    let mut moves_played = 0;
    loop {
        io.current_board(&board)?;

        if game_is_over(&board) {
            info!(
                "Game over after {} moves, highest card {}",
                moves_played,
                board.max_card().value()
            );
            break;
        }
        if max_moves.is_some_and(|max_moves| moves_played >= max_moves) {
            info!("Stopping after {} moves", moves_played);
            break;
        }

        let result = minmax::search(&board, settings)?;
        let mv = result.best_move.ok_or_else(|| {
            EngineError::InternalInvariantViolation(format!(
                "search at depth {} found no move on a live board",
                settings.depth()
            ))
        })?;
        info!("Move {}: {} (score {})", moves_played + 1, mv, result.score);
        board.shift(mv)?;

        let mut previous_rejected = false;
        loop {
            let response = io.computers_response(&board, mv, previous_rejected)?;
            match board.computers_move(mv, response.placement, response.next_color) {
                Ok(()) => break,
                Err(err @ EngineError::InvalidPlacement(_)) => {
                    warn!("{}", err);
                    previous_rejected = true;
                }
                Err(err) => return Err(err),
            }
        }
        moves_played += 1;
    }

    Ok(GameSummary {
        moves_played,
        final_board: board,
    })
}

/// Relays a real game: a person types in what the computer did.
pub struct ConsoleGameIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGameIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleGameIo { input, output }
    }

    fn read_line(&mut self) -> Result<String, EngineError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended mid-game").into());
        }
        Ok(line)
    }

    fn read_next_color(&mut self) -> Result<NextColor, EngineError> {
        loop {
            let line = self.read_line()?;
            match line.trim().chars().next() {
                Some('r') => return Ok(NextColor::Red),
                Some('b') => return Ok(NextColor::Blue),
                Some('w') => return Ok(NextColor::White),
                _ => writeln!(self.output, "Not a valid color, try again")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> GameIo for ConsoleGameIo<R, W> {
    fn current_board(&mut self, board: &Board) -> Result<(), EngineError> {
        writeln!(self.output, "{:?}", board)?;
        Ok(())
    }

    fn computers_response(
        &mut self,
        _board: &Board,
        mv: PlayerMove,
        previous_rejected: bool,
    ) -> Result<ComputersResponse, EngineError> {
        if previous_rejected {
            writeln!(self.output, "Computer could not have moved there, try again")?;
        }
        writeln!(self.output, "Swipe {}. Where did the computer move?", mv)?;
        let placement = loop {
            match self.read_line()?.parse::<CardPlacement>() {
                Ok(placement) => break placement,
                Err(err) => writeln!(self.output, "{}, try again.", err)?,
            }
        };

        writeln!(self.output, "What is the next color?")?;
        let next_color = self.read_next_color()?;

        Ok(ComputersResponse {
            placement,
            next_color,
        })
    }
}

/// A simulated computer: places a random legal card, and cycles the color hint blue, red, white.
pub struct VirtualGameIo<W> {
    rng: SmallRng,
    turn: usize,
    output: W,
}

impl<W: Write> VirtualGameIo<W> {
    const COLOR_CYCLE: [NextColor; 3] = [NextColor::Blue, NextColor::Red, NextColor::White];

    pub fn new(seed: u64, output: W) -> Self {
        VirtualGameIo {
            rng: SmallRng::seed_from_u64(seed),
            turn: 0,
            output,
        }
    }
}

impl<W: Write> GameIo for VirtualGameIo<W> {
    fn current_board(&mut self, board: &Board) -> Result<(), EngineError> {
        writeln!(self.output, "{:?}", board)?;
        Ok(())
    }

    fn computers_response(
        &mut self,
        board: &Board,
        mv: PlayerMove,
        previous_rejected: bool,
    ) -> Result<ComputersResponse, EngineError> {
        if previous_rejected {
            return Err(EngineError::InternalInvariantViolation(
                "simulated placement was rejected".to_string(),
            ));
        }
        let placements = possible_placements(board, mv);
        let placement = *placements.choose(&mut self.rng).ok_or_else(|| {
            EngineError::InternalInvariantViolation(format!(
                "computer has no placement after {} on board\n{:?}",
                mv, board
            ))
        })?;

        let next_color = Self::COLOR_CYCLE[self.turn % Self::COLOR_CYCLE.len()];
        self.turn += 1;

        Ok(ComputersResponse {
            placement,
            next_color,
        })
    }
}
