use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};

use clap::{Arg, ArgAction, Command};
use log::{debug, info};

use threes_solver::game::{self, ConsoleGameIo, VirtualGameIo};
use threes_solver::minmax::{self, SearchSettings};
use threes_solver::position::{Board, BOARD_CELLS};
use threes_solver::EngineError;

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("Threes solver")
        .version("0.1")
        .about("Picks the swipe with the best worst-case outcome for a Threes board")
        .arg(
            Arg::new("boardFile")
                .value_name("BOARD_FILE")
                .help("File with the initial board: the next color, followed by 16 card values row by row, 0 for empty cells. Read from stdin if omitted")
                .num_args(1),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .env("INTERACTIVE")
                .help("Relay a real game, typing in each of the computer's placements. By default, the computer is simulated")
                .action(ArgAction::SetTrue)
                .num_args(0),
        )
        .arg(
            Arg::new("analyze")
                .short('a')
                .long("analyze")
                .env("ANALYZE")
                .help("Only print the best move for the initial board")
                .conflicts_with("interactive")
                .action(ArgAction::SetTrue)
                .num_args(0),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .env("DEPTH")
                .help("Number of plies to search")
                .num_args(1)
                .default_value("4")
                .value_parser(clap::value_parser!(u16).range(1..=8)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .env("SEED")
                .help("Random seed for the simulated computer")
                .num_args(1)
                .default_value("0")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("maxMoves")
                .long("max-moves")
                .env("MAX_MOVES")
                .help("Stop the game after this many swipes")
                .num_args(1)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .env("LOGFILE")
                .value_name("threes.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug logging to stderr")
                .action(ArgAction::SetTrue)
                .num_args(0),
        )
        .get_matches();

    let stderr_level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    if let Some(log_file) = matches.get_one::<String>("logfile") {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(
                fern::Dispatch::new()
                    .level(stderr_level)
                    .chain(io::stderr()),
            )
            .apply()?
    } else {
        log_dispatcher
            .level(stderr_level)
            .chain(io::stderr())
            .apply()?
    }

    let settings = SearchSettings::default().add_depth(*matches.get_one::<u16>("depth").unwrap());
    let seed = *matches.get_one::<u64>("seed").unwrap();
    let max_moves = matches.get_one::<u64>("maxMoves").copied();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let board: Board = match matches.get_one::<String>("boardFile") {
        Some(path) => {
            info!("Reading initial board from {}", path);
            fs::read_to_string(path)?.parse()?
        }
        None => {
            println!("Enter initial state");
            read_board(&mut input)?
        }
    };
    debug!("Initial board: {}", board);

    if matches.get_flag("analyze") {
        let (result, stats) = minmax::run_minimax(
            threes_solver::evaluation::board_evaluator,
            &board,
            &settings,
        )?;
        match result.best_move {
            Some(mv) => println!("{} (score {}, {} nodes)", mv, result.score, stats.nodes),
            None => println!("No legal move, the game is over"),
        }
        if result.death_guaranteed {
            println!("Death is unavoidable at this point");
        }
        return Ok(());
    }

    let summary = if matches.get_flag("interactive") {
        let mut game_io = ConsoleGameIo::new(input, io::stdout());
        game::run_game(board, &mut game_io, &settings, max_moves)?
    } else {
        let mut game_io = VirtualGameIo::new(seed, io::stdout());
        game::run_game(board, &mut game_io, &settings, max_moves)?
    };

    println!(
        "Game finished after {} moves. Highest card: {}",
        summary.moves_played,
        summary.max_card().value()
    );
    io::stdout().flush()?;
    Ok(())
}

/// Read lines until a full board has been entered. The board may be spread over several lines.
fn read_board<R: BufRead>(input: &mut R) -> Result<Board, EngineError> {
    let mut text = String::new();
    while text.split_whitespace().count() < BOARD_CELLS + 1 {
        if input.read_line(&mut text)? == 0 {
            break;
        }
    }
    text.parse()
}
