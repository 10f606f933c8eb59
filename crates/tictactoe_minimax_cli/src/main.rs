//! Tic-tac-toe minimax engine - command-line driver.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_minimax::{
    current_player, evaluate, is_terminal, outcome, principal_variation, Board, Game,
    Position,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Best { board, moves } => run_best(board.as_deref(), &moves),
        Command::SelfPlay { board } => run_self_play(board.as_deref()),
    }
}

/// Installs the fmt subscriber. An explicit filter wins over `RUST_LOG`.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses the given board, or starts from the empty one.
fn starting_board(text: Option<&str>) -> Result<Board> {
    match text {
        Some(text) => text
            .parse::<Board>()
            .with_context(|| format!("Failed to parse board {:?}", text)),
        None => Ok(Board::new()),
    }
}

/// Plays the requested moves, then prints the engine's recommendation.
#[instrument]
fn run_best(text: Option<&str>, moves: &[String]) -> Result<()> {
    let mut game = Game::from_board(starting_board(text)?);
    for raw in moves {
        let mv: Position = raw.parse()?;
        game.play(mv).with_context(|| format!("Failed to play {}", mv))?;
    }

    let board = *game.board();
    println!("{}\n", board);

    if is_terminal(&board) {
        println!("Game over: {}", outcome(&board));
        return Ok(());
    }

    let evaluation = evaluate(&board);
    let line = principal_variation(&board)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");

    if let Some(mv) = evaluation.best {
        println!("To move: {}", current_player(&board));
        println!("Best move: {} (row {}, column {})", mv, mv.row(), mv.col());
    }
    println!("Score: {} in {} plies", evaluation.score, evaluation.plies);
    println!("Line: {}", line);
    Ok(())
}

/// Plays the engine against itself and prints every position.
#[instrument]
fn run_self_play(text: Option<&str>) -> Result<()> {
    let mut game = Game::from_board(starting_board(text)?);
    println!("{}\n", game.board());

    loop {
        let mover = game.to_move();
        let Some(mv) = game.play_best()? else {
            break;
        };
        println!("{} plays {}", mover, mv);
        println!("{}\n", game.board());
    }

    let result = game.outcome();
    info!(outcome = %result, moves = game.history().len(), "Self-play finished");
    println!("Result: {}", result);
    Ok(())
}
