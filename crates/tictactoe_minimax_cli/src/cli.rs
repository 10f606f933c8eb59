//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};

/// Tic-tac-toe minimax engine - optimal moves by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Optimal tic-tac-toe play by exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. "debug" or "tictactoe_minimax=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend a move for the side to move
    Best {
        /// Board as nine cells in row-major order, e.g. "X.O/.X./..."
        #[arg(short, long)]
        board: Option<String>,

        /// Moves to play first, in order (index 0-8, "row,col" or a label)
        #[arg(short, long = "move")]
        moves: Vec<String>,
    },

    /// Let the engine play both sides to the end
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(short, long)]
        board: Option<String>,
    },
}
