//! Text front end errors.

use rookery_core::ChessError;
use rookery_game::GameError;

/// Errors that can occur while handling a command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The `position` command is missing `startpos` or `fen`.
    #[error("malformed position command: expected `startpos` or `fen <FEN>`")]
    MalformedPosition,

    /// The FEN given to `position fen` did not parse.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: ChessError,
    },

    /// A move listed after `position ... moves` was rejected.
    #[error("cannot play {mv}: {source}")]
    InvalidMove {
        mv: String,
        #[source]
        source: GameError,
    },

    /// A command needs an argument that was not given.
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    /// A numeric argument did not parse.
    #[error("invalid number for {param}: \"{value}\"")]
    InvalidNumber { param: &'static str, value: String },

    /// Perft depth outside `1..=max_perft_depth`.
    #[error("perft depth must be between 1 and {max}, got {depth}")]
    PerftDepth { depth: u32, max: u32 },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption { name: String },

    /// `set` gave a value the option cannot take.
    #[error("invalid value for {name}: \"{value}\"")]
    InvalidOptionValue { name: &'static str, value: String },

    /// The line starts with more than one word but names no command.
    #[error("unknown command: {command}")]
    UnknownCommand { command: String },

    /// A square argument did not parse.
    #[error(transparent)]
    Chess(#[from] ChessError),

    /// The game refused the command.
    #[error(transparent)]
    Game(#[from] GameError),

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
