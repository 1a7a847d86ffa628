//! Command line parsing.

use rookery_core::{ChessError, GameState, Square};

use crate::config::SessionOption;
use crate::error::CliError;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- reset to the starting position.
    New,
    /// `position` -- set up a position, then play the listed moves.
    Position { start: GameState, moves: Vec<String> },
    /// `move <m>` or a bare move.
    Move(String),
    /// `moves [square]` -- list legal moves.
    Moves(Option<Square>),
    /// `board` -- print the board.
    Board,
    /// `fen` -- print the current FEN.
    Fen,
    /// `status` -- print the game status.
    Status,
    /// `history` -- print the numbered move list.
    History,
    /// `captured` -- print captured pieces.
    Captured,
    /// `undo` -- take back the last move.
    Undo,
    /// `resign` -- the side to move resigns.
    Resign,
    /// `perft <depth>` -- divide and node total.
    Perft(u32),
    /// `set <name> <value>` -- change a session option.
    Set(SessionOption),
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse one line of input into a [`Command`].
///
/// A single word that is not a command is taken as a move.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Empty);
    };

    match head {
        "new" => Ok(Command::New),
        "position" => parse_position(args),
        "move" => match args {
            [mv] => Ok(Command::Move(mv.to_string())),
            _ => Err(CliError::MissingArgument {
                command: "move",
                what: "one move, e.g. `move e2e4`",
            }),
        },
        "moves" => match args.first() {
            Some(sq) => Ok(Command::Moves(Some(sq.parse()?))),
            None => Ok(Command::Moves(None)),
        },
        "board" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        "status" => Ok(Command::Status),
        "history" => Ok(Command::History),
        "captured" => Ok(Command::Captured),
        "undo" => Ok(Command::Undo),
        "resign" => Ok(Command::Resign),
        "perft" => parse_perft(args),
        "set" => match args {
            [name, value] => Ok(Command::Set(SessionOption::parse(name, value)?)),
            _ => Err(CliError::MissingArgument {
                command: "set",
                what: "an option name and a value",
            }),
        },
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        mv if args.is_empty() => Ok(Command::Move(mv.to_string())),
        other => Err(CliError::UnknownCommand {
            command: other.to_string(),
        }),
    }
}

/// Parse the `position` arguments:
///
/// - `position startpos [moves e2e4 e7e5 ...]`
/// - `position fen <fen-string> [moves e2e4 e7e5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    let (start, rest) = match tokens.split_first() {
        Some((&"startpos", rest)) => (GameState::starting_position(), rest),
        Some((&"fen", rest)) => {
            // The FEN runs up to the `moves` keyword.
            let end = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
            let fen = rest[..end].join(" ");
            if fen.is_empty() {
                return Err(CliError::MalformedPosition);
            }
            let start: GameState = fen.parse().map_err(|err| CliError::InvalidFen {
                fen: fen.clone(),
                source: ChessError::from(err),
            })?;
            (start, &rest[end..])
        }
        _ => return Err(CliError::MalformedPosition),
    };

    let moves = match rest.split_first() {
        Some((&"moves", moves)) => moves.iter().map(|mv| mv.to_string()).collect(),
        Some(_) => return Err(CliError::MalformedPosition),
        None => Vec::new(),
    };

    Ok(Command::Position { start, moves })
}

fn parse_perft(tokens: &[&str]) -> Result<Command, CliError> {
    let value = tokens.first().ok_or(CliError::MissingArgument {
        command: "perft",
        what: "a depth",
    })?;
    let depth = value.parse().map_err(|_| CliError::InvalidNumber {
        param: "perft depth",
        value: value.to_string(),
    })?;
    Ok(Command::Perft(depth))
}
