//! Session options adjustable with `set`.

use std::fmt;

use crate::error::CliError;

/// A single option assignment parsed from `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after every position change.
    ShowBoard(bool),
    /// Draw pieces with chess glyphs instead of FEN letters.
    Unicode(bool),
    /// Deepest `perft` the session will run.
    MaxPerftDepth(u32),
}

impl SessionOption {
    /// Parse an option name and value.
    pub fn parse(name: &str, value: &str) -> Result<SessionOption, CliError> {
        match name {
            "show_board" => parse_bool("show_board", value).map(SessionOption::ShowBoard),
            "unicode" => parse_bool("unicode", value).map(SessionOption::Unicode),
            "max_perft_depth" => value
                .parse()
                .map(SessionOption::MaxPerftDepth)
                .map_err(|_| CliError::InvalidOptionValue {
                    name: "max_perft_depth",
                    value: value.to_string(),
                }),
            _ => Err(CliError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, CliError> {
    match value {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(CliError::InvalidOptionValue {
            name,
            value: value.to_string(),
        }),
    }
}

/// Presentation and safety knobs for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub show_board: bool,
    pub unicode: bool,
    pub max_perft_depth: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            unicode: false,
            max_perft_depth: 6,
        }
    }
}

impl SessionConfig {
    pub fn set(&mut self, option: SessionOption) {
        match option {
            SessionOption::ShowBoard(on) => self.show_board = on,
            SessionOption::Unicode(on) => self.unicode = on,
            SessionOption::MaxPerftDepth(depth) => self.max_perft_depth = depth,
        }
    }
}

impl fmt::Display for SessionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionOption::ShowBoard(on) => write!(f, "show_board = {on}"),
            SessionOption::Unicode(on) => write!(f, "unicode = {on}"),
            SessionOption::MaxPerftDepth(depth) => write!(f, "max_perft_depth = {depth}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionConfig, SessionOption};
    use crate::error::CliError;

    #[test]
    fn parse_and_apply() {
        let mut config = SessionConfig::default();
        config.set(SessionOption::parse("show_board", "off").unwrap());
        config.set(SessionOption::parse("unicode", "true").unwrap());
        config.set(SessionOption::parse("max_perft_depth", "3").unwrap());
        assert_eq!(
            config,
            SessionConfig {
                show_board: false,
                unicode: true,
                max_perft_depth: 3
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            SessionOption::parse("colour", "on"),
            Err(CliError::UnknownOption { .. })
        ));
        assert!(matches!(
            SessionOption::parse("unicode", "maybe"),
            Err(CliError::InvalidOptionValue { name: "unicode", .. })
        ));
        assert!(matches!(
            SessionOption::parse("max_perft_depth", "-1"),
            Err(CliError::InvalidOptionValue { .. })
        ));
    }
}
