//! Line-oriented text front end for rookery games.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use config::{SessionConfig, SessionOption};
pub use error::CliError;
pub use session::Session;
