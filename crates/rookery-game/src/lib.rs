//! Game sessions on top of the rookery rules engine: move history,
//! repetition tracking, resignation, captured pieces and undo.

pub mod error;
pub mod game;
pub mod outcome;

pub use error::GameError;
pub use game::{Game, Ply};
pub use outcome::{DecisiveReason, DrawReason, Outcome};
