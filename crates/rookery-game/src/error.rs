//! Game session errors.

use rookery_core::ChessError;

use crate::outcome::Outcome;

/// Errors that can occur while driving a [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The rules engine refused the request.
    #[error(transparent)]
    Chess(#[from] ChessError),

    /// The game has already finished.
    #[error("game is over: {outcome}")]
    GameOver { outcome: Outcome },

    /// `undo` with no moves played.
    #[error("no move to undo")]
    NothingToUndo,
}
