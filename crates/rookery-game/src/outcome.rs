//! How a finished game ended.

use std::fmt;

use rookery_core::{Color, GameStatus};

/// Why a game has a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisiveReason {
    Checkmate,
    Resignation,
}

/// Why a game was drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Decisive { winner: Color, reason: DecisiveReason },
    Draw { reason: DrawReason },
}

impl Outcome {
    /// The outcome a board status implies, or `None` while play continues.
    pub fn from_status(status: GameStatus) -> Option<Outcome> {
        let draw = |reason| Some(Outcome::Draw { reason });
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner } => Some(Outcome::Decisive {
                winner,
                reason: DecisiveReason::Checkmate,
            }),
            GameStatus::Stalemate => draw(DrawReason::Stalemate),
            GameStatus::DrawByFiftyMove => draw(DrawReason::FiftyMoveRule),
            GameStatus::DrawByRepetition => draw(DrawReason::ThreefoldRepetition),
            GameStatus::DrawByInsufficientMaterial => draw(DrawReason::InsufficientMaterial),
        }
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner, .. } => Some(winner),
            Outcome::Draw { .. } => None,
        }
    }

    /// PGN-style score: `1-0`, `0-1` or `1/2-1/2`.
    pub fn score(self) -> &'static str {
        match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Outcome::Decisive { reason, .. } => match reason {
                DecisiveReason::Checkmate => "checkmate",
                DecisiveReason::Resignation => "resignation",
            },
            Outcome::Draw { reason } => match reason {
                DrawReason::Stalemate => "stalemate",
                DrawReason::FiftyMoveRule => "fifty-move rule",
                DrawReason::ThreefoldRepetition => "threefold repetition",
                DrawReason::InsufficientMaterial => "insufficient material",
            },
        };
        write!(f, "{} ({reason})", self.score())
    }
}
