//! Game-ending conditions decided by the board alone.

use std::fmt;

use crate::color::Color;
use crate::movegen::{in_check, legal_moves};
use crate::piece_kind::PieceKind;
use crate::state::GameState;

/// Plies without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_PLIES: u16 = 100;

/// Where a position stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    DrawByFiftyMove,
    DrawByRepetition,
    DrawByInsufficientMaterial,
}

impl GameStatus {
    /// Whether play has stopped.
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Whether the game ended without a winner.
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate
                | GameStatus::DrawByFiftyMove
                | GameStatus::DrawByRepetition
                | GameStatus::DrawByInsufficientMaterial
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => f.write_str("ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner.name()),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::DrawByFiftyMove => f.write_str("draw by fifty-move rule"),
            GameStatus::DrawByRepetition => f.write_str("draw by threefold repetition"),
            GameStatus::DrawByInsufficientMaterial => f.write_str("draw by insufficient material"),
        }
    }
}

/// Classify `state`.
///
/// `history` holds the position keys (see [`GameState::key`]) of the
/// positions that preceded `state` in the game, oldest first. Mate and
/// stalemate take precedence over the draw rules.
pub fn game_status(state: &GameState, history: &[u64]) -> GameStatus {
    if legal_moves(state).is_empty() {
        return if in_check(state) {
            GameStatus::Checkmate {
                winner: !state.side_to_move(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if state.halfmove_clock() >= FIFTY_MOVE_PLIES {
        return GameStatus::DrawByFiftyMove;
    }
    if insufficient_material(state) {
        return GameStatus::DrawByInsufficientMaterial;
    }
    if repetitions(state, history) >= 2 {
        return GameStatus::DrawByRepetition;
    }
    GameStatus::Ongoing
}

/// Earlier occurrences of `state` in `history`.
///
/// Only positions since the last pawn move or capture can match, so the
/// scan stops after `halfmove_clock` entries.
fn repetitions(state: &GameState, history: &[u64]) -> usize {
    let key = state.key();
    history
        .iter()
        .rev()
        .take(usize::from(state.halfmove_clock()))
        .filter(|&&earlier| earlier == key)
        .count()
}

/// Neither side can ever deliver mate: bare kings, a single minor piece,
/// or only bishops that all stand on one square color.
pub fn insufficient_material(state: &GameState) -> bool {
    let mut minors = 0u32;
    let mut bishop_colors = [false; 2];
    let mut knights = 0u32;

    for (sq, piece) in state.board().pieces() {
        match piece.kind() {
            PieceKind::King => {}
            PieceKind::Bishop => {
                minors += 1;
                bishop_colors[usize::from(sq.is_light())] = true;
            }
            PieceKind::Knight => {
                minors += 1;
                knights += 1;
            }
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    minors <= 1 || (knights == 0 && !(bishop_colors[0] && bishop_colors[1]))
}

impl GameState {
    /// Status without any game history, so repetition is never reported.
    pub fn status(&self) -> GameStatus {
        game_status(self, &[])
    }
}
