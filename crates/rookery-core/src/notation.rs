//! Move text: coordinate notation in, Standard Algebraic Notation out.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::error::ChessError;
use crate::movegen::{in_check, legal_moves};
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::state::GameState;

/// Render `mv`, a legal move in `state`, in SAN (`Nbd7`, `exd6`, `O-O`,
/// `e8=Q#`).
pub fn san(state: &GameState, mv: Move) -> String {
    let mut text = String::with_capacity(8);

    if mv.is_castle() {
        text.push_str(match CastleSide::from_king_target(mv.to()) {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        });
    } else {
        let kind = state
            .piece_at(mv.from())
            .map_or(PieceKind::Pawn, |piece| piece.kind());

        match kind.san_char() {
            Some(letter) => {
                text.push(letter);
                text.push_str(&disambiguation(state, mv, kind));
            }
            // Pawn captures always name the origin file.
            None if mv.is_capture() => text.push(mv.from().file().to_char()),
            None => {}
        }
        if mv.is_capture() {
            text.push('x');
        }
        text.push_str(&mv.to().to_string());
        if let Some(promotion) = mv.promotion() {
            text.push('=');
            text.push(promotion.fen_char().to_ascii_uppercase());
        }
    }

    let next = state.make_move(mv);
    if in_check(&next) {
        text.push(if legal_moves(&next).is_empty() { '#' } else { '+' });
    }
    text
}

/// Origin file, rank or both, as needed to tell `mv` apart from other
/// legal moves of the same piece kind to the same square.
fn disambiguation(state: &GameState, mv: Move, kind: PieceKind) -> String {
    let rivals: Vec<Square> = legal_moves(state)
        .iter()
        .filter(|other| {
            other.to() == mv.to()
                && other.from() != mv.from()
                && state.piece_at(other.from()).map(|p| p.kind()) == Some(kind)
        })
        .map(|other| other.from())
        .collect();

    let from = mv.from();
    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|sq| sq.file() != from.file()) {
        from.file().to_string()
    } else if rivals.iter().all(|sq| sq.rank() != from.rank()) {
        from.rank().to_string()
    } else {
        from.to_string()
    }
}

/// Parse coordinate notation (`e2e4`, `e7e8q`) into the matching legal move.
///
/// # Errors
///
/// - [`ChessError::InvalidMoveNotation`] for text of the wrong shape or an
///   unknown promotion letter.
/// - [`ChessError::InvalidSquare`] when either square is off the board.
/// - [`ChessError::IllegalMove`] when the move is well formed but not legal.
pub fn parse_coordinate(state: &GameState, text: &str) -> Result<Move, ChessError> {
    let text = text.trim();
    let malformed = || ChessError::InvalidMoveNotation {
        found: text.to_string(),
    };
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(malformed());
    }

    let from: Square = text[0..2].parse()?;
    let to: Square = text[2..4].parse()?;
    let promotion = match text.get(4..) {
        Some("") | None => None,
        Some(letter) => {
            let kind = letter
                .chars()
                .next()
                .and_then(PieceKind::from_fen_char)
                .filter(|kind| kind.is_promotion_target())
                .ok_or_else(malformed)?;
            Some(kind)
        }
    };

    state.find_move(from, to, promotion)
}

/// Parse SAN by comparing against the SAN of every legal move. Check and
/// mate suffixes and `!`/`?` annotations are optional.
///
/// # Errors
///
/// [`ChessError::IllegalMove`] when no legal move has this SAN.
pub fn parse_san(state: &GameState, text: &str) -> Result<Move, ChessError> {
    let strip = |s: &str| s.trim_end_matches(['+', '#', '!', '?']).replace('0', "O");
    let wanted = strip(text.trim());
    legal_moves(state)
        .iter()
        .copied()
        .find(|&mv| strip(&san(state, mv)) == wanted)
        .ok_or_else(|| ChessError::IllegalMove {
            mv: text.trim().to_string(),
        })
}

impl GameState {
    /// Parse move text, trying coordinate notation first and SAN second.
    ///
    /// # Errors
    ///
    /// The coordinate parser's error when the text has coordinate shape,
    /// otherwise [`ChessError::IllegalMove`] for SAN that matches nothing.
    pub fn parse_move(&self, text: &str) -> Result<Move, ChessError> {
        match parse_coordinate(self, text) {
            Ok(mv) => Ok(mv),
            Err(ChessError::InvalidMoveNotation { .. }) | Err(ChessError::InvalidSquare { .. })
                if looks_like_san(text) =>
            {
                parse_san(self, text)
            }
            Err(err) => Err(err),
        }
    }

    /// Parse coordinate notation and apply the move.
    ///
    /// # Errors
    ///
    /// See [`parse_coordinate`].
    pub fn apply_coordinate(&self, text: &str) -> Result<GameState, ChessError> {
        let mv = parse_coordinate(self, text)?;
        self.apply(mv)
    }

    /// SAN of `mv` in this position.
    pub fn san(&self, mv: Move) -> String {
        san(self, mv)
    }
}

/// SAN starts with a piece letter, a file, or a castling `O`/`0`.
fn looks_like_san(text: &str) -> bool {
    let text = text.trim();
    text.starts_with(['K', 'Q', 'R', 'B', 'N', 'O', '0'])
        || (text.starts_with(|c: char| ('a'..='h').contains(&c))
            && text.chars().any(|c| c.is_ascii_digit()))
}
