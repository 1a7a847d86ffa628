//! The full game state: placement plus side to move, castling rights,
//! en passant target and move counters.

use std::fmt;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::movegen::legal_moves_from;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Everything needed to decide which moves are legal.
///
/// States are values: applying a move yields a new state and leaves the
/// old one untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    /// Square skipped by a pawn double push on the previous ply.
    en_passant: Option<Square>,
    /// Plies since the last pawn move or capture.
    halfmove_clock: u16,
    /// Starts at 1, incremented after each Black move.
    fullmove_number: u16,
}

impl GameState {
    /// The standard initial position.
    pub fn starting_position() -> GameState {
        GameState {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Assemble a state from parts. Validation is the caller's job (FEN
    /// parsing validates before calling this).
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> GameState {
        GameState {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// The king square of the side to move.
    pub fn king_square(&self) -> Option<Square> {
        self.board.king_square(self.side_to_move)
    }

    /// Whether the side to move has a legal en passant capture right now.
    /// Only then does the en passant square distinguish this position from
    /// an otherwise identical one.
    pub fn en_passant_capturable(&self) -> bool {
        let Some(target) = self.en_passant else {
            return false;
        };
        let us = self.side_to_move;
        let pawn = Piece::new(PieceKind::Pawn, us);
        [-1, 1]
            .into_iter()
            .filter_map(|df| target.offset(df, -us.forward()))
            .filter(|&sq| self.board.piece_at(sq) == Some(pawn))
            .any(|sq| legal_moves_from(self, sq).iter().any(|mv| mv.is_en_passant()))
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::starting_position()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameState(\"{self}\")")
    }
}
