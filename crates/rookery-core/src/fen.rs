//! FEN parsing and serialization for [`GameState`].

use std::fmt;
use std::str::FromStr;

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;
use crate::state::GameState;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::WrongRankCount { found: rows.len() });
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first.
    for (row, rank) in rows.iter().zip(Rank::ALL.into_iter().rev()) {
        let mut length = 0usize;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                length += run as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let file = File::from_index(length as u8).ok_or(FenError::BadRankLength {
                rank: rank.index() as u8 + 1,
                length: length + 1,
            })?;
            board.put(Square::new(file, rank), piece);
            length += 1;
        }
        if length != 8 {
            return Err(FenError::BadRankLength {
                rank: rank.index() as u8 + 1,
                length,
            });
        }
    }

    board.validate()?;
    Ok(board)
}

/// Every castling right needs its king and rook still at home.
fn check_castling(board: &Board, castling: CastleRights) -> Result<(), FenError> {
    for (color, side) in castling.iter() {
        let king_home = Square::new(File::E, color.back_rank());
        let king = board.piece_at(king_home) == Some(Piece::new(PieceKind::King, color));
        let rook =
            board.piece_at(side.rook_home(color)) == Some(Piece::new(PieceKind::Rook, color));
        if !(king && rook) {
            return Err(FenError::InconsistentCastling {
                right: CastleRights::fen_char(color, side),
            });
        }
    }
    Ok(())
}

/// The en passant square must sit behind a pawn that could just have
/// double-pushed past it, with both it and the pawn's origin empty.
fn parse_en_passant(field: &str, board: &Board, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target: Square = field.parse().map_err(|_| invalid())?;
    let mover = side_to_move.flip();
    let expected_rank = if mover == Color::White { Rank::R3 } else { Rank::R6 };
    if target.rank() != expected_rank {
        return Err(invalid());
    }
    let pawn_square = target.offset(0, mover.forward()).ok_or_else(invalid)?;
    let origin = target.offset(0, -mover.forward()).ok_or_else(invalid)?;
    let pawn_present = board.piece_at(pawn_square) == Some(Piece::new(PieceKind::Pawn, mover));
    if !pawn_present || !board.is_empty_at(target) || !board.is_empty_at(origin) {
        return Err(invalid());
    }
    Ok(Some(target))
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: value.to_string(),
    })
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let &[placement, active, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let board = parse_placement(placement)?;
        let side_to_move = Color::from_fen(active).ok_or_else(|| FenError::InvalidColor {
            found: active.to_string(),
        })?;
        let castling = CastleRights::from_fen(castling)?;
        check_castling(&board, castling)?;
        let en_passant = parse_en_passant(en_passant, &board, side_to_move)?;
        let halfmove_clock = parse_counter("halfmove clock", halfmove)?;
        let fullmove_number = parse_counter("fullmove number", fullmove)?;
        if fullmove_number == 0 {
            return Err(FenError::InvalidMoveCounter {
                field: "fullmove number",
                found: fullmove.to_string(),
            });
        }

        let state = GameState::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        );

        // The side that just moved may not have left its own king en prise.
        let waiting = side_to_move.flip();
        if let Some(king) = board.king_square(waiting)
            && is_square_attacked(&board, king, side_to_move)
        {
            return Err(FenError::OpponentInCheck);
        }

        Ok(state)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rank) in Rank::ALL.into_iter().rev().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            let mut gap = 0;
            for file in File::ALL {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if gap > 0 {
                            write!(f, "{gap}")?;
                            gap = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                write!(f, "{gap}")?;
            }
        }

        write!(f, " {} {} ", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
