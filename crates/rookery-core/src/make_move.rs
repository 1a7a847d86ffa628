//! Move application via copy-make.

use tracing::debug;

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::ChessError;
use crate::movegen::legal_moves;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::state::GameState;

impl GameState {
    /// Apply a legal move and return the successor state.
    ///
    /// # Errors
    ///
    /// [`ChessError::IllegalMove`] when `mv` is not one of
    /// [`legal_moves`]; `self` is never modified.
    pub fn apply(&self, mv: Move) -> Result<GameState, ChessError> {
        if !legal_moves(self).contains(&mv) {
            debug!(%mv, fen = %self, "rejected illegal move");
            return Err(ChessError::IllegalMove { mv: mv.to_string() });
        }
        Ok(self.make_move(mv))
    }

    /// Look up the legal move from `from` to `to` (with `promotion` for pawn
    /// moves onto the last rank), filling in its flags.
    ///
    /// # Errors
    ///
    /// [`ChessError::IllegalMove`] when no such legal move exists.
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, ChessError> {
        legal_moves(self)
            .iter()
            .copied()
            .find(|mv| mv.matches(from, to, promotion))
            .ok_or_else(|| {
                let mut mv = format!("{from}{to}");
                if let Some(kind) = promotion {
                    mv.push(kind.fen_char());
                }
                ChessError::IllegalMove { mv }
            })
    }

    /// The opposing piece `mv` would remove from the board, if any.
    pub fn captured_piece(&self, mv: Move) -> Option<Piece> {
        if mv.is_en_passant() {
            Some(Piece::new(PieceKind::Pawn, !self.side_to_move()))
        } else if mv.is_capture() {
            self.piece_at(mv.to())
        } else {
            None
        }
    }

    /// Apply a pseudo-legal move without checking legality.
    ///
    /// Used by the legality filter, which needs to look at the position a
    /// candidate move would produce. An empty source square returns the
    /// state unchanged.
    pub(crate) fn make_move(&self, mv: Move) -> GameState {
        let mut next = *self;
        let us = self.side_to_move();
        let (from, to) = (mv.from(), mv.to());

        let Some(moving) = next.board_mut().take(from) else {
            return next;
        };

        if mv.is_en_passant()
            && let Some(passed) = to.offset(0, -us.forward())
        {
            next.board_mut().take(passed);
        }

        if mv.is_castle() {
            let side = CastleSide::from_king_target(to);
            if let Some(rook) = next.board_mut().take(side.rook_home(us)) {
                next.board_mut().put(side.rook_target(us), rook);
            }
        }

        let landing = match mv.promotion() {
            Some(kind) => Piece::new(kind, us),
            None => moving,
        };
        let captured = next.board_mut().put(to, landing);

        let en_passant = if mv.is_double_push() {
            from.offset(0, us.forward())
        } else {
            None
        };
        next.set_en_passant(en_passant);

        next.set_castling(self.castling().touched(from).touched(to));

        let resets_clock =
            moving.kind() == PieceKind::Pawn || captured.is_some() || mv.is_en_passant();
        next.set_halfmove_clock(if resets_clock {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        });

        if us == Color::Black {
            next.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        next.set_side_to_move(!us);
        next
    }
}

#[cfg(test)]
mod tests {
    use crate::castle_rights::{CastleRights, CastleSide};
    use crate::chess_move::{Move, MoveFlags};
    use crate::color::Color;
    use crate::error::ChessError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::state::GameState;

    fn play(state: GameState, from: Square, to: Square) -> GameState {
        let mv = state.find_move(from, to, None).unwrap();
        state.apply(mv).unwrap()
    }

    #[test]
    fn double_push_sets_en_passant() {
        let after = play(GameState::starting_position(), Square::E2, Square::E4);
        assert_eq!(after.en_passant(), Some(Square::E3));
        assert_eq!(after.side_to_move(), Color::Black);
        assert_eq!(after.fullmove_number(), 1);
        assert_eq!(after.to_string(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }

    #[test]
    fn en_passant_cleared_next_ply() {
        let s = play(GameState::starting_position(), Square::E2, Square::E4);
        let s = play(s, Square::G8, Square::F6);
        assert_eq!(s.en_passant(), None);
        assert_eq!(s.fullmove_number(), 2);
        assert_eq!(s.halfmove_clock(), 1);
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        let s: GameState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let mv = s.find_move(Square::E5, Square::D6, None).unwrap();
        assert!(mv.is_en_passant());
        assert_eq!(s.captured_piece(mv), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        let after = s.apply(mv).unwrap();
        assert_eq!(after.piece_at(Square::D6), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(after.piece_at(Square::D5), None);
        assert_eq!(after.piece_at(Square::E5), None);
        assert_eq!(after.halfmove_clock(), 0);
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        // 1. e4 a6 2. e5 d5: capture available now, gone after a waiting move pair.
        let mut s = GameState::starting_position();
        for (from, to) in [
            (Square::E2, Square::E4),
            (Square::A7, Square::A6),
            (Square::E4, Square::E5),
            (Square::D7, Square::D5),
        ] {
            s = play(s, from, to);
        }
        assert!(s.find_move(Square::E5, Square::D6, None).is_ok());

        let s = play(s, Square::G1, Square::F3);
        let s = play(s, Square::A6, Square::A5);
        assert!(matches!(
            s.find_move(Square::E5, Square::D6, None),
            Err(ChessError::IllegalMove { .. })
        ));
    }

    #[test]
    fn capture_resets_clock() {
        let s: GameState = "4k3/8/8/3p4/8/8/8/3RK3 w - - 7 30".parse().unwrap();
        let after = play(s, Square::D1, Square::D5);
        assert_eq!(after.halfmove_clock(), 0);
        let quiet = play(after, Square::E8, Square::E7);
        assert_eq!(quiet.halfmove_clock(), 1);
        assert_eq!(quiet.fullmove_number(), 31);
    }

    #[test]
    fn castling_moves_rook() {
        let s: GameState = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10".parse().unwrap();
        let after = play(s, Square::E1, Square::G1);
        assert_eq!(after.piece_at(Square::G1), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(after.piece_at(Square::F1), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(after.piece_at(Square::H1), None);
        assert!(!after.castling().has(Color::White, CastleSide::KingSide));
        assert!(!after.castling().has(Color::White, CastleSide::QueenSide));
        assert_eq!(after.halfmove_clock(), 4);

        let after = play(after, Square::E8, Square::C8);
        assert_eq!(after.piece_at(Square::D8), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(after.piece_at(Square::A8), None);
        assert_eq!(after.castling(), CastleRights::NONE);
    }

    #[test]
    fn rook_capture_revokes_right() {
        let s: GameState = "r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1".parse().unwrap();
        let after = play(s, Square::G2, Square::A8);
        assert!(!after.castling().has(Color::Black, CastleSide::QueenSide));
        assert!(after.castling().has(Color::Black, CastleSide::KingSide));
        assert!(after.castling().has(Color::White, CastleSide::KingSide));
    }

    #[test]
    fn rook_move_revokes_its_wing() {
        let s: GameState = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1".parse().unwrap();
        let after = play(s, Square::H1, Square::H4);
        assert!(!after.castling().has(Color::White, CastleSide::KingSide));
        assert!(after.castling().has(Color::White, CastleSide::QueenSide));
    }

    #[test]
    fn promotion_replaces_pawn() {
        let s: GameState = "3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = s.find_move(Square::E7, Square::D8, Some(PieceKind::Knight)).unwrap();
        assert!(mv.is_capture());
        let after = s.apply(mv).unwrap();
        assert_eq!(after.piece_at(Square::D8), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(after.piece_at(Square::E7), None);
    }

    #[test]
    fn promotion_requires_a_piece() {
        let s: GameState = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert!(s.find_move(Square::A7, Square::A8, None).is_err());
        assert!(s.find_move(Square::A7, Square::A8, Some(PieceKind::Queen)).is_ok());
    }

    #[test]
    fn apply_rejects_and_leaves_state() {
        let s = GameState::starting_position();
        let bogus = Move::new(Square::E2, Square::E5, MoveFlags::QUIET);
        assert_eq!(
            s.apply(bogus),
            Err(ChessError::IllegalMove { mv: "e2e5".into() })
        );
        // Right squares, wrong flags.
        let unflagged = Move::new(Square::E2, Square::E4, MoveFlags::QUIET);
        assert!(s.apply(unflagged).is_err());
        assert_eq!(s, GameState::starting_position());
    }
}
