//! Castling rights: one flag per side and wing.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::file::File;
use crate::square::Square;

/// The wing a king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Where the king lands.
    pub const fn king_target(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::new(File::G, color.back_rank()),
            CastleSide::QueenSide => Square::new(File::C, color.back_rank()),
        }
    }

    /// The rook's home square.
    pub const fn rook_home(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::new(File::H, color.back_rank()),
            CastleSide::QueenSide => Square::new(File::A, color.back_rank()),
        }
    }

    /// Where the rook lands.
    pub const fn rook_target(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::new(File::F, color.back_rank()),
            CastleSide::QueenSide => Square::new(File::D, color.back_rank()),
        }
    }

    /// Which wing a castling king move goes to, judged by its target file.
    pub const fn from_king_target(target: Square) -> CastleSide {
        match target.file() {
            File::G => CastleSide::KingSide,
            _ => CastleSide::QueenSide,
        }
    }
}

/// Remaining castling rights. Bit 0 = White king side, 1 = White queen side,
/// 2 = Black king side, 3 = Black queen side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Single-flag rights in FEN order (K, Q, k, q).
    const FLAGS: [(Color, CastleSide, char); 4] = [
        (Color::White, CastleSide::KingSide, 'K'),
        (Color::White, CastleSide::QueenSide, 'Q'),
        (Color::Black, CastleSide::KingSide, 'k'),
        (Color::Black, CastleSide::QueenSide, 'q'),
    ];

    #[inline]
    const fn bit(color: Color, side: CastleSide) -> u8 {
        let shift = color.index() * 2
            + match side {
                CastleSide::KingSide => 0,
                CastleSide::QueenSide => 1,
            };
        1 << shift
    }

    /// Raw bits, 0..16.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    /// Return these rights with one right added.
    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::bit(color, side))
    }

    /// Return these rights with one right removed.
    #[inline]
    pub const fn without(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::bit(color, side))
    }

    /// Return these rights with both of `color`'s rights removed.
    #[inline]
    pub const fn without_color(self, color: Color) -> CastleRights {
        self.without(color, CastleSide::KingSide)
            .without(color, CastleSide::QueenSide)
    }

    /// Drop whatever rights depend on a piece standing on `sq`.
    ///
    /// Applied to both the source and destination of every move: a king
    /// leaving home loses both rights, and a rook leaving (or being
    /// captured on) its corner loses that wing.
    pub const fn touched(self, sq: Square) -> CastleRights {
        match sq {
            Square::E1 => self.without_color(Color::White),
            Square::E8 => self.without_color(Color::Black),
            Square::H1 => self.without(Color::White, CastleSide::KingSide),
            Square::A1 => self.without(Color::White, CastleSide::QueenSide),
            Square::H8 => self.without(Color::Black, CastleSide::KingSide),
            Square::A8 => self.without(Color::Black, CastleSide::QueenSide),
            _ => self,
        }
    }

    /// Iterate the held rights in FEN order.
    pub fn iter(self) -> impl Iterator<Item = (Color, CastleSide)> {
        Self::FLAGS
            .into_iter()
            .filter(move |&(color, side, _)| self.has(color, side))
            .map(|(color, side, _)| (color, side))
    }

    /// Parse the FEN castling field ("KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        let invalid = || FenError::InvalidCastling {
            found: s.to_string(),
        };
        if s.is_empty() {
            return Err(invalid());
        }
        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let &(color, side, _) = Self::FLAGS
                .iter()
                .find(|&&(_, _, letter)| letter == c)
                .ok_or_else(invalid)?;
            if rights.has(color, side) {
                return Err(invalid());
            }
            Ok(rights.with(color, side))
        })
    }

    /// FEN letter for a single right.
    pub fn fen_char(color: Color, side: CastleSide) -> char {
        Self::FLAGS
            .iter()
            .find(|&&(c, s, _)| c == color && s == side)
            .map_or('-', |&(_, _, letter)| letter)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (color, side) in self.iter() {
            write!(f, "{}", Self::fen_char(color, side))?;
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn fen_field_round_trips() {
        for field in ["KQkq", "Kq", "k", "-", "Qk"] {
            let rights = CastleRights::from_fen(field).unwrap();
            let reparsed = CastleRights::from_fen(&rights.to_string()).unwrap();
            assert_eq!(rights, reparsed, "{field}");
        }
        assert_eq!(CastleRights::from_fen("qkQK").unwrap().to_string(), "KQkq");
    }

    #[test]
    fn fen_field_rejects_junk() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("").is_err());
        assert!(CastleRights::from_fen("KK").is_err());
    }

    #[test]
    fn king_move_clears_both_wings() {
        let rights = CastleRights::ALL.touched(Square::E1);
        assert!(!rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn rook_square_clears_one_wing() {
        let rights = CastleRights::ALL.touched(Square::H8);
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
        assert_eq!(CastleRights::ALL.touched(Square::D4), CastleRights::ALL);
    }

    #[test]
    fn castle_geometry() {
        assert_eq!(CastleSide::KingSide.king_target(Color::White), Square::G1);
        assert_eq!(CastleSide::QueenSide.rook_home(Color::Black), Square::A8);
        assert_eq!(CastleSide::QueenSide.rook_target(Color::White), Square::D1);
        assert_eq!(CastleSide::from_king_target(Square::C8), CastleSide::QueenSide);
    }
}
