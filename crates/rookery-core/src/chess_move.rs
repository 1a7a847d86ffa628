//! Moves and fixed-capacity move lists.

use std::fmt;
use std::ops::BitOr;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Facts about a move that the destination square alone does not tell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(0b0001);
    /// Also carries `CAPTURE`.
    pub const EN_PASSANT: MoveFlags = MoveFlags(0b0011);
    pub const CASTLE: MoveFlags = MoveFlags(0b0100);
    pub const DOUBLE_PUSH: MoveFlags = MoveFlags(0b1000);

    #[inline]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    #[inline]
    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

impl fmt::Debug for MoveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (MoveFlags::EN_PASSANT, "en-passant"),
            (MoveFlags::CASTLE, "castle"),
            (MoveFlags::DOUBLE_PUSH, "double-push"),
        ];
        let mut parts: Vec<&str> = names
            .into_iter()
            .filter(|&(flag, _)| self.contains(flag))
            .map(|(_, name)| name)
            .collect();
        if self.contains(MoveFlags::CAPTURE) && !self.contains(MoveFlags::EN_PASSANT) {
            parts.insert(0, "capture");
        }
        if parts.is_empty() {
            parts.push("quiet");
        }
        write!(f, "{}", parts.join("|"))
    }
}

/// A move: where a piece starts, where it lands, what a pawn becomes, and
/// how the move interacts with the position. Immutable once built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    flags: MoveFlags,
}

impl Move {
    /// Build a non-promoting move.
    #[inline]
    pub const fn new(from: Square, to: Square, flags: MoveFlags) -> Move {
        Move {
            from,
            to,
            promotion: None,
            flags,
        }
    }

    /// Build a pawn move onto the last rank.
    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind, flags: MoveFlags) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
            flags,
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn flags(self) -> MoveFlags {
        self.flags
    }

    /// `true` for any capture, en passant included.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.flags.contains(MoveFlags::CASTLE)
    }

    #[inline]
    pub const fn is_double_push(self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_PUSH)
    }

    /// Whether this move goes from `from` to `to` with the given promotion.
    #[inline]
    pub fn matches(self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        self.from == from && self.to == to && self.promotion == promotion
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`, `e1g1` for castling.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?})", self.flags)
    }
}

/// Room reserved up front. Reachable positions never exceed 218 legal
/// moves, but a FEN may describe far more pieces than a real game has.
const RESERVED_MOVES: usize = 256;

/// Growable move buffer.
#[derive(Clone)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(RESERVED_MOVES),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
