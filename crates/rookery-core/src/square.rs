//! Board squares, indexed little-endian rank-file (a1 = 0, h8 = 63).

use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;
use crate::file::File;
use crate::rank::Rank;

/// One of the 64 squares.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Build a square from its file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank as u8 * 8 + file as u8)
    }

    /// Build a square from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Build a square from zero-based file and rank coordinates, as a
    /// front end that works in grid positions would supply them.
    pub fn from_coords(file: u8, rank: u8) -> Result<Square, ChessError> {
        match (File::from_index(file), Rank::from_index(rank)) {
            (Some(file), Some(rank)) => Ok(Square::new(file, rank)),
            _ => Err(ChessError::InvalidSquare {
                found: format!("({file}, {rank})"),
            }),
        }
    }

    /// Return the zero-based index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 & 7) as usize]
    }

    /// Return the rank.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 >> 3) as usize]
    }

    /// Step by a file and rank delta, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = (self.0 & 7) as i8 + file_delta;
        let rank = (self.0 >> 3) as i8 + rank_delta;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// `true` for light squares (h1 is light, a1 is dark).
    #[inline]
    pub const fn is_light(self) -> bool {
        ((self.0 & 7) + (self.0 >> 3)) % 2 == 1
    }

    /// Iterate a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

macro_rules! named_squares {
    ($($rank:ident => [$($name:ident),*]),* $(,)?) => {
        impl Square {
            $(named_squares!(@rank $rank, [$($name),*]);)*
        }
    };
    (@rank $rank:ident, [$a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $f:ident, $g:ident, $h:ident]) => {
        pub const $a: Square = Square::new(File::A, Rank::$rank);
        pub const $b: Square = Square::new(File::B, Rank::$rank);
        pub const $c: Square = Square::new(File::C, Rank::$rank);
        pub const $d: Square = Square::new(File::D, Rank::$rank);
        pub const $e: Square = Square::new(File::E, Rank::$rank);
        pub const $f: Square = Square::new(File::F, Rank::$rank);
        pub const $g: Square = Square::new(File::G, Rank::$rank);
        pub const $h: Square = Square::new(File::H, Rank::$rank);
    };
}

named_squares! {
    R1 => [A1, B1, C1, D1, E1, F1, G1, H1],
    R2 => [A2, B2, C2, D2, E2, F2, G2, H2],
    R3 => [A3, B3, C3, D3, E3, F3, G3, H3],
    R4 => [A4, B4, C4, D4, E4, F4, G4, H4],
    R5 => [A5, B5, C5, D5, E5, F5, G5, H5],
    R6 => [A6, B6, C6, D6, E6, F6, G6, H6],
    R7 => [A7, B7, C7, D7, E7, F7, G7, H7],
    R8 => [A8, B8, C8, D8, E8, F8, G8, H8],
}

impl FromStr for Square {
    type Err = ChessError;

    /// Parse algebraic text such as `"e4"`.
    fn from_str(s: &str) -> Result<Square, ChessError> {
        let mut chars = s.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => File::from_char(f).zip(Rank::from_char(r)),
            _ => None,
        };
        parsed
            .map(|(file, rank)| Square::new(file, rank))
            .ok_or_else(|| ChessError::InvalidSquare {
                found: s.to_string(),
            })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
