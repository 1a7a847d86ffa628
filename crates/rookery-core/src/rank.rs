//! Board ranks (rows 1–8).

use std::fmt;

/// A rank of the board, from `R1` (White's back rank) to `R8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks from 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Return the zero-based index (rank 1 is 0).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Build a rank from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a rank digit '1'..'8'.
    pub fn from_char(c: char) -> Option<Rank> {
        if c.is_ascii_digit() {
            Rank::from_index((c as u8).wrapping_sub(b'1'))
        } else {
            None
        }
    }

    /// Return the rank digit.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn char_conversions() {
        assert_eq!(Rank::from_char('1'), Some(Rank::R1));
        assert_eq!(Rank::from_char('8'), Some(Rank::R8));
        assert_eq!(Rank::from_char('0'), None);
        assert_eq!(Rank::from_char('9'), None);
        assert_eq!(Rank::R4.to_char(), '4');
    }

    #[test]
    fn ordering_follows_board() {
        assert!(Rank::R1 < Rank::R8);
        assert_eq!(Rank::from_index(8), None);
    }
}
