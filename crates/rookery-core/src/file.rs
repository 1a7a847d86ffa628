//! Board files (columns a–h).

use std::fmt;

/// A file of the board, from `A` (queen's rook side for White) to `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files from a to h.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Return the zero-based index.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Build a file from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a lowercase file letter.
    pub fn from_char(c: char) -> Option<File> {
        if c.is_ascii_lowercase() {
            File::from_index((c as u8).wrapping_sub(b'a'))
        } else {
            None
        }
    }

    /// Return the lowercase file letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::File;

    #[test]
    fn char_conversions() {
        assert_eq!(File::from_char('a'), Some(File::A));
        assert_eq!(File::from_char('h'), Some(File::H));
        assert_eq!(File::from_char('i'), None);
        assert_eq!(File::from_char('A'), None);
        assert_eq!(File::E.to_char(), 'e');
    }

    #[test]
    fn index_bounds() {
        assert_eq!(File::from_index(7), Some(File::H));
        assert_eq!(File::from_index(8), None);
        for file in File::ALL {
            assert_eq!(File::from_index(file.index() as u8), Some(file));
        }
    }
}
