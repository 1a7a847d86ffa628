//! Zobrist position keys, used to detect repeated positions.

use crate::color::Color;
use crate::state::GameState;

/// 12 x 64 piece-square keys, then side to move, 16 castling masks and
/// 8 en passant files.
const PIECE_SQUARE_KEYS: usize = 12 * 64;
const SIDE_KEY: usize = PIECE_SQUARE_KEYS;
const CASTLING_KEYS: usize = SIDE_KEY + 1;
const EN_PASSANT_KEYS: usize = CASTLING_KEYS + 16;
const KEY_COUNT: usize = EN_PASSANT_KEYS + 8;

const SEED: u64 = 0x726f_6f6b_6572_7921;

/// Xorshift64 step.
const fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

static KEYS: [u64; KEY_COUNT] = {
    let mut keys = [0u64; KEY_COUNT];
    let mut state = SEED;
    let mut i = 0;
    while i < KEY_COUNT {
        state = xorshift64(state);
        keys[i] = state;
        i += 1;
    }
    keys
};

impl GameState {
    /// A 64-bit key identifying this position for repetition purposes.
    ///
    /// Covers placement, side to move, castling rights and the en passant
    /// file when a capture there is actually available. Move counters are
    /// excluded, so positions reached at different times compare equal.
    pub fn key(&self) -> u64 {
        let mut key = 0u64;
        for (sq, piece) in self.board().pieces() {
            key ^= KEYS[piece.index() * 64 + sq.index()];
        }
        if self.side_to_move() == Color::Black {
            key ^= KEYS[SIDE_KEY];
        }
        key ^= KEYS[CASTLING_KEYS + self.castling().bits() as usize];
        if self.en_passant_capturable()
            && let Some(target) = self.en_passant()
        {
            key ^= KEYS[EN_PASSANT_KEYS + target.file().index()];
        }
        key
    }
}
