//! Piece movement patterns and square-attack detection.
//!
//! The same direction tables drive pseudo-legal move generation and the
//! attack test. Attack detection casts each pattern backwards from the
//! target square, so it never consults the legality filter.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::state::GameState;

/// A (file, rank) step.
pub(crate) type Step = (i8, i8);

pub(crate) const KNIGHT_STEPS: [Step; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_STEPS: [Step; 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ROOK_RAYS: [Step; 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub(crate) const BISHOP_RAYS: [Step; 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Ray directions for a sliding kind; empty for the others.
pub(crate) const fn rays(kind: PieceKind) -> &'static [Step] {
    const QUEEN_RAYS: [Step; 8] = KING_STEPS;
    match kind {
        PieceKind::Bishop => &BISHOP_RAYS,
        PieceKind::Rook => &ROOK_RAYS,
        PieceKind::Queen => &QUEEN_RAYS,
        _ => &[],
    }
}

/// First occupied square along a ray from `from` (exclusive), if any.
fn first_blocker(board: &Board, from: Square, (df, dr): Step) -> Option<(Square, Piece)> {
    let mut cursor = from;
    while let Some(next) = cursor.offset(df, dr) {
        if let Some(piece) = board.piece_at(next) {
            return Some((next, piece));
        }
        cursor = next;
    }
    None
}

/// Return `true` if any piece of `by` attacks `sq`.
///
/// Occupancy of `sq` itself is irrelevant; it may be empty, hold an enemy
/// piece, or hold one of `by`'s own pieces.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let holds = |target: Option<Square>, kind: PieceKind| {
        target.is_some_and(|t| board.piece_at(t) == Some(Piece::new(kind, by)))
    };

    // A pawn of `by` attacks diagonally forward, so look one rank behind.
    if [-1, 1]
        .into_iter()
        .any(|df| holds(sq.offset(df, -by.forward()), PieceKind::Pawn))
    {
        return true;
    }

    if KNIGHT_STEPS
        .iter()
        .any(|&(df, dr)| holds(sq.offset(df, dr), PieceKind::Knight))
    {
        return true;
    }

    if KING_STEPS
        .iter()
        .any(|&(df, dr)| holds(sq.offset(df, dr), PieceKind::King))
    {
        return true;
    }

    let slider_hits = |dirs: &[Step], kind: PieceKind| {
        dirs.iter().any(|&dir| {
            first_blocker(board, sq, dir).is_some_and(|(_, piece)| {
                piece.color() == by && (piece.kind() == kind || piece.kind() == PieceKind::Queen)
            })
        })
    };

    slider_hits(&ROOK_RAYS, PieceKind::Rook) || slider_hits(&BISHOP_RAYS, PieceKind::Bishop)
}

impl GameState {
    /// Return `true` if any piece of `by` attacks `sq` in this position.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        is_square_attacked(self.board(), sq, by)
    }
}

/// Squares holding `by`'s pieces that attack `sq`.
pub fn attackers(board: &Board, sq: Square, by: Color) -> Vec<Square> {
    board
        .pieces_of(by)
        .filter(|&(from, piece)| attacks_square(board, from, piece, sq))
        .map(|(from, _)| from)
        .collect()
}

/// Whether `piece` standing on `from` attacks `target`.
pub(crate) fn attacks_square(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    let steps_reach = |steps: &[Step]| {
        steps
            .iter()
            .any(|&(df, dr)| from.offset(df, dr) == Some(target))
    };
    match piece.kind() {
        PieceKind::Pawn => {
            let forward = piece.color().forward();
            from.offset(-1, forward) == Some(target) || from.offset(1, forward) == Some(target)
        }
        PieceKind::Knight => steps_reach(&KNIGHT_STEPS),
        PieceKind::King => steps_reach(&KING_STEPS),
        slider => rays(slider).iter().any(|&dir| {
            let mut cursor = from;
            while let Some(next) = cursor.offset(dir.0, dir.1) {
                if next == target {
                    return true;
                }
                if !board.is_empty_at(next) {
                    return false;
                }
                cursor = next;
            }
            false
        }),
    }
}
