//! Move generation: pseudo-legal moves per piece pattern, then a
//! copy-make legality filter.

use tracing::trace;

use crate::attacks::{KING_STEPS, KNIGHT_STEPS, Step, is_square_attacked, rays};
use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveFlags, MoveList};
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::state::GameState;

/// Generate every legal move for the side to move.
pub fn legal_moves(state: &GameState) -> MoveList {
    let mut list = pseudo_legal_moves(state);
    list.retain(|&mv| !leaves_king_attacked(state, mv));
    list
}

/// Generate the legal moves of the piece standing on `from`.
///
/// Empty when `from` is empty or holds a piece of the side not to move.
pub fn legal_moves_from(state: &GameState, from: Square) -> MoveList {
    let mut list = MoveList::new();
    if let Some(piece) = state.piece_at(from)
        && piece.color() == state.side_to_move()
    {
        piece_moves(state, from, piece, &mut list);
        list.retain(|&mv| !leaves_king_attacked(state, mv));
    }
    list
}

/// Whether the side to move is in check.
pub fn in_check(state: &GameState) -> bool {
    let us = state.side_to_move();
    state
        .board()
        .king_square(us)
        .is_some_and(|king| is_square_attacked(state.board(), king, !us))
}

/// Apply `mv` to a copy and test whether the mover's own king is attacked.
fn leaves_king_attacked(state: &GameState, mv: Move) -> bool {
    let us = state.side_to_move();
    let next = state.make_move(mv);
    match next.board().king_square(us) {
        Some(king) => is_square_attacked(next.board(), king, !us),
        None => true,
    }
}

/// Moves matching each piece's movement pattern, ignoring self-check.
pub fn pseudo_legal_moves(state: &GameState) -> MoveList {
    let mut list = MoveList::new();
    for (from, piece) in state.board().pieces_of(state.side_to_move()) {
        piece_moves(state, from, piece, &mut list);
    }
    trace!(count = list.len(), "generated pseudo-legal moves");
    list
}

fn piece_moves(state: &GameState, from: Square, piece: Piece, list: &mut MoveList) {
    match piece.kind() {
        PieceKind::Pawn => pawn_moves(state, from, list),
        PieceKind::Knight => step_moves(state, from, &KNIGHT_STEPS, list),
        PieceKind::King => {
            step_moves(state, from, &KING_STEPS, list);
            castling_moves(state, from, list);
        }
        slider => slide_moves(state, from, rays(slider), list),
    }
}

/// Destination flag for a non-pawn move onto `to`, or `None` if a friendly
/// piece stands there.
fn target_flags(state: &GameState, to: Square) -> Option<MoveFlags> {
    match state.piece_at(to) {
        None => Some(MoveFlags::QUIET),
        Some(piece) if piece.color() != state.side_to_move() => Some(MoveFlags::CAPTURE),
        Some(_) => None,
    }
}

fn step_moves(state: &GameState, from: Square, steps: &[Step], list: &mut MoveList) {
    for &(df, dr) in steps {
        if let Some(to) = from.offset(df, dr)
            && let Some(flags) = target_flags(state, to)
        {
            list.push(Move::new(from, to, flags));
        }
    }
}

fn slide_moves(state: &GameState, from: Square, dirs: &[Step], list: &mut MoveList) {
    for &(df, dr) in dirs {
        let mut cursor = from;
        while let Some(to) = cursor.offset(df, dr) {
            let Some(flags) = target_flags(state, to) else {
                break;
            };
            list.push(Move::new(from, to, flags));
            if flags.contains(MoveFlags::CAPTURE) {
                break;
            }
            cursor = to;
        }
    }
}

/// Push a pawn move, expanding it into the four promotions on the last rank.
fn push_pawn_move(from: Square, to: Square, flags: MoveFlags, promotes: bool, list: &mut MoveList) {
    if promotes {
        for kind in PieceKind::PROMOTIONS {
            list.push(Move::promoting(from, to, kind, flags));
        }
    } else {
        list.push(Move::new(from, to, flags));
    }
}

fn pawn_moves(state: &GameState, from: Square, list: &mut MoveList) {
    let us = state.side_to_move();
    let forward = us.forward();
    let last_rank = us.promotion_rank();

    if let Some(one) = from.offset(0, forward)
        && state.board().is_empty_at(one)
    {
        push_pawn_move(from, one, MoveFlags::QUIET, one.rank() == last_rank, list);

        if from.rank() == us.pawn_rank()
            && let Some(two) = one.offset(0, forward)
            && state.board().is_empty_at(two)
        {
            list.push(Move::new(from, two, MoveFlags::DOUBLE_PUSH));
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, forward) else {
            continue;
        };
        match state.piece_at(to) {
            Some(target) if target.color() != us => {
                push_pawn_move(from, to, MoveFlags::CAPTURE, to.rank() == last_rank, list);
            }
            None if state.en_passant() == Some(to) => {
                list.push(Move::new(from, to, MoveFlags::EN_PASSANT));
            }
            _ => {}
        }
    }
}

/// Castling: right held, king and rook at home, squares between them
/// empty, and the king neither starts in, passes through, nor lands on an
/// attacked square.
fn castling_moves(state: &GameState, from: Square, list: &mut MoveList) {
    let us = state.side_to_move();
    let them = !us;
    let board = state.board();
    let home = Square::new(File::E, us.back_rank());
    if from != home || is_square_attacked(board, home, them) {
        return;
    }

    for side in CastleSide::ALL {
        if !state.castling().has(us, side) {
            continue;
        }
        let rook_home = side.rook_home(us);
        if board.piece_at(rook_home) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }

        let (low, high) = if rook_home < home {
            (rook_home.index(), home.index())
        } else {
            (home.index(), rook_home.index())
        };
        let path_clear = (low + 1..high)
            .filter_map(|i| Square::from_index(i as u8))
            .all(|sq| board.is_empty_at(sq));
        if !path_clear {
            continue;
        }

        let target = side.king_target(us);
        let transit = side.rook_target(us);
        if is_square_attacked(board, transit, them) || is_square_attacked(board, target, them) {
            continue;
        }

        list.push(Move::new(from, target, MoveFlags::CASTLE));
    }
}
