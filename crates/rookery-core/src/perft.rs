//! Perft: leaf counts of the legal move tree, for checking move generation
//! against published figures.

use tracing::trace;

use crate::movegen::legal_moves;
use crate::state::GameState;

/// Count leaf nodes `depth` plies below `state`.
///
/// Depth 0 counts the position itself. The last ply is bulk-counted from
/// the move list length.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| perft(&state.make_move(mv), depth - 1))
        .sum()
}

/// Perft split by first move, as `(coordinate move, nodes)` pairs sorted
/// by move text.
pub fn divide(state: &GameState, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(state)
        .iter()
        .map(|&mv| {
            let nodes = perft(&state.make_move(mv), depth.saturating_sub(1));
            trace!(%mv, nodes, "divide");
            (mv.to_string(), nodes)
        })
        .collect();
    results.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    results
}
