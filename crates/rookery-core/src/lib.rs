//! Chess rules engine: board representation, legal move generation, move
//! application and game-status detection.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod make_move;
mod movegen;
mod notation;
mod perft;
mod piece;
mod piece_kind;
mod rank;
mod square;
mod state;
mod status;
mod zobrist;

pub use attacks::{attackers, is_square_attacked};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveFlags, MoveList};
pub use color::Color;
pub use error::{BoardError, ChessError, FenError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use movegen::{in_check, legal_moves, legal_moves_from, pseudo_legal_moves};
pub use notation::{parse_coordinate, parse_san, san};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use square::Square;
pub use state::GameState;
pub use status::{FIFTY_MOVE_PLIES, GameStatus, game_status, insufficient_material};
