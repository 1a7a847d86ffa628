//! Error types for FEN parsing, board validation and move requests.

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Rank number as printed on the board (8 is the first FEN rank).
        rank: u8,
        length: usize,
    },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling field: \"{found}\"")]
    InvalidCastling { found: String },

    /// Castling rights name a king or rook that is not on its home square.
    #[error("castling right '{right}' has no king and rook on their home squares")]
    InconsistentCastling { right: char },

    /// The en passant field is not "-" or a square on the correct rank.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    /// The halfmove clock or fullmove number is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        field: &'static str,
        found: String,
    },

    /// The side that just moved has left its king attacked.
    #[error("the side not to move is in check")]
    OpponentInCheck,

    /// The placement fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: u32 },

    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Errors reported to callers of the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The requested move is not among the legal moves of the position.
    #[error("illegal move: {mv}")]
    IllegalMove { mv: String },

    /// Square text or coordinates do not name a board square.
    #[error("invalid square: {found}")]
    InvalidSquare { found: String },

    /// Move text is neither coordinate notation nor SAN.
    #[error("unrecognised move notation: \"{found}\"")]
    InvalidMoveNotation { found: String },

    /// A serialized game state could not be decoded.
    #[error("invalid state encoding: {0}")]
    InvalidStateEncoding(#[from] FenError),
}
