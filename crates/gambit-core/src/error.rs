//! Error types for position import, board validation, and move input.

use crate::game_state::GameState;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index in FEN order (0 = rank 8).
        rank_index: usize,
        /// Number of squares described so far.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// The castling field is not "-" or an ordered subset of "KQkq".
    #[error("invalid castling rights: \"{found}\"")]
    InvalidCastling {
        /// The invalid field.
        found: String,
    },
    /// The en passant field is not "-" or a target square on the expected rank.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid field.
        found: String,
    },
    /// The halfmove clock or fullmove number is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// Which counter ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid field.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The en passant target is occupied, or no enemy pawn stands past it.
    #[error("no double-pushed pawn behind en passant target {square}")]
    InvalidEnPassant {
        /// The en passant target square.
        square: Square,
    },
}

/// A move string that was malformed or not legal in the current position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move was rejected; the position is unchanged.
    #[error("invalid move: \"{text}\"")]
    Rejected {
        /// The move text as submitted.
        text: String,
    },
}

/// An attempt to declare a game state that only the rules engine may compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeclareError {
    /// The state is derived from the position, not supplied by a caller.
    #[error("{state} is determined by the position and cannot be declared")]
    Computed {
        /// The rejected state.
        state: GameState,
    },
    /// The game has already ended.
    #[error("game already over: {state}")]
    AlreadyOver {
        /// The state the game ended in.
        state: GameState,
    },
}
