//! Core chess rules: board representation, legal move generation, and game state.

mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game_state;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod position;
mod square;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, PromotionPiece, Special};
pub use color::Color;
pub use error::{BoardError, DeclareError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use game_state::{FIFTY_MOVE_CLAIM_PLIES, GameState, SEVENTY_FIVE_MOVE_PLIES, classify};
pub use movegen::{generate_legal_moves, is_in_check, is_legal, is_square_attacked, pseudo_moves};
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use position::Position;
pub use square::Square;
