//! Game outcome classification.

use std::fmt;

use crate::board::Board;
use crate::chess_move::Move;

/// Half-move clock value at which a draw may be claimed.
pub const FIFTY_MOVE_CLAIM_PLIES: u32 = 100;

/// Half-move clock value at which the game is drawn without a claim.
pub const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Classification of a game.
///
/// Only the first five variants are computed from the board. The rest are
/// supplied by callers (`Resignation`, `DrawByAgreement`, `LoseOnTime`) or
/// not detected at all (material and repetition draws).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Ongoing,
    Checkmate,
    Stalemate,
    /// Claimable: play may continue.
    DrawBy50Move,
    DrawBy75Move,
    Resignation,
    DrawByAgreement,
    LoseOnTime,
    DrawByMaterial,
    DrawBy3Repetition,
    DrawBy5Repetition,
}

impl GameState {
    /// Return `true` if no further moves may be played.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::Ongoing | GameState::DrawBy50Move)
    }

    /// Return `true` if a caller may set this state directly.
    pub const fn is_declarable(self) -> bool {
        matches!(
            self,
            GameState::Resignation | GameState::DrawByAgreement | GameState::LoseOnTime
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::Ongoing => "ongoing",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
            GameState::DrawBy50Move => "draw by 50-move rule",
            GameState::DrawBy75Move => "draw by 75-move rule",
            GameState::Resignation => "resignation",
            GameState::DrawByAgreement => "draw by agreement",
            GameState::LoseOnTime => "loss on time",
            GameState::DrawByMaterial => "draw by insufficient material",
            GameState::DrawBy3Repetition => "draw by threefold repetition",
            GameState::DrawBy5Repetition => "draw by fivefold repetition",
        };
        f.write_str(text)
    }
}

/// Classify `board` given its legal moves and check status.
///
/// An empty move list takes precedence over the move-count draws.
pub fn classify(board: &Board, legal_moves: &[Move], in_check: bool) -> GameState {
    if legal_moves.is_empty() {
        return if in_check {
            GameState::Checkmate
        } else {
            GameState::Stalemate
        };
    }
    match board.halfmove_clock() {
        n if n >= SEVENTY_FIVE_MOVE_PLIES => GameState::DrawBy75Move,
        n if n >= FIFTY_MOVE_CLAIM_PLIES => GameState::DrawBy50Move,
        _ => GameState::Ongoing,
    }
}
