//! A game in progress: a board plus lazily computed move list, check flag and state.

use std::cell::OnceCell;
use std::fmt;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{DeclareError, FenError, MoveError};
use crate::game_state::{self, GameState};
use crate::movegen;
use crate::square::Square;

/// A position together with its derived caches.
///
/// The legal-move list, check flag and game state are computed on first read
/// and discarded together whenever a move is applied. Cloning yields a copy
/// with empty caches.
pub struct Position {
    board: Board,
    /// Set by [`Position::declare`]; overrides the computed state.
    declared: Option<GameState>,
    legal_moves: OnceCell<Vec<Move>>,
    in_check: OnceCell<bool>,
    state: OnceCell<GameState>,
}

impl Position {
    /// A fresh game from the standard starting position.
    pub fn new() -> Position {
        Position::from(Board::starting_position())
    }

    /// Build a position from FEN text.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        match fen.parse::<Board>() {
            Ok(board) => Ok(Position::from(board)),
            Err(err) => {
                debug!(fen, error = %err, "rejected FEN");
                Err(err)
            }
        }
    }

    /// Serialize the board to FEN.
    pub fn to_fen(&self) -> String {
        self.board.to_string()
    }

    /// Read access to the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> &[Move] {
        self.legal_moves.get_or_init(|| {
            let moves = movegen::legal_moves_given_check(&self.board, self.in_check());
            trace!(count = moves.len(), "legal moves computed");
            moves
        })
    }

    /// Return `true` if the side to move is in check.
    pub fn in_check(&self) -> bool {
        *self.in_check.get_or_init(|| movegen::is_in_check(&self.board))
    }

    /// Current game state. A declared result takes precedence.
    pub fn state(&self) -> GameState {
        if let Some(declared) = self.declared {
            return declared;
        }
        *self
            .state
            .get_or_init(|| game_state::classify(&self.board, self.legal_moves(), self.in_check()))
    }

    /// Return `true` if `by` attacks `sq`.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        movegen::is_square_attacked(&self.board, sq, by)
    }

    /// Play a move given as coordinate text such as `e2e4` or `e7e8q`.
    ///
    /// Returns the move as applied, with its internal tags. Malformed text,
    /// illegal moves and moves after the game has ended are all rejected the
    /// same way and leave the position unchanged.
    pub fn play(&mut self, text: &str) -> Result<Move, MoveError> {
        match Move::from_coordinate(text) {
            Some(candidate) => self.play_matching(candidate, text),
            None => {
                debug!(text, reason = "malformed", "move rejected");
                Err(MoveError::Rejected {
                    text: text.to_string(),
                })
            }
        }
    }

    /// Play an already decoded move, matched against the legal list.
    pub fn play_move(&mut self, mv: Move) -> Result<Move, MoveError> {
        self.play_matching(mv, &mv.to_string())
    }

    fn play_matching(&mut self, candidate: Move, text: &str) -> Result<Move, MoveError> {
        let rejected = || MoveError::Rejected {
            text: text.to_string(),
        };

        let state = self.state();
        if state.is_terminal() {
            debug!(text, %state, reason = "game over", "move rejected");
            return Err(rejected());
        }

        // Equality ignores the double-push and en passant tags, so this finds
        // the fully tagged move.
        let Some(&mv) = self.legal_moves().iter().find(|&&legal| legal == candidate) else {
            debug!(text, reason = "illegal", "move rejected");
            return Err(rejected());
        };

        self.board.apply(mv);
        self.invalidate();
        debug!(mv = %mv, fen = %self.board, "move played");

        let state = self.state();
        if state.is_terminal() {
            info!(%state, "game over");
        }
        Ok(mv)
    }

    /// Record a result decided outside the board: resignation, agreement or time.
    pub fn declare(&mut self, state: GameState) -> Result<(), DeclareError> {
        if !state.is_declarable() {
            return Err(DeclareError::Computed { state });
        }
        let current = self.state();
        if current.is_terminal() {
            return Err(DeclareError::AlreadyOver { state: current });
        }
        info!(%state, "result declared");
        self.declared = Some(state);
        Ok(())
    }

    fn invalidate(&mut self) {
        self.legal_moves = OnceCell::new();
        self.in_check = OnceCell::new();
        self.state = OnceCell::new();
    }
}

impl From<Board> for Position {
    fn from(board: Board) -> Position {
        Position {
            board,
            declared: None,
            legal_moves: OnceCell::new(),
            in_check: OnceCell::new(),
            state: OnceCell::new(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Clone for Position {
    fn clone(&self) -> Position {
        Position {
            declared: self.declared,
            ..Position::from(self.board)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\")", self.board)
    }
}
