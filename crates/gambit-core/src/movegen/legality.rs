//! King-safety checks by simulation.
//!
//! Every check here copies the board, applies a change to the copy, and asks
//! whether any opponent pseudo-legal move lands on the square of interest.
//! The board passed in is never modified.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

use super::pseudo_moves;

/// Whether any pseudo-legal move of the side to move on `board` reaches `sq`.
fn reaches(board: &Board, sq: Square) -> bool {
    pseudo_moves(board).iter().any(|mv| mv.dest() == sq)
}

/// Return `true` if playing `mv` does not leave the mover's king capturable.
///
/// `mv` must be pseudo-legal for `board` (or the null move).
pub fn is_legal(board: &Board, mv: Move) -> bool {
    let us = board.side_to_move();
    let mut after = *board;
    after.apply(mv);
    !reaches(&after, after.king_square(us))
}

/// Return `true` if the side to move is in check.
pub fn is_in_check(board: &Board) -> bool {
    !is_legal(board, Move::NULL)
}

/// Return `true` if `by` could capture a piece of the other color on `sq`.
///
/// A marker piece of the defending color is placed on `sq` so that pawn
/// captures register and pawn pushes onto the square do not.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    let mut probe = *board;
    probe.put(sq, Some(Piece::new(PieceKind::Queen, !by)));
    probe.set_side_to_move(by);
    probe.set_en_passant(None);
    reaches(&probe, sq)
}
