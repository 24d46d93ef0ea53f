//! Knight and king moves from fixed offset tables.

use crate::board::Board;
use crate::chess_move::Move;
use crate::square::Square;

pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

pub(super) const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Add a move to every on-board offset target not held by a friendly piece.
pub(super) fn gen_leaper(board: &Board, src: Square, offsets: &[(i8, i8)], list: &mut Vec<Move>) {
    let us = board.side_to_move();
    for &(df, dr) in offsets {
        if let Some(dest) = src.offset(df, dr)
            && !board.is_color(dest, us)
        {
            list.push(Move::new(src, dest));
        }
    }
}
