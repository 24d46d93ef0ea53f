//! Castling move generation.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

use super::legality::is_square_attacked;

/// Generate castling moves for the side to move.
///
/// A castle requires the right, the king and rook on their origin squares,
/// empty squares between them, and a king that is not in check and does
/// not cross or land on an attacked square.
pub(super) fn gen_castling(board: &Board, in_check: bool, list: &mut Vec<Move>) {
    if in_check {
        return;
    }
    let us = board.side_to_move();
    let king_origin = CastleSide::king_origin(us);
    if board.piece_at(king_origin) != Some(Piece::new(PieceKind::King, us)) {
        return;
    }

    // Lift the king so squares behind it along the rank are judged fairly.
    let mut lifted = *board;
    lifted.put(king_origin, None);

    for side in CastleSide::ALL {
        if !board.castling().has(us, side) {
            continue;
        }
        if board.piece_at(side.rook_origin(us)) != Some(Piece::new(PieceKind::Rook, us)) {
            continue;
        }
        let path_clear = side
            .between_files()
            .iter()
            .all(|&file| board.is_empty(Square::at(file, us.back_rank())));
        if !path_clear {
            continue;
        }
        let safe = [side.king_transit(us), side.king_dest(us)]
            .into_iter()
            .all(|sq| !is_square_attacked(&lifted, sq, !us));
        if safe {
            list.push(Move::new(king_origin, side.king_dest(us)));
        }
    }
}
