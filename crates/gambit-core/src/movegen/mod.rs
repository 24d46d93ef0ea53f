//! Move generation: pseudo-legal candidates per piece, then a legality filter.

mod castling;
mod leapers;
mod legality;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::PieceKind;

use self::castling::gen_castling;
use self::leapers::{KING_OFFSETS, KNIGHT_OFFSETS, gen_leaper};
use self::pawns::{gen_en_passant, gen_pawn};
use self::sliders::{DIAGONAL, ORTHOGONAL, gen_slider};

pub use self::legality::{is_in_check, is_legal, is_square_attacked};

/// Generate pseudo-legal moves for the side to move, castling excluded.
///
/// Moves may leave the mover's king capturable. Pieces are visited in square
/// order (a1, b1, ..., h8); en passant captures come last.
pub fn pseudo_moves(board: &Board) -> Vec<Move> {
    let us = board.side_to_move();
    let mut list = Vec::with_capacity(64);

    for (src, piece) in board.pieces().filter(|(_, p)| p.color() == us) {
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(board, src, &mut list),
            PieceKind::Knight => gen_leaper(board, src, &KNIGHT_OFFSETS, &mut list),
            PieceKind::Bishop => gen_slider(board, src, &DIAGONAL, &mut list),
            PieceKind::Rook => gen_slider(board, src, &ORTHOGONAL, &mut list),
            PieceKind::Queen => {
                gen_slider(board, src, &ORTHOGONAL, &mut list);
                gen_slider(board, src, &DIAGONAL, &mut list);
            }
            PieceKind::King => gen_leaper(board, src, &KING_OFFSETS, &mut list),
        }
    }

    gen_en_passant(board, &mut list);
    list
}

/// Generate all legal moves for the side to move.
pub fn generate_legal_moves(board: &Board) -> Vec<Move> {
    legal_moves_given_check(board, is_in_check(board))
}

/// Same as [`generate_legal_moves`] with the check status already known.
pub(crate) fn legal_moves_given_check(board: &Board, in_check: bool) -> Vec<Move> {
    let mut list = pseudo_moves(board);
    gen_castling(board, in_check, &mut list);
    list.retain(|&mv| is_legal(board, mv));
    list
}
