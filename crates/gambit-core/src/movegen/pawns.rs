//! Pawn pushes, captures, promotions, and en passant.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece, Special};
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Push `src -> dest`, expanding to the four promotions on the far rank.
fn push_pawn_move(board: &Board, src: Square, dest: Square, list: &mut Vec<Move>) {
    if dest.rank() == board.side_to_move().promotion_rank() {
        for promo in PromotionPiece::ALL {
            list.push(Move::new_promotion(src, dest, promo));
        }
    } else {
        list.push(Move::new(src, dest));
    }
}

/// Generate pseudo-legal moves for the pawn on `src`, excluding en passant.
pub(super) fn gen_pawn(board: &Board, src: Square, list: &mut Vec<Move>) {
    let us = board.side_to_move();
    let step = us.pawn_step();

    if let Some(one) = src.offset(0, step).filter(|&sq| board.is_empty(sq)) {
        push_pawn_move(board, src, one, list);

        if src.rank() == us.pawn_home_rank()
            && let Some(two) = one.offset(0, step).filter(|&sq| board.is_empty(sq))
        {
            list.push(Move::with_special(src, two, Special::DoublePush));
        }
    }

    for df in [-1, 1] {
        if let Some(target) = src.offset(df, step)
            && board.is_color(target, !us)
        {
            push_pawn_move(board, src, target, list);
        }
    }
}

/// Generate en passant captures onto the current target square, if any.
///
/// Only pawns standing beside the target's file on the capture rank qualify.
pub(super) fn gen_en_passant(board: &Board, list: &mut Vec<Move>) {
    let Some(target) = board.en_passant() else {
        return;
    };
    let us = board.side_to_move();
    if target.rank() != us.en_passant_target_rank() {
        return;
    }

    for df in [-1, 1] {
        let Some(src) = target.offset(df, -us.pawn_step()) else {
            continue;
        };
        if board.piece_at(src) == Some(Piece::new(PieceKind::Pawn, us)) {
            list.push(Move::with_special(src, target, Special::EnPassant));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{gen_en_passant, gen_pawn};
    use crate::board::Board;
    use crate::chess_move::{Move, Special};
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn pawn_moves(fen: &str, from: &str) -> Vec<Move> {
        let board: Board = fen.parse().unwrap();
        let mut list = Vec::new();
        gen_pawn(&board, sq(from), &mut list);
        list
    }

    #[test]
    fn home_rank_pawn_has_single_and_double_push() {
        let moves = pawn_moves(crate::fen::STARTING_FEN, "e2");
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(sq("e2"), sq("e3"))));
        let double = moves.iter().find(|m| m.dest() == sq("e4")).unwrap();
        assert_eq!(double.special(), Special::DoublePush);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", "e2");
        assert!(moves.is_empty(), "pawn blocked on e3 should have no pushes: {moves:?}");
        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", "e2");
        assert_eq!(moves, vec![Move::new(sq("e2"), sq("e3"))]);
    }

    #[test]
    fn captures_need_an_enemy() {
        let moves = pawn_moves("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1", "e2");
        assert!(moves.contains(&Move::new(sq("e2"), sq("d3"))));
        assert!(!moves.contains(&Move::new(sq("e2"), sq("f3"))));
    }

    #[test]
    fn black_pawns_move_down() {
        let moves = pawn_moves("4k3/3p4/4P3/8/8/8/8/4K3 b - - 0 1", "d7");
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::new(sq("d7"), sq("d6"))));
        assert!(moves.contains(&Move::new(sq("d7"), sq("d5"))));
        assert!(moves.contains(&Move::new(sq("d7"), sq("e6"))));
    }

    #[test]
    fn far_rank_expands_to_four_promotions() {
        let moves = pawn_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7");
        assert_eq!(moves.len(), 8, "push and capture each promote four ways: {moves:?}");
        assert!(moves.iter().all(|m| m.promotion().is_some()));
    }

    #[test]
    fn en_passant_from_both_sides() {
        let board: Board = "4k3/8/8/3PpP2/8/8/8/4K3 w - e6 0 1".parse().unwrap();
        let mut list = Vec::new();
        gen_en_passant(&board, &mut list);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|m| m.is_en_passant() && m.dest() == sq("e6")));
    }

    #[test]
    fn en_passant_on_edge_file() {
        let board: Board = "4k3/8/8/8/Pp6/8/8/4K3 b - a3 0 1".parse().unwrap();
        let mut list = Vec::new();
        gen_en_passant(&board, &mut list);
        assert_eq!(list, vec![Move::new(sq("b4"), sq("a3"))]);
    }

    #[test]
    fn no_en_passant_without_target() {
        let board: Board = "4k3/8/8/3Pp3/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mut list = Vec::new();
        gen_en_passant(&board, &mut list);
        assert!(list.is_empty());
    }
}
