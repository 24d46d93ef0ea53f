//! Sliding piece (bishop, rook, queen) rays.

use crate::board::Board;
use crate::chess_move::Move;
use crate::square::Square;

pub(super) const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(super) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each direction from `src` until the edge or a blocker.
///
/// Empty squares are added and extend the ray. A friendly piece ends the ray
/// without being added. An enemy piece is added and ends the ray.
pub(super) fn gen_slider(board: &Board, src: Square, directions: &[(i8, i8)], list: &mut Vec<Move>) {
    let us = board.side_to_move();
    for &(df, dr) in directions {
        let mut cursor = src.offset(df, dr);
        while let Some(dest) = cursor {
            match board.piece_at(dest) {
                None => list.push(Move::new(src, dest)),
                Some(piece) => {
                    if piece.color() != us {
                        list.push(Move::new(src, dest));
                    }
                    break;
                }
            }
            cursor = dest.offset(df, dr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DIAGONAL, ORTHOGONAL, gen_slider};
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn rays(fen: &str, from: &str, directions: &[(i8, i8)]) -> Vec<Move> {
        let board: Board = fen.parse().unwrap();
        let mut list = Vec::new();
        gen_slider(&board, sq(from), directions, &mut list);
        list
    }

    #[test]
    fn rook_on_open_board() {
        assert_eq!(rays("7k/8/8/8/3R4/8/8/K7 w - - 0 1", "d4", &ORTHOGONAL).len(), 14);
    }

    #[test]
    fn bishop_in_corner() {
        assert_eq!(rays("4k3/8/8/8/8/8/8/B3K3 w - - 0 1", "a1", &DIAGONAL).len(), 7);
    }

    #[test]
    fn queen_combines_both_sets() {
        let mut all = ORTHOGONAL.to_vec();
        all.extend_from_slice(&DIAGONAL);
        assert_eq!(rays("k7/8/8/8/3Q4/8/8/7K w - - 0 1", "d4", &all).len(), 27);
    }

    #[test]
    fn friendly_blocker_stops_short_enemy_is_captured() {
        // Rook a1: friendly pawn a3 up the file, enemy knight d1 along the rank.
        let moves = rays("4k3/8/8/8/8/P7/8/R2n3K w - - 0 1", "a1", &ORTHOGONAL);
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(&Move::new(sq("a1"), sq("a2"))));
        assert!(!moves.contains(&Move::new(sq("a1"), sq("a3"))));
        assert!(moves.contains(&Move::new(sq("a1"), sq("d1"))));
        assert!(!moves.contains(&Move::new(sq("a1"), sq("e1"))));
    }
}
