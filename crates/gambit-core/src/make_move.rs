//! In-place move application.

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, Special};
use crate::color::Color;
use crate::piece::{Piece, PieceKind};

impl Board {
    /// Apply `mv` to this board in place.
    ///
    /// `mv` is assumed to come from this position's legal (or pseudo-legal)
    /// move list; applying any other move leaves the board in an unspecified
    /// but memory-safe state. The null move only clears the en passant target
    /// and passes the turn.
    pub fn apply(&mut self, mv: Move) {
        let us = self.side_to_move();
        let src = mv.src();
        let dest = mv.dest();

        self.set_en_passant(None);

        if mv.is_null() {
            self.set_side_to_move(!us);
            return;
        }

        let Some(moving) = self.piece_at(src) else {
            self.set_side_to_move(!us);
            return;
        };

        if mv.special() == Special::DoublePush {
            self.set_en_passant(src.offset(0, us.pawn_step()));
        }

        let is_capture = self.is_color(dest, !us);
        if moving.kind() == PieceKind::Pawn || is_capture {
            self.set_halfmove_clock(0);
        } else {
            self.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }

        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }

        let placed = match mv.special() {
            Special::Promotion(promo) => Piece::new(promo.to_piece_kind(), us),
            _ => moving,
        };

        if moving.kind() == PieceKind::King
            && let Some(side) = CastleSide::from_king_move(us, src, dest)
            && self.castling().has(us, side)
        {
            let rook = self.put(side.rook_origin(us), None);
            self.put(side.rook_dest(us), rook);
        }

        self.put(src, None);
        self.put(dest, Some(placed));

        if mv.special() == Special::EnPassant
            && let Some(captured) = dest.offset(0, -us.pawn_step())
        {
            self.put(captured, None);
        }

        self.set_castling(self.revoked_castling());
        self.set_side_to_move(!us);
    }

    /// Current rights minus any whose king or rook has left its origin square.
    ///
    /// A cleared right is never set again here, so rights only decrease.
    fn revoked_castling(&self) -> CastleRights {
        let mut rights = self.castling();
        for color in Color::ALL {
            let king_home = self.piece_at(CastleSide::king_origin(color))
                == Some(Piece::new(PieceKind::King, color));
            for side in CastleSide::ALL {
                let rook_home =
                    self.piece_at(side.rook_origin(color)) == Some(Piece::new(PieceKind::Rook, color));
                if !(king_home && rook_home) {
                    rights = rights.remove(CastleRights::flag(color, side));
                }
            }
        }
        rights
    }
}
