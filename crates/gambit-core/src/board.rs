//! The board: piece placement, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete position data.
///
/// Pure value type: copying a `Board` copies the whole grid and every flag,
/// so a copy can be mutated freely without touching the original.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Occupancy indexed `[rank][file]`.
    squares: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
    castling: CastleRights,
    /// Square skipped by a double push on the previous ply.
    en_passant: Option<Square>,
    /// Plies since the last pawn move or capture.
    halfmove_clock: u32,
    /// Starts at 1, incremented after Black moves.
    fullmove_number: u32,
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let file = file as u8;
                board.put(Square::at(file, color.back_rank()), Some(Piece::new(kind, color)));
                board.put(
                    Square::at(file, color.pawn_home_rank()),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// An empty grid, White to move, no rights, counters at their initial values.
    pub(crate) fn empty() -> Board {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Return `true` if `sq` holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Return `true` if `sq` holds a piece of `color`.
    #[inline]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|p| p.color() == color)
    }

    /// Iterate over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Return the square of `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics unless the board has exactly one king of `color`. Only boards
    /// produced by validated import or legal play are supported.
    pub fn king_square(&self, color: Color) -> Square {
        let mut kings = self.pieces().filter(|(_, p)| p.is_king_of(color)).map(|(sq, _)| sq);
        match (kings.next(), kings.next()) {
            (Some(sq), None) => sq,
            _ => panic!("board must have exactly one {} king", color.name()),
        }
    }

    /// The side whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Castling rights still held by either side.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Square a pawn may capture onto en passant this ply.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Full-move counter, starting at 1.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Place `piece` on `sq`, or clear it with `None`. Returns what was there.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.rank() as usize][sq.file() as usize], piece)
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.pieces().filter(|(_, p)| p.is_king_of(color)).count();
            if count != 1 {
                let color = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_rank = self
            .pieces()
            .any(|(sq, p)| p.kind() == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        // The pawn that just double-pushed sits one step past the target.
        if let Some(target) = self.en_passant {
            let them = !self.side_to_move;
            let pushed = target.offset(0, -self.side_to_move.pawn_step());
            let pawn_behind =
                pushed.and_then(|sq| self.piece_at(sq)) == Some(Piece::new(PieceKind::Pawn, them));
            if !self.is_empty(target) || !pawn_behind {
                return Err(BoardError::InvalidEnPassant { square: target });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Wrapper for printing a board as a bordered 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ╔═════════════════╗")?;
        for rank in (0u8..8).rev() {
            write!(f, "{} ║", rank + 1)?;
            for file in 0u8..8 {
                let c = self.0.piece_at(Square::at(file, rank)).map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f, " ║")?;
        }
        writeln!(f, "  ╚═════════════════╝")?;
        write!(f, "    a b c d e f g h")
    }
}
