//! Castling rights and the fixed square geometry of the four castling moves.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Square the king starts on.
    #[inline]
    pub const fn king_origin(color: Color) -> Square {
        Square::at(4, color.back_rank())
    }

    /// Square the king lands on.
    #[inline]
    pub const fn king_dest(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::at(6, color.back_rank()),
            CastleSide::QueenSide => Square::at(2, color.back_rank()),
        }
    }

    /// Square the king passes over between origin and destination.
    #[inline]
    pub const fn king_transit(self, color: Color) -> Square {
        self.rook_dest(color)
    }

    /// Square the rook starts on.
    #[inline]
    pub const fn rook_origin(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::at(7, color.back_rank()),
            CastleSide::QueenSide => Square::at(0, color.back_rank()),
        }
    }

    /// Square the rook lands on.
    #[inline]
    pub const fn rook_dest(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::at(5, color.back_rank()),
            CastleSide::QueenSide => Square::at(3, color.back_rank()),
        }
    }

    /// Files strictly between king and rook, all of which must be empty.
    #[inline]
    pub const fn between_files(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Find the castling side whose king move is `src -> dest` for `color`.
    pub fn from_king_move(color: Color, src: Square, dest: Square) -> Option<CastleSide> {
        if src != CastleSide::king_origin(color) {
            return None;
        }
        CastleSide::ALL
            .into_iter()
            .find(|side| side.king_dest(color) == dest)
    }
}

/// The four castling flags packed into the low nibble (K, Q, k, q from bit 0 up).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// Every right lost.
    pub const NONE: CastleRights = CastleRights(0);
    /// Every right present, as in the starting position.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// `K` in FEN.
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    /// `Q` in FEN.
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    /// `k` in FEN.
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    /// `q` in FEN.
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// FEN letters in canonical order, paired with their flags.
    const FEN_ORDER: [(char, CastleRights); 4] = [
        ('K', Self::WHITE_KING),
        ('Q', Self::WHITE_QUEEN),
        ('k', Self::BLACK_KING),
        ('q', Self::BLACK_QUEEN),
    ];

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Every flag of `other` is present.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Union of both sets.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// `self` without the flags of `other`.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether a specific color and side may still castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// The flag for one color and side.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Parse the FEN castling field: `-` or a non-empty, ordered subset of `KQkq`.
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        let invalid = || FenError::InvalidCastling {
            found: s.to_string(),
        };

        let mut rights = CastleRights::NONE;
        let mut order = Self::FEN_ORDER.iter();
        for c in s.chars() {
            // Each letter must appear after the previous one in KQkq order.
            let (_, flag) = order.find(|(letter, _)| *letter == c).ok_or_else(invalid)?;
            rights = rights.insert(*flag);
        }
        if rights.is_empty() {
            return Err(invalid());
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        Self::FEN_ORDER
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(letter, _)| *letter)
            .collect()
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
