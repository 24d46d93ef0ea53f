//! Moves and coordinate move text.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::piece::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    /// All promotion pieces, queen first.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Return the lowercase coordinate-notation letter.
    pub const fn letter(self) -> char {
        match self {
            PromotionPiece::Queen => 'q',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Knight => 'n',
        }
    }

    /// Parse a promotion letter, ignoring case.
    pub fn from_letter(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'q' => Some(PromotionPiece::Queen),
            'r' => Some(PromotionPiece::Rook),
            'b' => Some(PromotionPiece::Bishop),
            'n' => Some(PromotionPiece::Knight),
            _ => None,
        }
    }
}

/// Auxiliary effect of a move. The tags are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
    /// Quiet move, capture, or castling (castling is recognized by its squares).
    None,
    /// Pawn two-step push; sets the en passant target when applied.
    DoublePush,
    /// En passant capture; removes the pawn behind the destination.
    EnPassant,
    /// Pawn promotion to the given piece.
    Promotion(PromotionPiece),
}

/// A move from `src` to `dest` with its special tag.
///
/// Equality and hashing consider only `src`, `dest`, and the promotion piece.
/// The double-push and en passant tags are derived by the generator, never
/// chosen by a player, so a decoded `e2e4` equals the generated double push.
#[derive(Clone, Copy)]
pub struct Move {
    src: Square,
    dest: Square,
    special: Special,
}

impl Move {
    /// The null move: a1a1 with no effect on the board except passing the turn.
    pub const NULL: Move = Move::new(Square::A1, Square::A1);

    /// Create an untagged move (quiet, capture, or castling).
    #[inline]
    pub const fn new(src: Square, dest: Square) -> Move {
        Move {
            src,
            dest,
            special: Special::None,
        }
    }

    /// Create a move with an explicit special tag.
    #[inline]
    pub const fn with_special(src: Square, dest: Square, special: Special) -> Move {
        Move { src, dest, special }
    }

    /// Create a promotion move.
    #[inline]
    pub const fn new_promotion(src: Square, dest: Square, promo: PromotionPiece) -> Move {
        Move::with_special(src, dest, Special::Promotion(promo))
    }

    /// Decode coordinate text `<file><rank><file><rank>[qrbn]`.
    ///
    /// Only the promotion letter is case-insensitive.
    pub fn from_coordinate(text: &str) -> Option<Move> {
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return None;
        }
        let src = Square::from_algebraic(&text[0..2])?;
        let dest = Square::from_algebraic(&text[2..4])?;
        match text[4..].chars().next() {
            None => Some(Move::new(src, dest)),
            Some(c) => PromotionPiece::from_letter(c).map(|p| Move::new_promotion(src, dest, p)),
        }
    }

    /// Source square.
    #[inline]
    pub const fn src(self) -> Square {
        self.src
    }

    /// Destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Special tag.
    #[inline]
    pub const fn special(self) -> Special {
        self.special
    }

    /// Promotion piece, if this is a promotion.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        match self.special {
            Special::Promotion(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.src == Square::A1 && self.dest == Square::A1
    }

    #[inline]
    pub fn is_double_push(self) -> bool {
        self.special == Special::DoublePush
    }

    #[inline]
    pub fn is_en_passant(self) -> bool {
        self.special == Special::EnPassant
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.src == other.src && self.dest == other.dest && self.promotion() == other.promotion()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src.hash(state);
        self.dest.hash(state);
        self.promotion().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.src, self.dest)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?})", self.special)
    }
}
