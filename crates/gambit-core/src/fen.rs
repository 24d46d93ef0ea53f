//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a move counter consisting only of ASCII digits.
fn parse_counter(field: &'static str, s: &str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidMoveCounter {
        field,
        found: s.to_string(),
    };
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    s.parse::<u32>().map_err(|_| invalid())
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first.
            let rank = 7 - rank_index as u8;
            let mut file: usize = 0;

            for c in rank_str.chars() {
                let width = match c.to_digit(10) {
                    Some(run @ 1..=8) => run as usize,
                    Some(_) => return Err(FenError::InvalidPieceChar { character: c }),
                    None => 1,
                };
                if file + width > 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file + width,
                    });
                }
                if width == 1 && !c.is_ascii_digit() {
                    let piece = Piece::from_fen_char(c)
                        .ok_or(FenError::InvalidPieceChar { character: c })?;
                    board.put(Square::at(file as u8, rank), Some(piece));
                }
                file += width;
            }

            if file != 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file,
                });
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        board.set_side_to_move(side_to_move);
        board.set_castling(CastleRights::from_fen(fields[2])?);

        // The target must sit where the opponent's double push just skipped.
        let en_passant = match fields[3] {
            "-" => None,
            field => Some(
                Square::from_algebraic(field)
                    .filter(|sq| sq.rank() == side_to_move.en_passant_target_rank())
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: field.to_string(),
                    })?,
            ),
        };
        board.set_en_passant(en_passant);

        board.set_halfmove_clock(parse_counter("halfmove clock", fields[4])?);
        let fullmove_number = parse_counter("fullmove number", fields[5])?;
        if fullmove_number == 0 {
            return Err(FenError::InvalidMoveCounter {
                field: "fullmove number",
                found: fields[5].to_string(),
            });
        }
        board.set_fullmove_number(fullmove_number);

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_run = 0u8;
            for file in 0u8..8 {
                match self.piece_at(Square::at(file, rank)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::error::{BoardError, FenError};

    fn roundtrip(fen: &str) {
        let board: Board = fen.parse().unwrap();
        assert_eq!(format!("{board}"), fen, "FEN roundtrip failed");
    }

    #[test]
    fn roundtrip_reference_positions() {
        roundtrip(STARTING_FEN);
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }

    #[test]
    fn starting_position_matches_fen() {
        let parsed: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let parsed: Board = format!("  {STARTING_FEN}\n").parse().unwrap();
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5".parse::<Board>(),
            Err(FenError::WrongFieldCount { found: 2 })
        );
        let seven = format!("{STARTING_FEN} extra");
        assert!(matches!(seven.parse::<Board>(), Err(FenError::WrongFieldCount { found: 7 })));
    }

    #[test]
    fn error_wrong_rank_count() {
        let result = "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert_eq!(result, Err(FenError::WrongRankCount { found: 7 }));
    }

    #[test]
    fn error_digit_run_overflows_rank() {
        let result = "rnbqkbnr/pppppppp/8/8/8/44P/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 5, .. })));
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR w KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 7, length: 9 })));
    }

    #[test]
    fn error_short_rank() {
        let result = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 1, length: 7 })));
    }

    #[test]
    fn error_invalid_piece_char() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/9/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/08/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ] {
            assert!(
                matches!(fen.parse::<Board>(), Err(FenError::InvalidPieceChar { .. })),
                "{fen} should fail on a piece character"
            );
        }
    }

    #[test]
    fn error_invalid_color() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        for field in ["XQkq", "qkQK", "KQkqq"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w {field} - 0 1");
            assert!(
                matches!(fen.parse::<Board>(), Err(FenError::InvalidCastling { .. })),
                "castling field {field:?} should be rejected"
            );
        }
    }

    #[test]
    fn error_invalid_en_passant() {
        for field in ["z9", "e4", "e3", "e", "e66"] {
            let fen = format!("rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq {field} 0 1");
            assert!(
                matches!(fen.parse::<Board>(), Err(FenError::InvalidEnPassant { .. })),
                "en passant field {field:?} should be rejected"
            );
        }
    }

    #[test]
    fn error_invalid_move_counters() {
        for (half, full) in [("abc", "1"), ("-1", "1"), ("+3", "1"), ("0", "0"), ("0", "x")] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - {half} {full}");
            assert!(
                matches!(fen.parse::<Board>(), Err(FenError::InvalidMoveCounter { .. })),
                "counters {half} {full} should be rejected"
            );
        }
    }

    #[test]
    fn counters_accept_full_range() {
        roundtrip("4k3/8/8/8/8/8/8/4K3 w - - 4294967295 4294967295");
        let result = "4k3/8/8/8/8/8/8/4K3 w - - 4294967296 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })));
    }

    #[test]
    fn error_en_passant_without_pushed_pawn() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 1",
            "4k3/8/4n3/4p3/8/8/8/4K3 w - e6 0 1",
            "4k3/8/8/4P3/8/8/8/4K3 w - e6 0 1",
        ] {
            assert!(
                matches!(
                    fen.parse::<Board>(),
                    Err(FenError::InvalidBoard { source: BoardError::InvalidEnPassant { .. } })
                ),
                "{fen} should be rejected"
            );
        }
    }

    #[test]
    fn error_invalid_board() {
        let result = "8/8/8/8/8/8/8/K7 w - - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidBoard { .. })));
    }
}
