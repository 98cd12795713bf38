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

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::FieldCount {
                found: fields.len(),
            });
        }

        // Piece placement, written from rank 8 down to rank 1.
        let rank_strs: Vec<&str> = fields[0].split('/').collect();
        if rank_strs.len() != 8 {
            return Err(FenError::RankCount {
                found: rank_strs.len(),
            });
        }

        let mut squares = [None; Square::COUNT];
        for (written_rank, rank_str) in rank_strs.iter().enumerate() {
            let rank = 7 - written_rank as u8;
            let mut file: u8 = 0;

            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::PieceChar { character: c });
                    }
                    file += run as u8;
                } else {
                    let piece =
                        Piece::from_fen_char(c).ok_or(FenError::PieceChar { character: c })?;
                    if file >= 8 {
                        return Err(FenError::RankWidth {
                            rank: written_rank,
                            squares: file as usize + 1,
                        });
                    }
                    squares[Square::new(file, rank).index()] = Some(piece);
                    file += 1;
                }
            }

            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: written_rank,
                    squares: file as usize,
                });
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::SideToMove {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                Square::from_algebraic(fields[3]).ok_or_else(|| FenError::EnPassant {
                    found: fields[3].to_string(),
                })?,
            )
        };

        let halfmove_clock = fields[4].parse::<u16>().map_err(|_| FenError::Counter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;

        let fullmove_number = fields[5].parse::<u16>().map_err(|_| FenError::Counter {
            field: "fullmove number",
            found: fields[5].to_string(),
        })?;

        let board = Board::from_raw(
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        );
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_run = 0u8;
            for file in 0u8..8 {
                match self.piece_on(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
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

        write!(f, " {}", self.side_to_move())?;
        write!(f, " {}", self.castling())?;
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

    fn roundtrip(fen: &str) {
        let board: Board = fen.parse().unwrap();
        let output = format!("{board}");
        assert_eq!(output, fen, "FEN roundtrip failed");
        let reparsed: Board = output.parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_FEN);
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
    }

    #[test]
    fn roundtrip_castled_middlegame() {
        roundtrip("r1bq1rk1/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 w - - 6 6");
    }

    #[test]
    fn roundtrip_endgame() {
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    }

    #[test]
    fn roundtrip_black_to_move_with_en_passant() {
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_constructor = Board::starting_position();
        let from_fen: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(from_constructor, from_fen);
    }

    #[test]
    fn error_wrong_field_count() {
        assert!("e4 e5".parse::<Board>().is_err());
    }

    #[test]
    fn error_invalid_piece_char() {
        assert!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"
                .parse::<Board>()
                .is_err()
        );
    }

    #[test]
    fn error_bad_rank_width() {
        assert!(
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
                .parse::<Board>()
                .is_err()
        );
        assert!(
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
                .parse::<Board>()
                .is_err()
        );
    }

    #[test]
    fn error_invalid_side() {
        assert!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"
                .parse::<Board>()
                .is_err()
        );
    }

    #[test]
    fn error_invalid_en_passant() {
        assert!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1"
                .parse::<Board>()
                .is_err()
        );
    }

    #[test]
    fn error_invalid_counter() {
        assert!(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - abc 1"
                .parse::<Board>()
                .is_err()
        );
    }

    #[test]
    fn error_missing_king() {
        assert!("8/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>().is_err());
    }

    #[test]
    fn error_pawn_on_back_rank() {
        assert!("4k2P/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>().is_err());
    }
}
