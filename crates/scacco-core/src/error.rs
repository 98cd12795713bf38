//! Error types for FEN parsing, board validation, and move application.

use crate::color::Color;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    FieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement field does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    RankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A placement rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {squares} squares, expected 8")]
    RankWidth {
        /// Zero-based rank index as written (0 = rank 8, 7 = rank 1).
        rank: usize,
        /// Number of squares described.
        squares: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    PieceChar {
        /// The offending character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    SideToMove {
        /// The offending field.
        found: String,
    },
    /// An unrecognized character appeared in the castling field.
    #[error("invalid castling character: '{character}'")]
    CastlingChar {
        /// The offending character.
        character: char,
    },
    /// The en passant field is not "-" or a valid algebraic square.
    #[error("invalid en passant square: \"{found}\"")]
    EnPassant {
        /// The offending field.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    Counter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        /// The offending field.
        found: String,
    },
    /// The parsed position fails structural validation.
    #[error("invalid position: {0}")]
    Position(#[from] BoardError),
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected exactly one {color} king, found {count}")]
    KingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// A pawn stands on the first or eighth rank.
    #[error("pawn on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn was found.
        square: Square,
    },
}

/// Errors from submitting a move to a [`Game`](crate::game::Game).
///
/// Every variant leaves the game state untouched: a refused move is simply
/// not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source square holds no piece.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty source square.
        square: Square,
    },
    /// The source square holds a piece of the side not on move.
    #[error("the piece on {square} does not belong to the side to move")]
    NotYourPiece {
        /// The source square.
        square: Square,
    },
    /// The destination is not among the legal moves of the source piece.
    #[error("{from}{to} is not legal in this position")]
    IllegalMove {
        /// Source square of the refused move.
        from: Square,
        /// Destination square of the refused move.
        to: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn fen_error_display() {
        let err = FenError::FieldCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 6 FEN fields, found 4");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::KingCount {
            color: Color::White,
            count: 2,
        };
        assert_eq!(format!("{err}"), "expected exactly one w king, found 2");
    }

    #[test]
    fn fen_error_from_board_error() {
        let err: FenError = BoardError::PawnOnBackRank { square: Square::E8 }.into();
        assert!(matches!(err, FenError::Position(_)));
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::IllegalMove {
            from: Square::E2,
            to: Square::E5,
        };
        assert_eq!(format!("{err}"), "e2e5 is not legal in this position");
    }
}
