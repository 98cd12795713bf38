//! Chess piece kinds and the promotion-choice vocabulary.

use std::fmt;

/// The kind of a chess piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 6;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Return the index (0..5).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the FEN character for this piece kind (lowercase).
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parse a FEN character (case-insensitive) into a piece kind.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/// The piece a pawn may be replaced with on reaching the far rank.
///
/// Kings and pawns are excluded by construction: a caller-supplied choice is
/// always one of these four, so no runtime validation of the choice is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    /// All promotion choices, queen first.
    pub const ALL: [Promotion; 4] = [
        Promotion::Queen,
        Promotion::Rook,
        Promotion::Bishop,
        Promotion::Knight,
    ];

    /// The piece kind this choice produces.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Queen => PieceKind::Queen,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Knight => PieceKind::Knight,
        }
    }

    /// Parse a piece letter (case-insensitive) into a promotion choice.
    ///
    /// Returns `None` for anything outside queen/rook/bishop/knight, including
    /// the letters for kings and pawns.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Promotion> {
        match PieceKind::from_fen_char(c)? {
            PieceKind::Queen => Some(Promotion::Queen),
            PieceKind::Rook => Some(Promotion::Rook),
            PieceKind::Bishop => Some(Promotion::Bishop),
            PieceKind::Knight => Some(Promotion::Knight),
            PieceKind::Pawn | PieceKind::King => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PieceKind, Promotion};

    #[test]
    fn index_values() {
        assert_eq!(PieceKind::Pawn.index(), 0);
        assert_eq!(PieceKind::King.index(), 5);
        assert_eq!(PieceKind::ALL.len(), PieceKind::COUNT);
    }

    #[test]
    fn fen_char_roundtrip() {
        for kind in PieceKind::ALL {
            let c = kind.fen_char();
            assert_eq!(PieceKind::from_fen_char(c), Some(kind));
            assert_eq!(PieceKind::from_fen_char(c.to_ascii_uppercase()), Some(kind));
        }
    }

    #[test]
    fn from_fen_char_invalid() {
        assert_eq!(PieceKind::from_fen_char('x'), None);
        assert_eq!(PieceKind::from_fen_char('1'), None);
    }

    #[test]
    fn promotion_kinds() {
        assert_eq!(Promotion::Queen.kind(), PieceKind::Queen);
        assert_eq!(Promotion::Rook.kind(), PieceKind::Rook);
        assert_eq!(Promotion::Bishop.kind(), PieceKind::Bishop);
        assert_eq!(Promotion::Knight.kind(), PieceKind::Knight);
    }

    #[test]
    fn promotion_parse_rejects_king_and_pawn() {
        assert_eq!(Promotion::from_fen_char('q'), Some(Promotion::Queen));
        assert_eq!(Promotion::from_fen_char('N'), Some(Promotion::Knight));
        assert_eq!(Promotion::from_fen_char('k'), None);
        assert_eq!(Promotion::from_fen_char('p'), None);
        assert_eq!(Promotion::from_fen_char('z'), None);
    }
}
