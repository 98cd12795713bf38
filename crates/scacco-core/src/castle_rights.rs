//! Castling rights for both sides and wings, packed into four bits.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which wing of the board a castling move heads toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    Kingside,
    Queenside,
}

impl Wing {
    /// Both wings, kingside first.
    pub const ALL: [Wing; 2] = [Wing::Kingside, Wing::Queenside];
}

/// Remaining castling rights, bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
///
/// A right means "neither the king nor that wing's rook has moved, and the
/// rook has not been captured on its home square". Rights are monotone: the
/// applier only ever removes them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four castling rights, as in the starting position.
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KINGSIDE: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEENSIDE: CastleRights = CastleRights(0b0010);
    pub const BLACK_KINGSIDE: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEENSIDE: CastleRights = CastleRights(0b1000);

    /// Both rights of one side.
    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// Return the raw bits (lower four).
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return `true` if no rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if every bit of `other` is present in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    /// Return `self` with the bits of `other` added.
    #[inline]
    pub const fn with(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return `self` with the bits of `other` removed.
    #[inline]
    pub const fn without(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Whether the given side may still castle toward the given wing.
    #[inline]
    pub const fn has(self, color: Color, wing: Wing) -> bool {
        self.contains(Self::flag(color, wing))
    }

    /// The single-bit value for one side and wing.
    #[inline]
    pub const fn flag(color: Color, wing: Wing) -> CastleRights {
        match (color, wing) {
            (Color::White, Wing::Kingside) => Self::WHITE_KINGSIDE,
            (Color::White, Wing::Queenside) => Self::WHITE_QUEENSIDE,
            (Color::Black, Wing::Kingside) => Self::BLACK_KINGSIDE,
            (Color::Black, Wing::Queenside) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Rights forfeited when a move starts or ends on the given square.
    ///
    /// Keyed on both ends of a move: leaving a king or rook home square
    /// revokes by movement, landing on a rook home square revokes by capture.
    pub const fn revoked_by(square: Square) -> CastleRights {
        match square {
            Square::E1 => Self::WHITE_BOTH,
            Square::H1 => Self::WHITE_KINGSIDE,
            Square::A1 => Self::WHITE_QUEENSIDE,
            Square::E8 => Self::BLACK_BOTH,
            Square::H8 => Self::BLACK_KINGSIDE,
            Square::A8 => Self::BLACK_QUEENSIDE,
            _ => Self::NONE,
        }
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                _ => return Err(FenError::CastlingChar { character: c }),
            };
            rights = rights.with(flag);
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        if self.contains(Self::WHITE_KINGSIDE) {
            s.push('K');
        }
        if self.contains(Self::WHITE_QUEENSIDE) {
            s.push('Q');
        }
        if self.contains(Self::BLACK_KINGSIDE) {
            s.push('k');
        }
        if self.contains(Self::BLACK_QUEENSIDE) {
            s.push('q');
        }
        s
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
