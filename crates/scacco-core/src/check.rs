//! Check, checkmate, and stalemate detection.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{is_attacked, legal_moves_for};
use crate::square::Square;

impl Board {
    /// Return `true` if `side`'s king stands on an attacked square.
    ///
    /// A side with no king on the board is reported as not in check; that
    /// state is unreachable through rule-legal play, and every query on it
    /// must still have a defined answer.
    pub fn is_in_check(&self, side: Color) -> bool {
        match self.king_square(side) {
            Some(king_sq) => is_attacked(self, king_sq, side.opponent()),
            None => false,
        }
    }

    /// Return `true` if `side` is checkmated: in check with no legal move.
    ///
    /// Legal moves are already safety-filtered, so "no legal move" is exactly
    /// "no simulated move leaves the king safe".
    pub fn is_checkmate(&self, side: Color) -> bool {
        self.is_in_check(side) && !self.has_legal_move(side)
    }

    /// Return `true` if `side` is stalemated: not in check, yet without a
    /// single legal move.
    pub fn is_stalemate(&self, side: Color) -> bool {
        !self.is_in_check(side) && !self.has_legal_move(side)
    }

    /// Whether any piece of `side` has at least one legal move.
    fn has_legal_move(&self, side: Color) -> bool {
        Square::all().any(|from| {
            self.color_on(from) == Some(side) && !legal_moves_for(self, from, side).is_empty()
        })
    }
}
