//! The attack oracle: is a square attacked by a given side?

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{king, knights, pawns, sliders};

/// Return `true` if any piece of `by` attacks `target`.
///
/// Answered by generating reachable squares for every piece of the attacking
/// side and testing membership: the generator run in reverse perspective.
/// Two deliberate differences from plain pseudo-move generation keep the
/// answer rule-correct and the recursion bounded:
///
/// - pawns contribute their capture diagonals, not their pushes;
/// - kings contribute single steps only, never castling.
///
/// Legality-filtered moves must not be used here: the legality filter itself
/// asks this oracle, and feeding it filtered moves would recurse forever.
pub fn is_attacked(board: &Board, target: Square, by: Color) -> bool {
    let mut reachable = Vec::new();
    for from in Square::all() {
        let Some(piece) = board.piece_on(from) else {
            continue;
        };
        if !piece.is(by) {
            continue;
        }

        reachable.clear();
        match piece.kind {
            PieceKind::Pawn => pawns::attacks(from, by, &mut reachable),
            PieceKind::Knight => knights::moves(board, from, by, &mut reachable),
            PieceKind::Bishop => {
                sliders::moves(board, from, by, &BISHOP_DIRECTIONS, &mut reachable)
            }
            PieceKind::Rook => sliders::moves(board, from, by, &ROOK_DIRECTIONS, &mut reachable),
            PieceKind::Queen => sliders::moves(board, from, by, &QUEEN_DIRECTIONS, &mut reachable),
            PieceKind::King => king::steps(board, from, by, &mut reachable),
        }

        if reachable.contains(&target) {
            return true;
        }
    }
    false
}
