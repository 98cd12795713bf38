//! Move generation: pseudo-legal enumeration, the attack oracle, and the
//! clone-and-probe legality filter.
//!
//! A *pseudo-legal* move matches the piece's movement pattern and the current
//! occupancy but ignores whether it leaves the mover's own king attacked. A
//! *legal* move is a pseudo-legal move that survives the safety probe: the
//! full move is applied to a scratch copy of the board and rejected if the
//! mover's king ends up attacked. The scratch copy never escapes the probe.

mod attack;
mod king;
mod knights;
mod pawns;
mod sliders;

pub use attack::is_attacked;

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::{PieceKind, Promotion};
use crate::square::Square;

use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

/// Destinations the piece on `from` can pseudo-legally reach, for the side to
/// move.
///
/// Empty if `from` is vacant or holds an opponent piece.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    pseudo_moves_for(board, from, board.side_to_move())
}

/// Destinations the piece on `from` can pseudo-legally reach, generated from
/// `side`'s perspective.
///
/// The perspective parameter exists so check and mate queries can reason
/// about a side that is not currently on move. Empty if `from` is vacant or
/// the piece does not belong to `side`.
pub fn pseudo_moves_for(board: &Board, from: Square, side: Color) -> Vec<Square> {
    let Some(piece) = board.piece_on(from) else {
        return Vec::new();
    };
    if !piece.is(side) {
        return Vec::new();
    }

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawns::moves(board, from, side, &mut out),
        PieceKind::Knight => knights::moves(board, from, side, &mut out),
        PieceKind::Bishop => sliders::moves(board, from, side, &BISHOP_DIRECTIONS, &mut out),
        PieceKind::Rook => sliders::moves(board, from, side, &ROOK_DIRECTIONS, &mut out),
        PieceKind::Queen => sliders::moves(board, from, side, &QUEEN_DIRECTIONS, &mut out),
        PieceKind::King => {
            king::steps(board, from, side, &mut out);
            king::castling(board, from, side, &mut out);
        }
    }
    out
}

/// Destinations the piece on `from` can legally reach, for the side to move.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    legal_moves_for(board, from, board.side_to_move())
}

/// Destinations the piece on `from` can legally reach, from `side`'s
/// perspective: the pseudo-legal moves that do not leave `side`'s king
/// attacked.
pub fn legal_moves_for(board: &Board, from: Square, side: Color) -> Vec<Square> {
    pseudo_moves_for(board, from, side)
        .into_iter()
        .filter(|&to| move_is_safe(board, from, to, side))
        .collect()
}

/// All legal `(from, to)` pairs for the side to move.
pub fn all_legal_moves(board: &Board) -> Vec<(Square, Square)> {
    let side = board.side_to_move();
    let mut out = Vec::new();
    for from in Square::all() {
        if board.color_on(from) != Some(side) {
            continue;
        }
        for to in legal_moves_for(board, from, side) {
            out.push((from, to));
        }
    }
    out
}

/// Probe whether playing `from`→`to` leaves `side`'s king un-attacked.
///
/// The complete move is simulated on a scratch copy, including the
/// en passant capture removal and the castling rook displacement, which a
/// primary-displacement-only probe would miss. The promotion piece is
/// irrelevant to the mover's own king safety, so the probe promotes to a
/// queen. A side with no king to find is treated as safe.
pub(crate) fn move_is_safe(board: &Board, from: Square, to: Square, side: Color) -> bool {
    let probe = board.apply_unchecked(from, to, Promotion::Queen);
    match probe.king_square(side) {
        Some(king_sq) => !is_attacked(&probe, king_sq, side.opponent()),
        None => true,
    }
}
