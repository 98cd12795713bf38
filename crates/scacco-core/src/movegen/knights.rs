//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// The eight knight jumps as (file, rank) deltas.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// Append the knight's pseudo-legal destinations: any on-board jump target
/// not occupied by a friendly piece.
pub(super) fn moves(board: &Board, from: Square, side: Color, out: &mut Vec<Square>) {
    for (file_delta, rank_delta) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(file_delta, rank_delta)
            && board.color_on(to) != Some(side)
        {
            out.push(to);
        }
    }
}
