//! Sliding piece (rook, bishop, queen) ray-casting.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Orthogonal ray directions as (file, rank) deltas.
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal ray directions.
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The queen's rays: the union of the rook's and the bishop's.
pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Append the slider's pseudo-legal destinations.
///
/// Each ray runs one square at a time until the board edge, stopping short of
/// a friendly piece and stopping on (and including) the first enemy piece.
pub(super) fn moves(
    board: &Board,
    from: Square,
    side: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(file_delta, rank_delta) {
            match board.piece_on(next) {
                None => {
                    out.push(next);
                    cursor = next;
                }
                Some(occupant) => {
                    if !occupant.is(side) {
                        out.push(next);
                    }
                    break;
                }
            }
        }
    }
}
