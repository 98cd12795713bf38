//! Pawn move generation: pushes, double pushes, captures, en passant.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Append the pawn's pseudo-legal destinations.
pub(super) fn moves(board: &Board, from: Square, side: Color, out: &mut Vec<Square>) {
    let step = side.push_delta();

    // Single push onto an empty square; a double push additionally needs the
    // start rank and a second empty square.
    if let Some(one) = from.offset(0, step)
        && board.is_empty(one)
    {
        out.push(one);
        if from.rank() == side.pawn_start_rank()
            && let Some(two) = one.offset(0, step)
            && board.is_empty(two)
        {
            out.push(two);
        }
    }

    // Diagonal captures, including the en passant target square. The captured
    // pawn of an en passant reply sits beside the mover, not on the target.
    for file_delta in [-1, 1] {
        let Some(target) = from.offset(file_delta, step) else {
            continue;
        };
        match board.piece_on(target) {
            Some(occupant) if !occupant.is(side) => out.push(target),
            None if board.en_passant() == Some(target) => out.push(target),
            _ => {}
        }
    }
}

/// Append the squares this pawn attacks: both forward diagonals, regardless
/// of occupancy. Pushes are movement, not attacks, and never appear here.
pub(super) fn attacks(from: Square, side: Color, out: &mut Vec<Square>) {
    let step = side.push_delta();
    for file_delta in [-1, 1] {
        if let Some(target) = from.offset(file_delta, step) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{attacks, moves};
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    fn destinations(fen: &str, from: Square, side: Color) -> Vec<Square> {
        let board: Board = fen.parse().unwrap();
        let mut out = Vec::new();
        moves(&board, from, side, &mut out);
        out.sort_by_key(|sq| sq.index());
        out
    }

    #[test]
    fn double_push_only_from_start_rank() {
        let on_start = destinations(
            "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
            Square::E2,
            Color::White,
        );
        assert_eq!(on_start, vec![Square::E3, Square::E4]);

        let advanced = destinations(
            "4k3/8/8/8/8/4P3/8/4K3 w - - 0 1",
            Square::E3,
            Color::White,
        );
        assert_eq!(advanced, vec![Square::E4]);
    }

    #[test]
    fn blocked_pawn_cannot_push() {
        // A blocker on e3 stops both the single and the double push.
        let blocked = destinations(
            "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1",
            Square::E2,
            Color::White,
        );
        assert!(blocked.is_empty());

        // A blocker on e4 still allows the single push.
        let half_blocked = destinations(
            "4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1",
            Square::E2,
            Color::White,
        );
        assert_eq!(half_blocked, vec![Square::E3]);
    }

    #[test]
    fn captures_enemy_diagonals_only() {
        // Enemy knights on d5 and f5; a friendly pawn straight ahead on e5.
        let dests = destinations(
            "4k3/8/8/3nPn2/4P3/8/8/4K3 w - - 0 1",
            Square::E4,
            Color::White,
        );
        assert_eq!(dests, vec![Square::D5, Square::F5]);
    }

    #[test]
    fn friendly_diagonal_is_not_a_capture() {
        let dests = destinations(
            "4k3/8/8/3NP3/4P3/8/8/4K3 w - - 0 1",
            Square::E4,
            Color::White,
        );
        assert!(dests.is_empty());
    }

    #[test]
    fn black_pawns_move_down() {
        let dests = destinations(
            "4k3/4p3/8/8/8/8/8/4K3 b - - 0 1",
            Square::E7,
            Color::Black,
        );
        assert_eq!(dests, vec![Square::E5, Square::E6]);
    }

    #[test]
    fn en_passant_target_is_a_destination() {
        // White pawn e5, black pawn d5 just double-pushed: d6 is capturable.
        let dests = destinations(
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
            Square::E5,
            Color::White,
        );
        assert_eq!(dests, vec![Square::D6, Square::E6]);
    }

    #[test]
    fn no_en_passant_without_target() {
        let dests = destinations(
            "4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1",
            Square::E5,
            Color::White,
        );
        assert_eq!(dests, vec![Square::E6]);
    }

    #[test]
    fn attack_pattern_is_diagonal_and_occupancy_free() {
        let mut out = Vec::new();
        attacks(Square::E4, Color::White, &mut out);
        out.sort_by_key(|sq| sq.index());
        assert_eq!(out, vec![Square::D5, Square::F5]);

        out.clear();
        attacks(Square::E4, Color::Black, &mut out);
        out.sort_by_key(|sq| sq.index());
        assert_eq!(out, vec![Square::D3, Square::F3]);

        // Edge files attack a single square.
        out.clear();
        attacks(Square::A2, Color::White, &mut out);
        assert_eq!(out, vec![Square::B3]);
    }
}
