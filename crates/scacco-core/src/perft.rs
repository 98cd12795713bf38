//! Perft: leaf-node counting over the legal-move enumeration.
//!
//! The reference counts below assume one move per promotion square, so they
//! are only compared at horizons no promotion can reach: here the promotion
//! piece is an external choice, not part of the move.

use crate::board::Board;
use crate::movegen::all_legal_moves;
use crate::piece_kind::Promotion;

/// Count the leaf nodes reachable in exactly `depth` half-moves.
///
/// Depth 0 is the current position (1 node); depth 1 is bulk-counted from
/// the move list without applying anything.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for (from, to) in moves {
        let child = board.apply_unchecked(from, to, Promotion::Queen);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Perft with a per-move breakdown, sorted by move text. Useful when a total
/// disagrees with a reference count and the offending branch must be found.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = all_legal_moves(board)
        .into_iter()
        .map(|(from, to)| {
            let child = board.apply_unchecked(from, to, Promotion::Queen);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (format!("{from}{to}"), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::{divide, perft};
    use crate::board::Board;

    // --- Starting position (no promotion before depth 6) ---

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Board::starting_position(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Board::starting_position(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Board::starting_position(), 3), 8_902);
    }

    #[test]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Board::starting_position(), 4), 197_281);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_5() {
        assert_eq!(perft(&Board::starting_position(), 5), 4_865_609);
    }

    // --- Kiwipete: castling- and discovery-heavy (promotions from depth 4) ---

    fn kiwipete() -> Board {
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse()
            .unwrap()
    }

    #[test]
    fn perft_kiwipete_depth_1() {
        assert_eq!(perft(&kiwipete(), 1), 48);
    }

    #[test]
    fn perft_kiwipete_depth_2() {
        assert_eq!(perft(&kiwipete(), 2), 2_039);
    }

    #[test]
    fn perft_kiwipete_depth_3() {
        assert_eq!(perft(&kiwipete(), 3), 97_862);
    }

    // --- Rook endgame rich in en passant and pins (promotions from depth 6) ---

    fn rook_endgame() -> Board {
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".parse().unwrap()
    }

    #[test]
    fn perft_rook_endgame_depth_1() {
        assert_eq!(perft(&rook_endgame(), 1), 14);
    }

    #[test]
    fn perft_rook_endgame_depth_2() {
        assert_eq!(perft(&rook_endgame(), 2), 191);
    }

    #[test]
    fn perft_rook_endgame_depth_3() {
        assert_eq!(perft(&rook_endgame(), 3), 2_812);
    }

    #[test]
    fn perft_rook_endgame_depth_4() {
        assert_eq!(perft(&rook_endgame(), 4), 43_238);
    }

    #[test]
    #[ignore] // slow
    fn perft_rook_endgame_depth_5() {
        assert_eq!(perft(&rook_endgame(), 5), 674_624);
    }

    // --- divide ---

    #[test]
    fn divide_startpos_depth_1() {
        let results = divide(&Board::starting_position(), 1);
        assert_eq!(results.len(), 20);
        for (_, count) in &results {
            assert_eq!(*count, 1);
        }
        assert!(results.iter().any(|(mv, _)| mv == "e2e4"));
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::starting_position();
        let total: u64 = divide(&board, 2).into_iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&board, 2));
    }

    #[test]
    fn perft_depth_0() {
        assert_eq!(perft(&Board::starting_position(), 0), 1);
    }
}
