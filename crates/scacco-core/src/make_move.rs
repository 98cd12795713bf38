//! Move execution via copy-make: the atomic seven-effect state transition.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::{PieceKind, Promotion};
use crate::square::Square;

impl Board {
    /// Apply `from`→`to` and return the resulting board. Copy-make: `self`
    /// is never modified.
    ///
    /// No legality checking happens here; the caller is expected to have
    /// vetted the move (the validated path is
    /// [`Game::apply_move`](crate::game::Game::apply_move)). The legality
    /// probe also runs through this function so that secondary board effects
    /// (the en passant capture removal, the castling rook shift) are part of
    /// what it observes. An empty source square returns the board unchanged.
    ///
    /// `promotion` is consulted only when the move pushes a pawn onto its
    /// promotion rank.
    #[must_use]
    pub fn apply_unchecked(&self, from: Square, to: Square, promotion: Promotion) -> Board {
        let mut board = *self;
        let Some(piece) = board.piece_on(from) else {
            return board;
        };
        let side = piece.color;
        let is_pawn = piece.kind == PieceKind::Pawn;

        // En passant: the captured pawn stands beside the mover: same rank
        // as the source, same file as the destination.
        let en_passant_capture = is_pawn && board.en_passant() == Some(to);
        if en_passant_capture {
            board.set(Square::new(to.file(), from.rank()), None);
        }

        let is_capture = board.piece_on(to).is_some() || en_passant_capture;

        // Castling is the king stepping two files; the rook hops to the
        // square the king crossed. Everything else is a plain displacement.
        if piece.kind == PieceKind::King && from.file().abs_diff(to.file()) == 2 {
            let rank = from.rank();
            let (rook_from, rook_to) = if to.file() > from.file() {
                (Square::new(7, rank), Square::new(5, rank))
            } else {
                (Square::new(0, rank), Square::new(3, rank))
            };
            let rook = board.piece_on(rook_from);
            board.set(rook_from, None);
            board.set(rook_to, rook);
        }
        board.set(from, None);
        board.set(to, Some(piece));

        // A pawn reaching the far rank is replaced by the chosen piece.
        if is_pawn && to.rank() == side.promotion_rank() {
            board.set(to, Some(Piece::new(promotion.kind(), side)));
        }

        // Rights die with any move that leaves or lands on a king or rook
        // home square, including a capture of an unmoved rook.
        let rights = board
            .castling()
            .without(CastleRights::revoked_by(from))
            .without(CastleRights::revoked_by(to));
        board.set_castling(rights);

        // Only a double push leaves an en passant target, on the skipped
        // square; every other move clears it.
        let target = if is_pawn && from.rank().abs_diff(to.rank()) == 2 {
            Some(Square::new(from.file(), (from.rank() + to.rank()) / 2))
        } else {
            None
        };
        board.set_en_passant(target);

        if is_pawn || is_capture {
            board.set_halfmove_clock(0);
        } else {
            board.set_halfmove_clock(board.halfmove_clock() + 1);
        }
        if side == Color::Black {
            board.set_fullmove_number(board.fullmove_number() + 1);
        }
        board.set_side_to_move(side.opponent());

        board
    }
}
