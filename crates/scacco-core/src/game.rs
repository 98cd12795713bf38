//! The game session: the validated move interface handed to the
//! presentation-layer caller.

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen;
use crate::piece_kind::{PieceKind, Promotion};
use crate::square::Square;

/// Supplies the replacement piece when a pawn reaches the far rank.
///
/// The core calls this synchronously from [`Game::apply_move`] and blocks on
/// the answer; a UI would prompt the player here. The return type is the
/// closed [`Promotion`] enum, so an out-of-range choice cannot reach the
/// core. Any reject-and-re-ask loop belongs to the caller's input handling.
pub trait PromotionChooser {
    /// Choose the piece a pawn of `side` promotes to on `square`.
    fn choose_promotion(&mut self, side: Color, square: Square) -> Promotion;
}

/// A chooser that always promotes to a queen, for headless callers and tests.
pub struct AutoQueen;

impl PromotionChooser for AutoQueen {
    fn choose_promotion(&mut self, _side: Color, _square: Square) -> Promotion {
        Promotion::Queen
    }
}

/// Overall position summary for the side to move, queried once per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has a legal move and is not in check.
    InProgress,
    /// The side to move is in check but can escape it.
    Check(Color),
    /// The side to move is checkmated; the opponent has won.
    Checkmate(Color),
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

/// One chess game from the standard starting position to a terminal state.
///
/// The wrapped board is owned exclusively by the session and mutated only by
/// [`Game::apply_move`]; analysis of hypothetical continuations must work on
/// clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Start a new game: standard position, White to move, full castling
    /// rights, no en passant target.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
        }
    }

    /// Wrap an arbitrary position (e.g. parsed from FEN) as a session.
    pub fn from_board(board: Board) -> Game {
        Game { board }
    }

    /// Read access to the current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal destinations for the piece on `from`.
    ///
    /// Empty when `from` is vacant or holds a piece of the side not on move,
    /// so a caller can feed any clicked square straight through.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        movegen::legal_moves(&self.board, from)
    }

    /// Validate and commit a move, consulting `chooser` if it promotes.
    ///
    /// The move is re-validated here regardless of what the caller already
    /// checked; on any refusal the session is left untouched. The seven
    /// board effects (en passant removal, castling rook shift, promotion,
    /// rights and target bookkeeping, turn flip) land as one atomic
    /// transition with no observable intermediate state.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut dyn PromotionChooser,
    ) -> Result<(), MoveError> {
        let piece = self
            .board
            .piece_on(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if !piece.is(self.board.side_to_move()) {
            return Err(MoveError::NotYourPiece { square: from });
        }
        if !movegen::legal_moves(&self.board, from).contains(&to) {
            debug!(%from, %to, "refused illegal move");
            return Err(MoveError::IllegalMove { from, to });
        }

        let promotion = if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank()
        {
            chooser.choose_promotion(piece.color, to)
        } else {
            // Ignored by the applier for non-promoting moves.
            Promotion::Queen
        };

        self.board = self.board.apply_unchecked(from, to, promotion);
        debug!(%from, %to, side = %piece.color, "committed move");
        Ok(())
    }

    /// Whether `side`'s king is currently attacked.
    pub fn is_in_check(&self, side: Color) -> bool {
        self.board.is_in_check(side)
    }

    /// Whether `side` is checkmated.
    pub fn is_checkmate(&self, side: Color) -> bool {
        self.board.is_checkmate(side)
    }

    /// Whether `side` is stalemated.
    pub fn is_stalemate(&self, side: Color) -> bool {
        self.board.is_stalemate(side)
    }

    /// Summarize the position for the side to move.
    pub fn status(&self) -> GameStatus {
        let side = self.board.side_to_move();
        if self.board.is_in_check(side) {
            if self.board.is_checkmate(side) {
                GameStatus::Checkmate(side)
            } else {
                GameStatus::Check(side)
            }
        } else if self.board.is_stalemate(side) {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
