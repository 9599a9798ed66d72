//! Pseudo-legal move generation.
//!
//! Pure geometry over the grid: moves obey piece movement and capture rules
//! but may leave the mover's own king in check. Castling and en passant are
//! not generated here; both need game state beyond the grid.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderKind;
use super::grid::Board;
use super::types::{Color, Move, Piece, Square};

impl Board {
    /// Pseudo-legal moves for whatever piece stands on `from`.
    #[must_use]
    pub fn pseudo_moves_from(&self, from: Square) -> Vec<Move> {
        match self.piece_at(from) {
            None => Vec::new(),
            Some((_, Piece::Pawn)) => self.pawn_moves(from),
            Some((_, Piece::Knight)) => self.knight_moves(from),
            Some((_, Piece::Bishop)) => self.slider_moves(from, SliderKind::Bishop),
            Some((_, Piece::Rook)) => self.slider_moves(from, SliderKind::Rook),
            Some((_, Piece::Queen)) => self.slider_moves(from, SliderKind::Queen),
            Some((_, Piece::King)) => self.king_moves(from),
        }
    }

    /// All pseudo-legal moves for `color`.
    #[must_use]
    pub fn pseudo_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if self.piece_at(from).is_some_and(|(c, _)| c == color) {
                    moves.extend(self.pseudo_moves_from(from));
                }
            }
        }
        moves
    }

    /// Build a plain move or a capture depending on the destination.
    pub(crate) fn step_move(&self, from: Square, to: Square, piece: Piece) -> Move {
        match self.piece_on(to) {
            Some(victim) => Move::capture(from, to, piece, victim),
            None => Move::quiet(from, to, piece),
        }
    }
}
