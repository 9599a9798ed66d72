use super::super::attacks::KING_OFFSETS;
use super::super::grid::Board;
use super::super::types::{Move, Piece, Square};

impl Board {
    pub(crate) fn king_moves(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some((color, _)) = self.piece_at(from) else {
            return moves;
        };

        // Each destination is validated by the offset step; the source is
        // already known to be on the board.
        for (dr, df) in KING_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                if self.piece_at(to).is_none_or(|(c, _)| c != color) {
                    moves.push(self.step_move(from, to, Piece::King));
                }
            }
        }
        moves
    }
}
