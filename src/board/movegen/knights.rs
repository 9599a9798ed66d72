use super::super::attacks::KNIGHT_OFFSETS;
use super::super::grid::Board;
use super::super::types::{Move, Piece, Square};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some((color, _)) = self.piece_at(from) else {
            return moves;
        };

        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(dr, df) {
                if self.piece_at(to).is_none_or(|(c, _)| c != color) {
                    moves.push(self.step_move(from, to, Piece::Knight));
                }
            }
        }
        moves
    }
}
