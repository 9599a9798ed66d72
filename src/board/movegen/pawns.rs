use super::super::grid::Board;
use super::super::types::{Move, Piece, Square};
use super::super::PROMOTION_PIECES;

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some((color, _)) = self.piece_at(from) else {
            return moves;
        };
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty_square(forward) {
                if forward.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::promotion(from, forward, promo, None));
                    }
                } else {
                    moves.push(Move::quiet(from, forward, Piece::Pawn));
                    // Double step from the home rank needs both squares empty.
                    // A double step can never land on the promotion rank.
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(double) = from.offset(2 * dir, 0) {
                            if self.is_empty_square(double) {
                                moves.push(Move::quiet(from, double, Piece::Pawn));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if let Some((target_color, victim)) = self.piece_at(target) {
                    if target_color != color {
                        if target.rank() == promotion_rank {
                            for promo in PROMOTION_PIECES {
                                moves.push(Move::promotion(from, target, promo, Some(victim)));
                            }
                        } else {
                            moves.push(Move::capture(from, target, Piece::Pawn, victim));
                        }
                    }
                }
            }
        }

        moves
    }
}
