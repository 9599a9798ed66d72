//! Move ordering for better pruning.

use super::super::state::GameState;
use super::super::types::Move;
use super::SearchContext;

/// Bonus for a move that gives check
const CHECK_BONUS: i32 = 50;

/// Bonus for castling
const CASTLE_BONUS: i32 = 40;

/// Penalty for landing on a square the opponent attacks
const ATTACKED_DESTINATION_PENALTY: i32 = -10;

impl SearchContext {
    /// Sort `moves` best-first by the ordering heuristic.
    pub(crate) fn order_moves(&self, game: &GameState, moves: &[Move]) -> Vec<Move> {
        let mut scored: Vec<(i32, Move)> =
            moves.iter().map(|mv| (score_move(game, *mv), *mv)).collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, mv)| mv).collect()
    }
}

/// Heuristic ordering score: MVV-LVA for captures, promotion value,
/// check and castle bonuses, and a small penalty for stepping onto an
/// attacked square (judged in the pre-move position).
fn score_move(game: &GameState, mv: Move) -> i32 {
    let mut score = 0;

    if let Some(victim) = mv.captured {
        score += victim.value() - mv.piece.value() / 10;
    }

    if let Some(promo) = mv.promotion {
        score += promo.value();
    }

    // Giving check is tested the honest way: apply on a copy and ask.
    let mut child = game.clone();
    child.apply_legal(mv);
    if child.in_check() {
        score += CHECK_BONUS;
    }

    if mv.is_castling() {
        score += CASTLE_BONUS;
    }

    if game
        .board()
        .is_square_attacked(mv.to, game.current_player().opponent())
    {
        score += ATTACKED_DESTINATION_PENALTY;
    }

    score
}
