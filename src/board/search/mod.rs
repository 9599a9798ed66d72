//! Game-tree search.
//!
//! Minimax with alpha-beta pruning and move ordering, driven by iterative
//! deepening under a soft wall-clock deadline. White is the maximizer.
//! Children are independent deep copies; the search never mutates its
//! argument. The deadline is cooperative: each node checks the clock
//! before expanding and short-circuits to the static evaluation, and the
//! root keeps the best move found so far.

mod move_order;

use std::time::{Duration, Instant};

use super::state::GameState;
use super::types::{Color, Move};

/// Score for delivering checkmate; mate found `d` plies from the leaf
/// scores `MATE_SCORE + d`, so nearer mates dominate.
pub const MATE_SCORE: i32 = 30000;

/// Sentinel bounds for the alpha-beta window, safely above any mate score.
const INFINITY: i32 = 1_000_000;

/// Default search depth
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default wall-clock budget per search
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Result of a completed (possibly deadline-truncated) search.
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// Best move found, `None` only when the position has no legal moves
    pub best_move: Option<Move>,
    /// Score of `best_move` in centipawns, White-positive
    pub score: i32,
    /// Deepest iteration that produced a result
    pub depth: u32,
    /// Nodes visited across all iterations
    pub nodes: u64,
    /// Wall-clock time spent
    pub duration: Duration,
}

/// Per-iteration progress report, handed to the caller's callback as each
/// deepening iteration finishes.
#[derive(Clone, Copy, Debug)]
pub struct IterationInfo {
    pub depth: u32,
    pub score: i32,
    pub best_move: Move,
    pub nodes: u64,
    pub elapsed: Duration,
}

/// The search engine: a depth bound and a wall-clock budget.
#[derive(Clone, Copy, Debug)]
pub struct Engine {
    pub max_depth: u32,
    pub time_limit: Duration,
}

impl Default for Engine {
    fn default() -> Self {
        Engine {
            max_depth: DEFAULT_MAX_DEPTH,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Engine::default()
    }

    /// Set the search depth, clamped to 1..=10.
    pub fn set_depth(&mut self, depth: u32) {
        self.max_depth = depth.clamp(1, 10);
    }

    /// Search for the best move.
    #[must_use]
    pub fn search(&self, game: &GameState) -> SearchResult {
        self.search_with_info(game, |_| {})
    }

    /// Search for the best move, reporting each completed deepening
    /// iteration through `on_iteration`.
    pub fn search_with_info(
        &self,
        game: &GameState,
        mut on_iteration: impl FnMut(&IterationInfo),
    ) -> SearchResult {
        let mut ctx = SearchContext {
            start_time: Instant::now(),
            time_limit: self.time_limit,
            nodes: 0,
        };

        let moves = game.legal_moves();
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: 0,
                depth: 0,
                nodes: 0,
                duration: ctx.start_time.elapsed(),
            };
        }

        let maximizing = game.current_player() == Color::White;
        let mut best_move: Option<Move> = None;
        let mut best_score = 0;
        let mut best_depth = 0;

        // The first iteration always runs to completion of at least one
        // root move, so an expired budget still yields a playable move.
        for depth in 1..=self.max_depth {
            if depth > 1 && ctx.out_of_time() {
                break;
            }

            let mut ordered = ctx.order_moves(game, &moves);
            // Try the previous iteration's best move first so that a
            // deadline-truncated iteration still starts from the strongest
            // known candidate.
            if let Some(prev_best) = best_move {
                if let Some(pos) = ordered.iter().position(|m| *m == prev_best) {
                    ordered[..=pos].rotate_right(1);
                }
            }

            let mut iter_best: Option<Move> = None;
            let mut iter_score = if maximizing { -INFINITY } else { INFINITY };
            let mut alpha = -INFINITY;
            let mut beta = INFINITY;
            let mut truncated = false;

            for mv in &ordered {
                let mut child = game.clone();
                child.apply_legal(*mv);
                let score = ctx.alphabeta(&child, depth - 1, alpha, beta, !maximizing);

                if maximizing {
                    if iter_best.is_none() || score > iter_score {
                        iter_score = score;
                        iter_best = Some(*mv);
                    }
                    alpha = alpha.max(score);
                } else {
                    if iter_best.is_none() || score < iter_score {
                        iter_score = score;
                        iter_best = Some(*mv);
                    }
                    beta = beta.min(score);
                }

                if ctx.out_of_time() {
                    truncated = true;
                    break;
                }
            }

            if let Some(mv) = iter_best {
                best_move = Some(mv);
                best_score = iter_score;
                best_depth = depth;
                if !truncated {
                    on_iteration(&IterationInfo {
                        depth,
                        score: iter_score,
                        best_move: mv,
                        nodes: ctx.nodes,
                        elapsed: ctx.start_time.elapsed(),
                    });
                }
            }

            if truncated {
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            depth: best_depth,
            nodes: ctx.nodes,
            duration: ctx.start_time.elapsed(),
        }
    }
}

/// Mutable bookkeeping for one search: the clock and the node counter.
pub(crate) struct SearchContext {
    start_time: Instant,
    time_limit: Duration,
    nodes: u64,
}

impl SearchContext {
    #[inline]
    fn out_of_time(&self) -> bool {
        self.start_time.elapsed() > self.time_limit
    }

    /// Alpha-beta over deep-copied children.
    fn alphabeta(
        &mut self,
        game: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        // The deadline may overrun by at most one node's expansion.
        if self.out_of_time() {
            return game.evaluate();
        }

        if depth == 0 {
            return game.evaluate();
        }

        let moves = game.legal_moves();
        if moves.is_empty() {
            if game.in_check() {
                // Mate: score by remaining depth so nearer mates win out
                return if maximizing {
                    -(MATE_SCORE + depth as i32)
                } else {
                    MATE_SCORE + depth as i32
                };
            }
            return 0;
        }

        let ordered = self.order_moves(game, &moves);

        if maximizing {
            let mut best = -INFINITY;
            for mv in ordered {
                let mut child = game.clone();
                child.apply_legal(mv);
                let score = self.alphabeta(&child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for mv in ordered {
                let mut child = game.clone();
                child.apply_legal(mv);
                let score = self.alphabeta(&child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
