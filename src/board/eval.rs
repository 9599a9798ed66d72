//! Static position evaluation.
//!
//! Returns a signed centipawn score, positive for White. Composition:
//! terminal shortcut, material + piece-square tables, pseudo-legal
//! mobility, castling-rights bonus, and middle-game king safety. A
//! game-phase switch flips the king between its middlegame and endgame
//! tables.

use super::attacks::KING_OFFSETS;
use super::pst::piece_square_value;
use super::search::MATE_SCORE;
use super::state::GameState;
use super::types::{Color, Piece};

/// Bonus per pseudo-legal move of surplus mobility
const MOBILITY_WEIGHT: i32 = 10;

/// Bonus for retaining at least one castling right
const CASTLING_RIGHTS_BONUS: i32 = 20;

/// Per-square penalty for an attacked square next to the king
const KING_RING_ATTACKED: i32 = -10;

/// Per-square bonus for a friendly piece next to the king
const KING_RING_DEFENDED: i32 = 5;

/// Non-king material at the game start, for phase scaling
const STARTING_MATERIAL: i32 = 7800;

impl GameState {
    /// Evaluate the position in centipawns, White-positive.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        // Terminal shortcut: mate and stalemate dominate every heuristic.
        if self.legal_moves().is_empty() {
            if self.in_check() {
                return match self.current_player() {
                    Color::White => -MATE_SCORE,
                    Color::Black => MATE_SCORE,
                };
            }
            return 0;
        }

        let endgame = self.is_endgame();
        let mut score = 0;

        for (sq, color, piece) in self.board().occupied() {
            let value = piece.value() + piece_square_value(piece, color, sq, endgame);
            score += color.sign() * value;
        }

        let white_mobility = self.board().pseudo_moves(Color::White).len() as i32;
        let black_mobility = self.board().pseudo_moves(Color::Black).len() as i32;
        score += (white_mobility - black_mobility) * MOBILITY_WEIGHT;

        if self.castling_rights().any(Color::White) {
            score += CASTLING_RIGHTS_BONUS;
        }
        if self.castling_rights().any(Color::Black) {
            score -= CASTLING_RIGHTS_BONUS;
        }

        if !endgame {
            score += self.king_safety(Color::White) - self.king_safety(Color::Black);
        }

        score
    }

    /// King-ring safety term: attacked squares next to the king count
    /// against, friendly occupants count for. Middle-game only.
    fn king_safety(&self, color: Color) -> i32 {
        let Some(king_sq) = self.board().find_king(color) else {
            debug_assert!(false, "no {color} king on the board");
            return 0;
        };

        let enemy = color.opponent();
        let mut safety = 0;
        for (dr, df) in KING_OFFSETS {
            if let Some(sq) = king_sq.offset(dr, df) {
                if self.board().is_square_attacked(sq, enemy) {
                    safety += KING_RING_ATTACKED;
                }
                if self.board().piece_at(sq).is_some_and(|(c, _)| c == color) {
                    safety += KING_RING_DEFENDED;
                }
            }
        }
        safety
    }

    /// Endgame test: no queens with few pieces, or very few pieces overall.
    ///
    /// Deliberately global rather than per-side; both kings switch tables
    /// together.
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        let mut pieces = 0;
        let mut queens = 0;
        for (_, _, piece) in self.board().occupied() {
            match piece {
                Piece::King => {}
                Piece::Queen => {
                    pieces += 1;
                    queens += 1;
                }
                _ => pieces += 1,
            }
        }
        (queens == 0 && pieces < 12) || pieces < 8
    }

    /// Continuous game phase: 1.0 at the starting material count, 0.0 with
    /// bare kings. Diagnostic only; evaluation uses `is_endgame`.
    #[must_use]
    pub fn game_phase(&self) -> f64 {
        let total: i32 = self
            .board()
            .occupied()
            .filter(|&(_, _, piece)| piece != Piece::King)
            .map(|(_, _, piece)| piece.value())
            .sum();
        (f64::from(total) / f64::from(STARTING_MATERIAL)).clamp(0.0, 1.0)
    }

    /// Non-king material for `color`, in centipawns.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.board()
            .occupied()
            .filter(|&(_, c, piece)| c == color && piece != Piece::King)
            .map(|(_, _, piece)| piece.value())
            .sum()
    }

}
