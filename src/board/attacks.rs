//! Square-attacked and check queries.
//!
//! Everything here is a pure function of the grid: inverse pawn geometry,
//! knight and king offsets, and ray walks that key off the first occupied
//! square in each direction. The query square's own occupant never blocks
//! its attackers.

use super::grid::Board;
use super::types::{Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Is `square` attacked by any piece of `attacker`?
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // Pawns attack diagonally toward their advance direction, so an
        // attacking pawn sits one rank behind the square, one file aside.
        let dir = attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(sq) = square.offset(-dir, df) {
                if self.piece_at(sq) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(sq) = square.offset(dr, df) {
                if self.piece_at(sq) == Some((attacker, Piece::Knight)) {
                    return true;
                }
            }
        }

        for (dr, df) in KING_OFFSETS {
            if let Some(sq) = square.offset(dr, df) {
                if self.piece_at(sq) == Some((attacker, Piece::King)) {
                    return true;
                }
            }
        }

        // Sliders: the first occupied square along each ray decides.
        if self.ray_attacked(square, attacker, &ROOK_DIRECTIONS, Piece::Rook) {
            return true;
        }
        if self.ray_attacked(square, attacker, &BISHOP_DIRECTIONS, Piece::Bishop) {
            return true;
        }

        false
    }

    fn ray_attacked(
        &self,
        square: Square,
        attacker: Color,
        directions: &[(isize, isize)],
        slider: Piece,
    ) -> bool {
        for &(dr, df) in directions {
            let mut distance = 1;
            while let Some(sq) = square.offset(dr * distance, df * distance) {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if color == attacker && (piece == slider || piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                distance += 1;
            }
        }
        false
    }

    /// Is `color`'s king attacked?
    ///
    /// A missing king is an internal invariant violation; it reads as
    /// "not in check" so callers stay total.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            debug_assert!(false, "no {color} king on the board");
            false
        }
    }
}
