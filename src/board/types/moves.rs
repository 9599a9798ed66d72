//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece};
use super::square::Square;

/// An immutable move record.
///
/// A `Move` is a value: it carries everything needed to apply or score it
/// (mover kind, captured kind, promotion, special-move markers) and no
/// reference back to any board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    /// Source square
    pub from: Square,
    /// Destination square
    pub to: Square,
    /// Kind of the moving piece
    pub piece: Piece,
    /// Kind of the captured piece, if any (`Some(Pawn)` for en passant)
    pub captured: Option<Piece>,
    /// Promotion kind for pawn moves landing on the last rank
    pub promotion: Option<Piece>,
    /// En passant capture marker
    pub en_passant: bool,
    /// Castle marker with the wing
    pub castle: Option<CastleSide>,
}

impl Move {
    /// A plain non-capturing move.
    #[must_use]
    pub const fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            en_passant: false,
            castle: None,
        }
    }

    /// A capture of `victim`.
    #[must_use]
    pub const fn capture(from: Square, to: Square, piece: Piece, victim: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: Some(victim),
            promotion: None,
            en_passant: false,
            castle: None,
        }
    }

    /// A pawn promotion, capturing `victim` if the landing square was occupied.
    #[must_use]
    pub const fn promotion(
        from: Square,
        to: Square,
        promotion: Piece,
        victim: Option<Piece>,
    ) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            captured: victim,
            promotion: Some(promotion),
            en_passant: false,
            castle: None,
        }
    }

    /// An en passant capture onto the target square.
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            piece: Piece::Pawn,
            captured: Some(Piece::Pawn),
            promotion: None,
            en_passant: true,
            castle: None,
        }
    }

    /// A castle by `color` on `side`. The rook's half of the move is applied
    /// by the game state, not encoded here.
    #[must_use]
    pub const fn castle(color: Color, side: CastleSide) -> Self {
        let rank = color.back_rank();
        Move {
            from: Square(rank, 4),
            to: Square(rank, side.king_target_file()),
            piece: Piece::King,
            captured: None,
            promotion: None,
            en_passant: false,
            castle: Some(side),
        }
    }

    /// True if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// True if this move is castling (either wing)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.castle.is_some()
    }
}

impl fmt::Display for Move {
    /// Long algebraic coordinates, with the promotion letter appended for
    /// promotions (`e2e4`, `e7e8q`). Castles render as the king move
    /// (`e1g1`), which parses back to the same move.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain_and_promotion() {
        let mv = Move::quiet(Square(1, 4), Square(3, 4), Piece::Pawn);
        assert_eq!(mv.to_string(), "e2e4");

        let promo = Move::promotion(Square(6, 0), Square(7, 0), Piece::Queen, None);
        assert_eq!(promo.to_string(), "a7a8q");
    }

    #[test]
    fn test_castle_coordinates() {
        let wk = Move::castle(Color::White, CastleSide::King);
        assert_eq!(wk.from, Square(0, 4));
        assert_eq!(wk.to, Square(0, 6));
        assert_eq!(wk.to_string(), "e1g1");

        let bq = Move::castle(Color::Black, CastleSide::Queen);
        assert_eq!(bq.from, Square(7, 4));
        assert_eq!(bq.to, Square(7, 2));
        assert_eq!(bq.to_string(), "e8c8");
    }

    #[test]
    fn test_capture_flags() {
        let mv = Move::capture(Square(3, 4), Square(4, 3), Piece::Pawn, Piece::Knight);
        assert!(mv.is_capture());
        assert_eq!(mv.captured, Some(Piece::Knight));

        let ep = Move::en_passant(Square(4, 4), Square(5, 3));
        assert!(ep.is_capture());
        assert!(ep.en_passant);
        assert_eq!(ep.captured, Some(Piece::Pawn));
    }
}
