use super::super::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::grid::Board;
use super::super::types::{Move, Piece, Square};

/// Kind of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderKind {
    Bishop,
    Rook,
    Queen,
}

impl SliderKind {
    fn piece(self) -> Piece {
        match self {
            SliderKind::Bishop => Piece::Bishop,
            SliderKind::Rook => Piece::Rook,
            SliderKind::Queen => Piece::Queen,
        }
    }

    fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderKind::Bishop => &BISHOP_DIRECTIONS,
            SliderKind::Rook => &ROOK_DIRECTIONS,
            SliderKind::Queen => &[
                (-1, 0),
                (1, 0),
                (0, -1),
                (0, 1),
                (-1, -1),
                (-1, 1),
                (1, -1),
                (1, 1),
            ],
        }
    }
}

impl Board {
    pub(crate) fn slider_moves(&self, from: Square, kind: SliderKind) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some((color, _)) = self.piece_at(from) else {
            return moves;
        };
        let piece = kind.piece();

        for &(dr, df) in kind.directions() {
            let mut distance = 1;
            while let Some(to) = from.offset(dr * distance, df * distance) {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to, piece)),
                    Some((c, victim)) => {
                        if c != color {
                            moves.push(Move::capture(from, to, piece, victim));
                        }
                        break;
                    }
                }
                distance += 1;
            }
        }
        moves
    }
}
