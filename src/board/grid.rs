//! Mailbox board: an 8x8 grid of piece slots.
//!
//! `Board` is a pure grid. It knows how to store pieces, relocate them, and
//! find kings; it knows nothing about turn order, castling rights, or en
//! passant. The special-move side effects (rook hop, captured-pawn removal)
//! belong to `GameState`.

use super::types::{Color, Move, Piece, Square};

/// The 8x8 piece grid. One byte-pair per square; the whole board is a
/// plain value that copies cheaply.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// An empty grid.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set(Square(0, file), Color::White, *piece);
            board.set(Square(1, file), Color::White, Piece::Pawn);
            board.set(Square(6, file), Color::Black, Piece::Pawn);
            board.set(Square(7, file), Color::Black, *piece);
        }
        board
    }

    /// Piece on a square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    /// Piece at signed coordinates. Total: any out-of-range coordinate
    /// reads as an empty square, which keeps offset probes branch-free.
    #[inline]
    #[must_use]
    pub fn at(&self, rank: isize, file: isize) -> Option<(Color, Piece)> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            self.squares[rank as usize][file as usize]
        } else {
            None
        }
    }

    /// Get just the piece kind on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    pub(crate) fn set(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.rank()][sq.file()] = Some((color, piece));
    }

    pub(crate) fn clear(&mut self, sq: Square) {
        self.squares[sq.rank()][sq.file()] = None;
    }

    /// Locate a color's king.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|&(_, c, piece)| c == color && piece == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Relocate the moving piece: clear the source, write the mover (or its
    /// promotion kind) to the destination.
    ///
    /// Deliberately piece-agnostic: the rook half of a castle and the
    /// captured-pawn removal of en passant are applied by the caller.
    pub fn apply_raw(&mut self, mv: &Move) {
        if let Some((color, piece)) = self.piece_at(mv.from) {
            let kind = mv.promotion.unwrap_or(piece);
            self.clear(mv.from);
            self.set(mv.to, color, kind);
        }
    }

    /// Iterate over all occupied squares.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        (0..8).flat_map(move |rank| {
            (0..8).filter_map(move |file| {
                let sq = Square(rank, file);
                self.piece_at(sq).map(|(color, piece)| (sq, color, piece))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting();
        assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_at(Square(1, 0)), Some((Color::White, Piece::Pawn)));
        assert_eq!(board.piece_at(Square(6, 7)), Some((Color::Black, Piece::Pawn)));
        assert!(board.is_empty_square(Square(3, 3)));
        assert_eq!(board.occupied().count(), 32);
    }

    #[test]
    fn test_out_of_range_reads_as_empty() {
        let board = Board::starting();
        assert_eq!(board.at(-1, 0), None);
        assert_eq!(board.at(0, 8), None);
        assert_eq!(board.at(100, -100), None);
        assert_eq!(board.at(0, 0), Some((Color::White, Piece::Rook)));
    }

    #[test]
    fn test_find_king() {
        let board = Board::starting();
        assert_eq!(board.find_king(Color::White), Some(Square(0, 4)));
        assert_eq!(board.find_king(Color::Black), Some(Square(7, 4)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_apply_raw_moves_piece() {
        let mut board = Board::starting();
        let mv = Move::quiet(Square(1, 4), Square(3, 4), Piece::Pawn);
        board.apply_raw(&mv);
        assert!(board.is_empty_square(Square(1, 4)));
        assert_eq!(board.piece_at(Square(3, 4)), Some((Color::White, Piece::Pawn)));
    }

    #[test]
    fn test_apply_raw_honors_promotion() {
        let mut board = Board::empty();
        board.set(Square(6, 0), Color::White, Piece::Pawn);
        let mv = Move::promotion(Square(6, 0), Square(7, 0), Piece::Knight, None);
        board.apply_raw(&mv);
        assert_eq!(board.piece_at(Square(7, 0)), Some((Color::White, Piece::Knight)));
    }

    #[test]
    fn test_apply_raw_ignores_rook_and_pawn_side_effects() {
        // apply_raw on a castle only moves the king; the rook stays put
        let mut board = Board::empty();
        board.set(Square(0, 4), Color::White, Piece::King);
        board.set(Square(0, 7), Color::White, Piece::Rook);
        let mv = Move::castle(Color::White, crate::board::CastleSide::King);
        board.apply_raw(&mv);
        assert_eq!(board.piece_at(Square(0, 6)), Some((Color::White, Piece::King)));
        assert_eq!(board.piece_at(Square(0, 7)), Some((Color::White, Piece::Rook)));
    }
}
