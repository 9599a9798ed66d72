//! Game state: the grid plus everything the rules need beyond geometry.
//!
//! `GameState` owns the board, side to move, castling rights, en-passant
//! target, clocks, and move history. It is the single entry point for
//! legality and move application; the search clones it per tree edge and
//! never mutates a shared instance.

use super::grid::Board;
use super::notation::{parse_move, ParsedMove};
use super::types::{CastleSide, CastlingRights, Color, Move, Piece, Square};
use super::MoveParseError;

/// Terminal-state classification for a position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    /// One hundred plies without a pawn move or capture
    FiftyMoveDraw,
}

/// A complete game position with history.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_player: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    move_history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    /// A new game in the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::starting(),
            current_player: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_history: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        current_player: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        GameState {
            board,
            current_player,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            move_history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// Is the side to move in check?
    #[inline]
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.board.is_in_check(self.current_player)
    }

    // -----------------------------------------------------------------
    // Legal move generation
    // -----------------------------------------------------------------

    /// All legal moves for the side to move.
    ///
    /// Pseudo-legal geometry plus castling and en-passant candidates, with
    /// the whole list filtered through the own-king-in-check test.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = self.board.pseudo_moves(self.current_player);
        self.push_castling_candidates(&mut moves);
        self.push_en_passant_candidates(&mut moves);
        moves.retain(|mv| !self.leaves_king_in_check(mv));
        moves
    }

    fn push_castling_candidates(&self, moves: &mut Vec<Move>) {
        for side in [CastleSide::King, CastleSide::Queen] {
            if self.can_castle(side) {
                moves.push(Move::castle(self.current_player, side));
            }
        }
    }

    /// The full castle test: right intact, rook at home, no pieces between,
    /// king neither in check, crossing, nor landing on an attacked square.
    fn can_castle(&self, side: CastleSide) -> bool {
        let color = self.current_player;
        if !self.castling_rights.has(color, side) {
            return false;
        }

        let rank = color.back_rank();
        if self.board.piece_at(Square(rank, side.rook_from_file())) != Some((color, Piece::Rook)) {
            return false;
        }

        for &file in side.between_files() {
            if !self.board.is_empty_square(Square(rank, file)) {
                return false;
            }
        }

        let enemy = color.opponent();
        for &file in side.king_path_files() {
            if self.board.is_square_attacked(Square(rank, file), enemy) {
                return false;
            }
        }

        true
    }

    fn push_en_passant_candidates(&self, moves: &mut Vec<Move>) {
        let Some(target) = self.en_passant_target else {
            return;
        };
        let dir = self.current_player.pawn_direction();
        // A capturing pawn stands one rank short of the target, one file aside.
        for df in [-1, 1] {
            if let Some(from) = target.offset(-dir, df) {
                if self.board.piece_at(from) == Some((self.current_player, Piece::Pawn)) {
                    moves.push(Move::en_passant(from, target));
                }
            }
        }
    }

    /// Would playing `mv` leave the mover's king attacked? Tested on a
    /// throwaway copy of the grid with the full physical move applied.
    fn leaves_king_in_check(&self, mv: &Move) -> bool {
        let mut board = self.board.clone();
        apply_physical(&mut board, mv, self.current_player);
        board.is_in_check(self.current_player)
    }

    // -----------------------------------------------------------------
    // Move application
    // -----------------------------------------------------------------

    /// Parse a move string (long algebraic or castle token) and apply it.
    pub fn apply_text(&mut self, input: &str) -> Result<Move, MoveParseError> {
        let parsed = parse_move(input)?;
        self.apply_parsed(&parsed)
    }

    /// Apply a parsed move after validating it against the legal-move list.
    pub fn apply_parsed(&mut self, parsed: &ParsedMove) -> Result<Move, MoveParseError> {
        let matched = match *parsed {
            ParsedMove::Castle(side) => self
                .legal_moves()
                .into_iter()
                .find(|m| m.castle == Some(side)),
            ParsedMove::Coords {
                from,
                to,
                promotion,
            } => self.find_legal(from, to, promotion),
        };

        match matched {
            Some(mv) => {
                self.apply_legal(mv);
                Ok(mv)
            }
            None => Err(MoveParseError::IllegalMove {
                notation: parsed.to_string(),
            }),
        }
    }

    /// Validate `mv` against the legal-move list and apply it.
    ///
    /// Matching is by source, destination, and promotion kind; the matched
    /// legal move replaces the caller's, so flags like en passant and
    /// castling are always the generator's. On failure the state is
    /// unchanged.
    pub fn try_apply(&mut self, mv: Move) -> Result<Move, MoveParseError> {
        match self.find_legal(mv.from, mv.to, mv.promotion) {
            Some(matched) => {
                self.apply_legal(matched);
                Ok(matched)
            }
            None => Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            }),
        }
    }

    fn find_legal(&self, from: Square, to: Square, promotion: Option<Piece>) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promotion == promotion)
    }

    /// Apply a move known to come from the legal-move list.
    pub(crate) fn apply_legal(&mut self, mv: Move) {
        let mover = self.current_player;
        let enemy = mover.opponent();

        // Castling rights: a king move drops both, a rook leaving its
        // corner drops one, and capturing a rook in its corner drops the
        // opponent's matching right.
        if mv.piece == Piece::King {
            self.castling_rights.remove_both(mover);
        }
        if mv.piece == Piece::Rook {
            if mv.from == Square(mover.back_rank(), 0) {
                self.castling_rights.remove(mover, CastleSide::Queen);
            } else if mv.from == Square(mover.back_rank(), 7) {
                self.castling_rights.remove(mover, CastleSide::King);
            }
        }
        if mv.captured == Some(Piece::Rook) && !mv.en_passant {
            if mv.to == Square(enemy.back_rank(), 0) {
                self.castling_rights.remove(enemy, CastleSide::Queen);
            } else if mv.to == Square(enemy.back_rank(), 7) {
                self.castling_rights.remove(enemy, CastleSide::King);
            }
        }

        // En-passant target: set only on a two-rank pawn advance, to the
        // square the pawn skipped; cleared by everything else.
        self.en_passant_target =
            if mv.piece == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
                Some(Square(
                    usize::midpoint(mv.from.rank(), mv.to.rank()),
                    mv.from.file(),
                ))
            } else {
                None
            };

        if mv.piece == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        apply_physical(&mut self.board, &mv, mover);

        self.move_history.push(mv);
        self.current_player = enemy;
        if self.current_player == Color::White {
            self.fullmove_number += 1;
        }
    }

    // -----------------------------------------------------------------
    // Terminal detection
    // -----------------------------------------------------------------

    /// Classify the position for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.legal_moves().is_empty() {
            if self.in_check() {
                GameStatus::Checkmate {
                    winner: self.current_player.opponent(),
                }
            } else {
                GameStatus::Stalemate
            }
        } else if self.halfmove_clock >= 100 {
            GameStatus::FiftyMoveDraw
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        matches!(self.status(), GameStatus::Checkmate { .. })
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Count move paths of length `depth`. Used by tests and benchmarks.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let mut child = self.clone();
            child.apply_legal(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }
}

/// Perform the physical board mutation for a move: the raw relocation plus
/// the rook hop for castles and the captured-pawn removal for en passant.
fn apply_physical(board: &mut Board, mv: &Move, mover: Color) {
    board.apply_raw(mv);
    if let Some(side) = mv.castle {
        let rank = mv.from.rank();
        let rook_mv = Move::quiet(
            Square(rank, side.rook_from_file()),
            Square(rank, side.rook_to_file()),
            Piece::Rook,
        );
        board.apply_raw(&rook_mv);
    } else if mv.en_passant {
        // The captured pawn sits one rank behind the destination, on the
        // destination file.
        if let Some(captured) = mv.to.offset(-mover.pawn_direction(), 0) {
            board.clear(captured);
        }
    }
}
