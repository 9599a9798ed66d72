//! Forsyth-Edwards Notation parsing and serialization.

use std::str::FromStr;

use super::error::FenError;
use super::grid::Board;
use super::state::GameState;
use super::types::{CastleSide, CastlingRights, Color, Piece, Square};

impl GameState {
    /// Parse a position from FEN.
    ///
    /// The first four fields are required; the half-move clock and
    /// full-move number default to 0 and 1 when absent.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let rank = 7 - rank_idx;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { ch: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles { rank: rank_idx });
                    }
                    board.set(Square(rank, file), color, piece);
                    file += 1;
                }
            }
        }

        let current_player = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.set(Color::White, CastleSide::King),
                'Q' => castling_rights.set(Color::White, CastleSide::Queen),
                'k' => castling_rights.set(Color::Black, CastleSide::King),
                'q' => castling_rights.set(Color::Black, CastleSide::Queen),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { ch: c }),
            }
        }

        let en_passant_target = match parts[3] {
            "-" => None,
            square => Some(Square::from_str(square).map_err(|_| FenError::InvalidEnPassant {
                found: square.to_string(),
            })?),
        };

        let halfmove_clock = parts
            .get(4)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        let fullmove_number = parts
            .get(5)
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);

        Ok(GameState::from_parts(
            board,
            current_player,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
        ))
    }

    /// Serialize the position to FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.board().piece_at(Square(rank, file)) {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.current_player() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let rights = self.castling_rights();
        let mut any_right = false;
        for (flag, ch) in [
            (rights.has(Color::White, CastleSide::King), 'K'),
            (rights.has(Color::White, CastleSide::Queen), 'Q'),
            (rights.has(Color::Black, CastleSide::King), 'k'),
            (rights.has(Color::Black, CastleSide::Queen), 'q'),
        ] {
            if flag {
                fen.push(ch);
                any_right = true;
            }
        }
        if !any_right {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant_target() {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(
            " {} {}",
            self.halfmove_clock(),
            self.fullmove_number()
        ));
        fen
    }
}
