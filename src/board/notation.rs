//! Long-algebraic move notation.
//!
//! Accepted forms: `e2e4`, `e7e8q` (promotion letter `q|r|n|b`,
//! case-insensitive), and the castle tokens `O-O`/`0-0` and
//! `O-O-O`/`0-0-0`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::MoveParseError;
use super::types::{CastleSide, Piece, Square};

static COORD_MOVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-h][1-8])([a-h][1-8])([a-zA-Z])?$").expect("coordinate move pattern compiles")
});

/// A move as written by the user, before legality matching.
///
/// Castle tokens carry no coordinates; the rank comes from the side to
/// move when the game state resolves the move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParsedMove {
    Castle(CastleSide),
    Coords {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
}

impl fmt::Display for ParsedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedMove::Castle(CastleSide::King) => write!(f, "O-O"),
            ParsedMove::Castle(CastleSide::Queen) => write!(f, "O-O-O"),
            ParsedMove::Coords {
                from,
                to,
                promotion,
            } => {
                write!(f, "{from}{to}")?;
                if let Some(promo) = promotion {
                    write!(f, "{}", promo.to_char())?;
                }
                Ok(())
            }
        }
    }
}

/// Parse a move string.
pub fn parse_move(input: &str) -> Result<ParsedMove, MoveParseError> {
    let trimmed = input.trim();

    match trimmed {
        "O-O" | "0-0" => return Ok(ParsedMove::Castle(CastleSide::King)),
        "O-O-O" | "0-0-0" => return Ok(ParsedMove::Castle(CastleSide::Queen)),
        _ => {}
    }

    if !(4..=5).contains(&trimmed.len()) {
        return Err(MoveParseError::InvalidLength { len: trimmed.len() });
    }

    let Some(caps) = COORD_MOVE.captures(trimmed) else {
        return Err(MoveParseError::InvalidSquare {
            notation: trimmed.to_string(),
        });
    };

    // The capture groups are exactly two-character squares; FromStr
    // cannot fail on them, but stay total anyway.
    let from = Square::from_str(&caps[1]).map_err(|_| MoveParseError::InvalidSquare {
        notation: trimmed.to_string(),
    })?;
    let to = Square::from_str(&caps[2]).map_err(|_| MoveParseError::InvalidSquare {
        notation: trimmed.to_string(),
    })?;

    let promotion = match caps.get(3) {
        None => None,
        Some(m) => {
            let ch = m
                .as_str()
                .chars()
                .next()
                .unwrap_or('?')
                .to_ascii_lowercase();
            match ch {
                'q' => Some(Piece::Queen),
                'r' => Some(Piece::Rook),
                'n' => Some(Piece::Knight),
                'b' => Some(Piece::Bishop),
                _ => return Err(MoveParseError::InvalidPromotion { ch }),
            }
        }
    };

    Ok(ParsedMove::Coords {
        from,
        to,
        promotion,
    })
}
