mod attacks;
mod error;
mod eval;
mod fen;
mod grid;
mod movegen;
mod notation;
mod pst;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use grid::Board;
pub use notation::{parse_move, ParsedMove};
pub use search::{
    Engine, IterationInfo, SearchResult, DEFAULT_MAX_DEPTH, DEFAULT_TIME_LIMIT, MATE_SCORE,
};
pub use state::{GameState, GameStatus};
pub use types::{CastleSide, CastlingRights, Color, Move, Piece, Square};

pub(crate) use types::PROMOTION_PIECES;
