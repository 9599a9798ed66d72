//! Terminal chess engine.
//!
//! Provides a complete chess engine with:
//! - Mailbox (8x8 grid) board representation
//! - Full rules support: castling, en passant, promotion, fifty-move rule
//! - Material + piece-square-table evaluation with a game-phase switch
//! - Alpha-beta search with move ordering, iterative deepening, and a
//!   soft wall-clock deadline
//! - An interactive shell for play against the engine
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use termchess::board::{Engine, GameState};
//!
//! // Create a new game from the starting position
//! let mut game = GameState::new();
//!
//! // Generate all legal moves
//! let moves = game.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! // Apply a move in long algebraic notation
//! game.apply_text("e2e4").unwrap();
//!
//! // Find the best reply
//! let engine = Engine {
//!     max_depth: 2,
//!     time_limit: Duration::from_secs(5),
//! };
//! let result = engine.search(&game);
//! assert!(result.best_move.is_some());
//! ```
//!
//! # Building Positions
//!
//! ```
//! use termchess::board::GameState;
//!
//! // From FEN notation
//! let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
//! assert_eq!(game.legal_moves().len(), 6);
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`, `Move`,
//!   and `CastlingRights`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Chess engines have intentionally similar names (white_mobility/black_mobility, etc.)
#![allow(clippy::similar_names)]
// Index casts are ubiquitous and safe in chess (board ranks, files, scores)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod shell;
