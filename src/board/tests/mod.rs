//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move counts and generation rules
//! - `edge_cases.rs` - Special positions, castling, en passant, draws
//! - `eval.rs` - Evaluation terms and symmetry
//! - `search.rs` - Search laws, mates, deadline behavior
//! - `notation.rs` - Move text round-trips through the game state
//! - `proptest.rs` - Property-based invariant tests over random playouts

mod eval;
mod notation;
