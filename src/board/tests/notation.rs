//! Move text round-trips through the game state.

use std::str::FromStr;

use crate::board::{parse_move, GameState, MoveParseError, ParsedMove, Square};

#[test]
fn test_rendered_moves_parse_back_structurally() {
    // Every legal move in a promotion-heavy position survives render -> parse
    let game = GameState::from_fen("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    for mv in game.legal_moves() {
        let rendered = mv.to_string();
        match parse_move(&rendered).unwrap() {
            ParsedMove::Coords {
                from,
                to,
                promotion,
            } => {
                assert_eq!(from, mv.from);
                assert_eq!(to, mv.to);
                assert_eq!(promotion, mv.promotion);
            }
            ParsedMove::Castle(_) => panic!("coordinate move {rendered} parsed as castle"),
        }
    }
}

#[test]
fn test_rendered_move_replays_identically() {
    let mut original = GameState::new();
    let mut replayed = GameState::new();

    for input in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4"] {
        let mv = original.apply_text(input).unwrap();
        let replay = replayed.apply_text(&mv.to_string()).unwrap();
        assert_eq!(mv, replay);
    }
    assert_eq!(original.to_fen(), replayed.to_fen());
}

#[test]
fn test_castle_text_resolves_per_side_to_move() {
    let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let white_castle = game.apply_text("O-O").unwrap();
    assert_eq!(white_castle.from, Square::from_str("e1").unwrap());
    assert_eq!(white_castle.to, Square::from_str("g1").unwrap());

    let black_castle = game.apply_text("O-O").unwrap();
    assert_eq!(black_castle.from, Square::from_str("e8").unwrap());
    assert_eq!(black_castle.to, Square::from_str("g8").unwrap());
}

#[test]
fn test_castle_as_king_coordinates_also_works() {
    let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = game.apply_text("e1g1").unwrap();
    // Coordinate input matched the generator's castle move, flags included
    assert!(mv.is_castling());
}

#[test]
fn test_parse_failures_reach_the_caller() {
    let mut game = GameState::new();
    assert!(matches!(
        game.apply_text("hi"),
        Err(MoveParseError::InvalidLength { len: 2 })
    ));
    assert!(matches!(
        game.apply_text("hello"),
        Err(MoveParseError::InvalidSquare { .. })
    ));
    assert!(matches!(
        game.apply_text("e2e9"),
        Err(MoveParseError::InvalidSquare { .. })
    ));
    assert!(matches!(
        game.apply_text("e2e4k"),
        Err(MoveParseError::InvalidPromotion { ch: 'k' })
    ));
    assert!(matches!(
        game.apply_text("e2e5"),
        Err(MoveParseError::IllegalMove { .. })
    ));
}

#[test]
fn test_legality_agrees_with_apply() {
    // Every generated legal move applies; coordinate moves outside the
    // list are rejected
    let game =
        GameState::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2")
            .unwrap();

    for mv in game.legal_moves() {
        let mut copy = game.clone();
        assert!(copy.try_apply(mv).is_ok());
    }

    let mut copy = game.clone();
    assert!(copy
        .try_apply(crate::board::Move::quiet(
            Square(3, 4),
            Square(4, 4),
            crate::board::Piece::Pawn,
        ))
        .is_err());
}
