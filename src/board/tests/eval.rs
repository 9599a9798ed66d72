//! Evaluation terms and symmetry.

use crate::board::{Color, GameState, MATE_SCORE};

#[test]
fn test_starting_position_is_balanced() {
    let game = GameState::new();
    assert_eq!(game.evaluate(), 0);
}

#[test]
fn test_material_counts() {
    let game = GameState::new();
    // 8 pawns + 2 knights + 2 bishops + 2 rooks + 1 queen
    assert_eq!(game.material(Color::White), 3900);
    assert_eq!(game.material(Color::Black), 3900);

    let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1").unwrap();
    assert_eq!(game.material(Color::White), 500);
    assert_eq!(game.material(Color::Black), 0);
}

#[test]
fn test_material_advantage_dominates() {
    let game = GameState::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1").unwrap();
    assert!(game.evaluate() > 500);

    let game = GameState::from_fen("q3k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert!(game.evaluate() < -500);
}

#[test]
fn test_endgame_detection() {
    assert!(!GameState::new().is_endgame());

    // King and rook each: no queens, few pieces
    let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert!(game.is_endgame());

    // Queens on but almost nothing else: piece count under eight decides
    let game = GameState::from_fen("3qk3/8/8/8/8/8/8/3QK3 w - - 0 1").unwrap();
    assert!(game.is_endgame());
}

#[test]
fn test_game_phase_bounds() {
    let opening = GameState::new().game_phase();
    assert!((opening - 1.0).abs() < f64::EPSILON);

    let bare = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")
        .unwrap()
        .game_phase();
    assert!(bare.abs() < f64::EPSILON);

    let partial = GameState::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1")
        .unwrap()
        .game_phase();
    assert!(partial > 0.0 && partial < 1.0);
}

#[test]
fn test_terminal_shortcut_scores() {
    // Black is checkmated: maximal score for White
    let mate = GameState::from_fen("3k4/3Q4/3K4/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(mate.evaluate(), MATE_SCORE);

    // Mirror: White checkmated
    let mate = GameState::from_fen("8/8/8/8/8/3k4/3q4/3K4 w - - 0 1").unwrap();
    assert_eq!(mate.evaluate(), -MATE_SCORE);

    let stalemate = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(stalemate.evaluate(), 0);
}

#[test]
fn test_evaluation_negates_under_color_mirror() {
    // Each pair is the same position with colors and ranks flipped
    let pairs = [
        (
            "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1",
            "4k3/4p3/8/8/8/8/8/4K3 b - - 0 1",
        ),
        (
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
            "rnbqkb1r/pppp1ppp/5n2/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2",
        ),
        (
            "4k3/8/8/8/8/8/8/R3K3 w - - 0 1",
            "r3k3/8/8/8/8/8/8/4K3 b - - 0 1",
        ),
    ];

    for (fen, mirrored) in pairs {
        let a = GameState::from_fen(fen).unwrap().evaluate();
        let b = GameState::from_fen(mirrored).unwrap().evaluate();
        assert_eq!(a, -b, "mirror of {fen} should negate");
    }
}

#[test]
fn test_castling_rights_bonus() {
    let with_rights = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let without = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    assert_eq!(with_rights.evaluate() - without.evaluate(), 20);
}
