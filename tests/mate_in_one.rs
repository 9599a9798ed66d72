//! Mate-in-one problem suite, loaded from a JSON data file.

use std::time::Duration;

use serde::Deserialize;

use termchess::board::{Engine, GameState};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    #[serde(rename = "type")]
    kind: String,
    fen: String,
    moves: String,
}

fn uci_from_problem_moves(moves: &str) -> String {
    moves.replace('-', "")
}

fn load_problems() -> ProblemSet {
    let data = include_str!("data/problems.json");
    serde_json::from_str(data).expect("invalid problems.json")
}

#[test]
fn mate_in_one_moves_deliver_mate() {
    let set = load_problems();

    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let mut game = GameState::from_fen(&problem.fen).expect("invalid problem FEN");
        let uci = uci_from_problem_moves(&problem.moves);
        game.apply_text(&uci)
            .unwrap_or_else(|err| panic!("move {uci} rejected for {}: {err}", problem.fen));

        assert!(
            game.is_checkmate(),
            "mate in one failed for fen: {} move: {}",
            problem.fen,
            problem.moves
        );
    }
}

#[test]
fn engine_finds_a_mate_in_one() {
    let set = load_problems();
    let engine = Engine {
        max_depth: 2,
        time_limit: Duration::from_secs(30),
    };

    for problem in set.problems.iter().filter(|p| p.kind == "Mate in One") {
        let game = GameState::from_fen(&problem.fen).expect("invalid problem FEN");
        let result = engine.search(&game);
        let best = result
            .best_move
            .unwrap_or_else(|| panic!("no move found for {}", problem.fen));

        let mut after = game.clone();
        after.try_apply(best).expect("engine move must be legal");
        assert!(
            after.is_checkmate(),
            "engine move {best} does not mate in {}",
            problem.fen
        );
    }
}
