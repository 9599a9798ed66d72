//! Interactive terminal shell.
//!
//! A thin adapter over the engine core: reads one line, dispatches one
//! command, prints the result. All user-level errors are recovered locally
//! by printing a message and re-prompting; only I/O failure ends the loop
//! with an error.

use std::io::{self, BufRead, Write};

use crate::board::{Color, Engine, GameState, GameStatus, Square};

/// The interactive game session: one position, one engine.
pub struct Shell {
    game: GameState,
    engine: Engine,
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new()
    }
}

impl Shell {
    #[must_use]
    pub fn new() -> Self {
        Shell {
            game: GameState::new(),
            engine: Engine::new(),
        }
    }

    /// Run the read-eval-print loop until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        println!("termchess {}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands.");
        println!();
        println!("{}", render_board(&self.game));

        loop {
            print!("{}> ", self.game.current_player());
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // End of input counts as a normal quit
                return Ok(());
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            let mut words = input.split_whitespace();
            let command = words.next().unwrap_or("");
            match command {
                "quit" | "q" => return Ok(()),
                "help" | "h" => print_help(),
                "moves" | "m" => self.list_moves(),
                "eval" | "e" => self.show_eval(),
                "ai" => self.ai_move(),
                "depth" => self.set_depth(words.next()),
                _ => self.user_move(input),
            }
        }
    }

    fn list_moves(&self) {
        let moves = self.game.legal_moves();
        if moves.is_empty() {
            println!("no legal moves");
            return;
        }
        println!("{} legal moves:", moves.len());
        let rendered: Vec<String> = moves.iter().map(ToString::to_string).collect();
        for chunk in rendered.chunks(8) {
            println!("  {}", chunk.join(" "));
        }
    }

    fn show_eval(&self) {
        println!("score:    {:+} cp", self.game.evaluate());
        println!("phase:    {:.2}", self.game.game_phase());
        println!("endgame:  {}", self.game.is_endgame());
        println!(
            "material: White {} / Black {}",
            self.game.material(Color::White),
            self.game.material(Color::Black)
        );
    }

    fn set_depth(&mut self, arg: Option<&str>) {
        match arg.and_then(|s| s.parse::<u32>().ok()) {
            Some(depth) => {
                self.engine.set_depth(depth);
                println!("search depth set to {}", self.engine.max_depth);
            }
            None => println!("usage: depth <1-10>"),
        }
    }

    fn user_move(&mut self, input: &str) {
        match self.game.apply_text(input) {
            Ok(mv) => {
                println!("played {mv}");
                println!("{}", render_board(&self.game));
                self.announce_status();
            }
            Err(err) => println!("{err}"),
        }
    }

    fn ai_move(&mut self) {
        if self.game.is_game_over() {
            self.announce_status();
            return;
        }

        println!(
            "thinking (depth {}, {:?} budget)...",
            self.engine.max_depth, self.engine.time_limit
        );
        let result = self.engine.search_with_info(&self.game, |info| {
            println!(
                "  depth {} -> {} ({:+} cp, {} nodes, {} ms)",
                info.depth,
                info.best_move,
                info.score,
                info.nodes,
                info.elapsed.as_millis()
            );
        });

        let Some(best) = result.best_move else {
            println!("no legal moves");
            return;
        };

        // The move comes from our own legal list; failure here would be
        // an engine bug, so surface it rather than panic.
        match self.game.try_apply(best) {
            Ok(mv) => {
                println!(
                    "engine plays {mv} (score {:+} cp, depth {}, {} nodes, {} ms)",
                    result.score,
                    result.depth,
                    result.nodes,
                    result.duration.as_millis()
                );
                println!("{}", render_board(&self.game));
                self.announce_status();
            }
            Err(err) => println!("engine produced an unplayable move: {err}"),
        }
    }

    fn announce_status(&self) {
        match self.game.status() {
            GameStatus::InProgress => {
                if self.game.in_check() {
                    println!("{} is in check", self.game.current_player());
                }
            }
            GameStatus::Checkmate { winner } => println!("checkmate! {winner} wins"),
            GameStatus::Stalemate => println!("stalemate - draw"),
            GameStatus::FiftyMoveDraw => println!("draw by the fifty-move rule"),
        }
    }
}

/// Render the board as an ASCII grid, rank 8 at the top, with file
/// letters above and below and rank numbers on both sides.
#[must_use]
pub fn render_board(game: &GameState) -> String {
    let mut out = String::from("  a b c d e f g h\n");
    for rank in (0..8).rev() {
        let label = rank + 1;
        out.push_str(&format!("{label} "));
        for file in 0..8 {
            match game.board().piece_at(Square(rank, file)) {
                Some((color, piece)) => out.push(piece.to_fen_char(color)),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push_str(&format!("{label}\n"));
    }
    out.push_str("  a b c d e f g h");
    out
}

fn print_help() {
    println!("commands:");
    println!("  <move>     play a move: e2e4, e7e8q, O-O, O-O-O");
    println!("  moves, m   list all legal moves");
    println!("  eval, e    show the static evaluation");
    println!("  ai         let the engine choose and play a move");
    println!("  depth <n>  set search depth (1-10)");
    println!("  help, h    this text");
    println!("  quit, q    exit");
}
