use std::process::ExitCode;

use termchess::shell::Shell;

fn main() -> ExitCode {
    let mut shell = Shell::new();
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
