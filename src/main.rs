use std::io::{self, BufRead};

use clap::Parser;
use rustyline::Editor;

use pcalc::run_line;
use pcalc::History;

/// A prefix-notation calculator with a numbered result history.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Suppress the interactive prompt, printing only results and errors.
    #[arg(short, long)]
    batch: bool,
}

fn main() {
    // Any argument other than -b/--batch selects interactive mode;
    // --help and --version still print and exit.
    let args = Args::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            Args { batch: false }
        } else {
            err.exit()
        }
    });
    let mut history = History::new();

    if args.batch {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if is_quit(&line) {
                return;
            }
            if let Some(out) = run_line(&line, &mut history) {
                println!("{}", out);
            }
        }
    } else {
        let mut rl = Editor::<()>::new();
        while let Ok(line) = rl.readline("> ") {
            rl.add_history_entry(line.as_str());
            if is_quit(&line) {
                return;
            }
            if let Some(out) = run_line(&line, &mut history) {
                println!("{}", out);
            }
        }
    }
}

fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("quit")
}
