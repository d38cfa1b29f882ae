mod repl;
mod runner;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Source file to run, otherwise a REPL is started
    path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match cli.path {
        None => repl::start().unwrap(),
        Some(path) => {
            if let Err(err) = runner::run_file(&path) {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }
}
