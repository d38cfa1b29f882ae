use std::path::{Path, PathBuf};

use thiserror::Error;

use tinypascal_core::lexer::Tokenizer;
use tinypascal_core::parser::{ParseError, Parser};
use tinypascal_interpreter::environment::Environment;
use tinypascal_interpreter::evaluator;
use tinypascal_interpreter::evaluator::EvaluationError;

#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("Could not read {}: {}", .0.display(), .1)]
    File(PathBuf, std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Reads a source file and runs it.
pub fn run_file(path: &Path) -> Result<(), ExecuteError> {
    let source = std::fs::read_to_string(path)
        .map_err(|err| ExecuteError::File(path.to_path_buf(), err))?;

    execute(&source)
}

/// Runs a whole program and prints the variables it left behind.
pub fn execute(source: &str) -> Result<(), ExecuteError> {
    let program = Parser::new(Tokenizer::new(source))?.parse()?;

    let mut environment = Environment::new();
    evaluator::eval_program(&program, &mut environment)?;

    print_store(&environment);

    Ok(())
}

pub fn print_store(environment: &Environment) {
    let mut store = environment.iter().collect::<Vec<_>>();
    store.sort_by_key(|&(name, _)| name);

    for (name, value) in store {
        println!("{} = {}", name, value);
    }
}
