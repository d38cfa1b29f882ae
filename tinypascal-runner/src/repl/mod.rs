mod reader;

use rustyline::DefaultEditor;

use reader::{ReadOutput, Reader};
use tinypascal_interpreter::environment::Environment;
use tinypascal_interpreter::evaluator;

struct Repl {
    reader: Reader,
    environment: Environment,
}

impl Repl {
    fn run(mut self) {
        loop {
            let input = self.reader.read();
            match input {
                ReadOutput::Exit => break,
                ReadOutput::Clear => continue,
                ReadOutput::Value(program) => {
                    match evaluator::eval_program(&program, &mut self.environment) {
                        Ok(()) => crate::runner::print_store(&self.environment),
                        Err(err) => println!("Error evaluating:\n{}", err),
                    }
                }
            }
        }
    }
}

pub fn start() -> rustyline::Result<()> {
    let rl = DefaultEditor::new()?;

    Repl {
        reader: Reader::new(rl),
        environment: Environment::new(),
    }
    .run();

    Ok(())
}
