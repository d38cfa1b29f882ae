use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use tinypascal_core::ast::Program;
use tinypascal_core::lexer::Tokenizer;
use tinypascal_core::parser::Parser;

const PROMPT: &str = "pascal> ";

pub enum ReadOutput {
    Exit,
    Clear,
    Value(Program),
}

pub struct Reader {
    rl: Editor<(), DefaultHistory>,
}

impl Reader {
    pub fn new(rl: Editor<(), DefaultHistory>) -> Self {
        Self { rl }
    }

    pub fn read(&mut self) -> ReadOutput {
        let readline = self.rl.readline(PROMPT);

        let line = match readline {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                return ReadOutput::Clear; // Clear line
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                return ReadOutput::Exit;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                return ReadOutput::Exit;
            }
            Ok(line) => {
                if line.trim().is_empty() {
                    return ReadOutput::Clear;
                }
                self.rl.add_history_entry(&line).unwrap();
                line
            }
        };

        let program = Parser::new(Tokenizer::new(&line)).and_then(Parser::parse);

        match program {
            Ok(value) => ReadOutput::Value(value),
            Err(err) => {
                println!("Error parsing:\n{}", err);
                ReadOutput::Clear
            }
        }
    }
}
