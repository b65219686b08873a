//! REPL implementation.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::session::{Session, SessionError};

const HELP: &str = "\
Enter a formula to add it, e.g. ∀x (Human(x) → Mortal(x)).
Commands:
  :prove            prove the accumulated formulas
  :set <key> <val>  change a setting (max_steps, unifier, pair_selection, dedup)
  :show             list the formulas
  :config           show the settings
  :load <file>      replace the settings from a JSON file
  :json             print the last outcome as JSON
  :clear            drop all formulas
  :help             show this help
  :quit             exit";

/// REPL error.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("unknown command ':{0}' (try :help)")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Interactive front end over a [`Session`].
pub struct Repl {
    session: Session,
    finished: bool,
}

impl Repl {
    pub fn new() -> Self {
        Repl::with_session(Session::new())
    }

    pub fn with_session(session: Session) -> Self {
        Repl {
            session,
            finished: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True once `:quit` has been processed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process a line of input and return the text to show.
    pub fn process_line(&mut self, line: &str) -> Result<String, ReplError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(String::new());
        }
        match line.strip_prefix(':') {
            Some(command) => self.process_command(command),
            None => Ok(self.session.add_formula(line)?.to_string()),
        }
    }

    fn process_command(&mut self, command: &str) -> Result<String, ReplError> {
        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match (name, args.as_slice()) {
            ("prove", []) => Ok(self.session.prove().to_string()),
            ("set", [key, value]) => Ok(self.session.set_option(key, value)?.to_string()),
            ("set", _) => Err(ReplError::Usage(":set <key> <value>")),
            ("load", [path]) => Ok(self.session.load_config(path)?.to_string()),
            ("load", _) => Err(ReplError::Usage(":load <file>")),
            ("show", []) => Ok(self.show_formulas()),
            ("config", []) => Ok(self
                .session
                .config()
                .entries()
                .into_iter()
                .map(|(key, value)| format!("{} = {}", key, value))
                .collect::<Vec<_>>()
                .join("\n")),
            ("json", []) => Ok(self.session.last_outcome_json()?),
            ("clear", []) => Ok(self.session.clear().to_string()),
            ("help", _) => Ok(HELP.to_string()),
            ("quit" | "q" | "exit", _) => {
                self.finished = true;
                Ok(String::new())
            }
            ("prove" | "show" | "config" | "json" | "clear", _) => {
                Err(ReplError::Usage("this command takes no arguments"))
            }
            (other, _) => Err(ReplError::UnknownCommand(other.to_string())),
        }
    }

    fn show_formulas(&self) -> String {
        if self.session.formulas().is_empty() {
            return "No formulas.".to_string();
        }
        self.session
            .formulas()
            .iter()
            .enumerate()
            .map(|(i, f)| format!("[{}] {}", i + 1, f))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Run the REPL on stdin/stdout until `:quit` or end of input.
    pub fn run(&mut self) -> Result<(), ReplError> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut lines = stdin.lock().lines();

        while !self.finished {
            write!(stdout, "> ")?;
            stdout.flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            match self.process_line(&line?) {
                Ok(output) if output.is_empty() => {}
                Ok(output) => writeln!(stdout, "{}", output)?,
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
