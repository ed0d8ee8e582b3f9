//! Session Controller - interactive line-mode loop
//!
//! Reads one line at a time, parses it into a [`Command`] and dispatches it
//! to the store or query engine. The loop ends on `/q` or end of input.
//! Empty-state conditions (no file, no entries) print a message and keep
//! the loop running; IO failures end it and propagate to the caller.

mod command;
pub mod help;

pub use command::Command;

use std::io::{BufRead, Write};

use log::debug;

use crate::error::NotrResult;
use crate::query::{QueryEngine, Tail, DEFAULT_TAIL_COUNT};
use crate::store::{LogStore, MutationOutcome};
use crate::types::Note;

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Prompting,
    Terminated,
}

/// Interactive session over an input reader and an output writer
pub struct Session<'a, R, W> {
    store: &'a LogStore,
    engine: QueryEngine<'a>,
    input: R,
    output: W,
    state: SessionState,
    list_count: usize,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a LogStore, input: R, output: W) -> Self {
        Self {
            store,
            engine: QueryEngine::new(store),
            input,
            output,
            state: SessionState::Prompting,
            list_count: DEFAULT_TAIL_COUNT,
        }
    }

    /// Default count for a bare `/list`
    pub fn with_list_count(mut self, list_count: usize) -> Self {
        self.list_count = list_count;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Consume the session and hand back the output writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the banner and process lines until termination
    pub fn run(&mut self) -> NotrResult<()> {
        writeln!(self.output, "{}", help::BANNER)?;
        self.output.flush()?;

        while self.state == SessionState::Prompting {
            self.state = self.step()?;
        }
        debug!("event=session_end");
        Ok(())
    }

    /// Read and handle a single input line
    pub fn step(&mut self) -> NotrResult<SessionState> {
        let Some(line) = self.read_line()? else {
            return Ok(SessionState::Terminated);
        };
        let state = self.dispatch(Command::parse(&line))?;
        self.output.flush()?;
        Ok(state)
    }

    /// Execute a parsed command
    pub fn dispatch(&mut self, command: Command) -> NotrResult<SessionState> {
        match command {
            Command::Blank => {}
            Command::Append(text) => self.append(&text)?,
            Command::Edit => return self.edit(),
            Command::Delete => self.delete()?,
            Command::List(n) => self.list(n.unwrap_or(self.list_count))?,
            Command::Help => write!(self.output, "{}", help::INLINE_HELP)?,
            Command::Quit => return Ok(SessionState::Terminated),
        }
        Ok(SessionState::Prompting)
    }

    fn append(&mut self, text: &str) -> NotrResult<()> {
        let note = Note::new(text)?;
        let line = self.store.append(&note)?;
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn edit(&mut self) -> NotrResult<SessionState> {
        let last = match self.store.last_line()? {
            MutationOutcome::NoFile => {
                writeln!(self.output, "No log file found to edit.")?;
                return Ok(SessionState::Prompting);
            }
            MutationOutcome::Empty => {
                writeln!(self.output, "No entries to edit.")?;
                return Ok(SessionState::Prompting);
            }
            MutationOutcome::Done(last) => last,
        };

        writeln!(self.output, "Editing last entry: {}", last.trim())?;
        write!(self.output, "New text: ")?;
        self.output.flush()?;

        let Some(text) = self.read_line()? else {
            return Ok(SessionState::Terminated);
        };
        let Ok(note) = Note::new(&text) else {
            return Ok(SessionState::Prompting);
        };

        match self.store.replace_last(&note)? {
            MutationOutcome::Done(replaced) => {
                writeln!(self.output, "Updated: {}", replaced.current)?
            }
            MutationOutcome::NoFile => writeln!(self.output, "No log file found to edit.")?,
            MutationOutcome::Empty => writeln!(self.output, "No entries to edit.")?,
        }
        Ok(SessionState::Prompting)
    }

    fn delete(&mut self) -> NotrResult<()> {
        match self.store.remove_last()? {
            MutationOutcome::NoFile => {
                writeln!(self.output, "No log file found to delete from.")?
            }
            MutationOutcome::Empty => writeln!(self.output, "No entries to delete.")?,
            MutationOutcome::Done(removed) => {
                writeln!(self.output, "Deleted: {}", removed.trim())?
            }
        }
        Ok(())
    }

    fn list(&mut self, n: usize) -> NotrResult<()> {
        match self.engine.recent_tail(n)? {
            Tail::NoFile => writeln!(self.output, "No log file found.")?,
            Tail::Lines(lines) => {
                writeln!(self.output, "--- Last entries ---")?;
                for line in lines {
                    writeln!(self.output, "{}", line)?;
                }
            }
        }
        Ok(())
    }

    /// Next input line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> NotrResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
