//! The interactive puzzle loop

use std::io;
use std::io::Write;

use thiserror::Error;

use crate::input::KeySource;
use crate::print::write_grid;
use crate::puzzle::{GenerateError, PuzzleSource, Value};

pub const PROMPT: &str = "***** Want a puzzle? Press y/n *****";
pub const REPROMPT: &str = "***** Another one? Press y/n *****";

/// The only key that asks for another puzzle
pub const CONTINUE_KEY: char = 'y';

/// The puzzle requested on every iteration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuzzleParams {
    pub rows: usize,
    pub cols: usize,
    /// `None` generates puzzles of any score
    pub score: Option<Value>,
}

impl Default for PuzzleParams {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            score: Some(40),
        }
    }
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("failed to generate puzzle")]
    Generate(#[from] GenerateError),
}

/// Summary of a finished loop
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Session {
    pub puzzles: usize,
}

/// Prints a puzzle every time the user presses `y`
pub struct PromptLoop<K, S, W> {
    keys: K,
    source: S,
    out: W,
    params: PuzzleParams,
}

impl<K, S, W> PromptLoop<K, S, W>
where
    K: KeySource,
    S: PuzzleSource,
    W: Write,
{
    pub fn new(keys: K, source: S, out: W, params: PuzzleParams) -> Self {
        Self {
            keys,
            source,
            out,
            params,
        }
    }

    /// Runs until a key other than `y` is read or input ends
    pub fn run(&mut self) -> Result<Session, PromptError> {
        let mut session = Session::default();
        writeln!(self.out, "{}\n", PROMPT)?;
        while self.read_key()? == Some(CONTINUE_KEY) {
            let puzzle = match self.params.score {
                Some(score) => {
                    self.source
                        .new_puzzle_of_score(score, self.params.rows, self.params.cols)?
                }
                None => self.source.new_puzzle(self.params.rows, self.params.cols)?,
            };
            write_grid(&mut self.out, &puzzle)?;
            session.puzzles += 1;
            debug!("printed puzzle {}", session.puzzles);
            writeln!(self.out, "\n{}\n", REPROMPT)?;
        }
        Ok(session)
    }

    fn read_key(&mut self) -> io::Result<Option<char>> {
        self.out.flush()?;
        let key = self.keys.next_key()?;
        match key {
            Some(c) => trace!("read key {:?}", c),
            None => debug!("end of input"),
        }
        Ok(key)
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
