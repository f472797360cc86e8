//! Numeric grid puzzles

pub use self::error::GenerateError;
pub use self::generate::{RandomPuzzleSource, MAX_DIMENSION};
pub use self::score::{is_partial_latin, max_score, score};

pub mod error;
mod generate;
mod score;

use crate::collections::Grid;

pub type Value = i32;
pub type Solution = Grid<Value>;

/// The value of a cell that is not revealed
pub const BLANK: Value = 0;

/// Something that produces puzzle grids
pub trait PuzzleSource {
    /// Produces a `rows` x `cols` puzzle
    fn new_puzzle(&mut self, rows: usize, cols: usize) -> Result<Grid<Value>, GenerateError>;

    /// Produces a `rows` x `cols` puzzle whose revealed values sum to `score`
    fn new_puzzle_of_score(
        &mut self,
        score: Value,
        rows: usize,
        cols: usize,
    ) -> Result<Grid<Value>, GenerateError>;
}

impl<S: PuzzleSource + ?Sized> PuzzleSource for &mut S {
    fn new_puzzle(&mut self, rows: usize, cols: usize) -> Result<Grid<Value>, GenerateError> {
        (**self).new_puzzle(rows, cols)
    }

    fn new_puzzle_of_score(
        &mut self,
        score: Value,
        rows: usize,
        cols: usize,
    ) -> Result<Grid<Value>, GenerateError> {
        (**self).new_puzzle_of_score(score, rows, cols)
    }
}
