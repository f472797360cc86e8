use std::collections::HashSet;

use crate::collections::Grid;
use crate::puzzle::{Value, BLANK};

/// The score of a puzzle is the sum of its revealed values
pub fn score(puzzle: &Grid<Value>) -> Value {
    puzzle.iter().sum()
}

/// The highest score any `rows` x `cols` puzzle can have: every row revealed and holding
/// the `cols` largest values of `1..=max(rows, cols)`
pub fn max_score(rows: usize, cols: usize) -> Value {
    let width = rows.max(cols);
    let row_max: usize = (width + 1 - cols.min(width)..=width).sum();
    (rows * row_max) as Value
}

/// Returns true if every revealed value is within `1..=max` and no row or column repeats a value
pub fn is_partial_latin(puzzle: &Grid<Value>, max: Value) -> bool {
    let in_range = puzzle
        .iter()
        .all(|&v| v == BLANK || (1..=max).contains(&v));
    in_range
        && puzzle.rows().all(|row| all_distinct(row.iter()))
        && (0..puzzle.col_count()).all(|col| all_distinct(puzzle.col(col)))
}

fn all_distinct<'a>(values: impl Iterator<Item = &'a Value>) -> bool {
    let mut seen = HashSet::new();
    values.filter(|&&v| v != BLANK).all(|&v| seen.insert(v))
}
