use std::cmp;

use rand::rngs::{StdRng, ThreadRng};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::collections::Grid;
use crate::puzzle::error::GenerateError;
use crate::puzzle::score::score;
use crate::puzzle::{PuzzleSource, Solution, Value, BLANK};

/// The largest number of rows or columns in a generated puzzle
pub const MAX_DIMENSION: usize = 9;

const REVEAL_PROBABILITY: f64 = 0.5;

/// The number of solutions to try before giving up on a target score
const SOLUTION_ATTEMPTS: u32 = 8;

/// Generates puzzles by hiding cells of a random Latin rectangle
pub struct RandomPuzzleSource<R = ThreadRng> {
    rng: R,
}

impl RandomPuzzleSource<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(thread_rng())
    }
}

impl Default for RandomPuzzleSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPuzzleSource<StdRng> {
    /// A source that generates the same sequence of puzzles for the same seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPuzzleSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a puzzle together with the solution it was cut from
    pub fn new_puzzle_with_solution(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> Result<(Grid<Value>, Solution), GenerateError> {
        check_dimensions(rows, cols)?;
        let solution = random_latin_rectangle(rows, cols, &mut self.rng);
        debug!("Solution:\n{}", &solution);
        let rng = &mut self.rng;
        let puzzle = solution.map(|&v| {
            if rng.gen_bool(REVEAL_PROBABILITY) {
                v
            } else {
                BLANK
            }
        });
        Ok((puzzle, solution))
    }

    /// Generates a puzzle with the given score together with the solution it was cut from
    pub fn new_puzzle_of_score_with_solution(
        &mut self,
        target: Value,
        rows: usize,
        cols: usize,
    ) -> Result<(Grid<Value>, Solution), GenerateError> {
        check_dimensions(rows, cols)?;
        let mut max = 0;
        for attempt in 1..=SOLUTION_ATTEMPTS {
            let solution = random_latin_rectangle(rows, cols, &mut self.rng);
            debug!("Solution (attempt {}):\n{}", attempt, &solution);
            let total = score(&solution);
            max = cmp::max(max, total);
            if target < 0 || target > total {
                continue;
            }
            if let Some(puzzle) = reveal_score(&solution, target, &mut self.rng) {
                return Ok((puzzle, solution));
            }
        }
        Err(GenerateError::UnreachableScore { score: target, max })
    }
}

impl<R: Rng> PuzzleSource for RandomPuzzleSource<R> {
    fn new_puzzle(&mut self, rows: usize, cols: usize) -> Result<Grid<Value>, GenerateError> {
        let (puzzle, _solution) = self.new_puzzle_with_solution(rows, cols)?;
        Ok(puzzle)
    }

    fn new_puzzle_of_score(
        &mut self,
        score: Value,
        rows: usize,
        cols: usize,
    ) -> Result<Grid<Value>, GenerateError> {
        let (puzzle, _solution) = self.new_puzzle_of_score_with_solution(score, rows, cols)?;
        Ok(puzzle)
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), GenerateError> {
    let valid = 1..=MAX_DIMENSION;
    if valid.contains(&rows) && valid.contains(&cols) {
        Ok(())
    } else {
        Err(GenerateError::InvalidDimensions {
            rows,
            cols,
            max: MAX_DIMENSION,
        })
    }
}

/// A Latin square of width `max(rows, cols)`, cropped to `rows` x `cols`
fn random_latin_rectangle(rows: usize, cols: usize, rng: &mut impl Rng) -> Solution {
    let width = cmp::max(rows, cols);
    let mut generate_seed = || {
        let mut seed = (0..width).collect::<Vec<_>>();
        seed.shuffle(rng);
        seed
    };
    let seeds = [generate_seed(), generate_seed()];
    Grid::from_fn(rows, cols, |coord| {
        ((seeds[0][coord.row()] + seeds[1][coord.col()]) % width + 1) as Value
    })
}

/// Reveals a random subset of the solution's cells whose values add up to `target`.
/// Returns `None` if no subset does.
fn reveal_score(solution: &Solution, target: Value, rng: &mut impl Rng) -> Option<Grid<Value>> {
    let target = target as usize;
    let mut order = (0..solution.len()).collect::<Vec<_>>();
    order.shuffle(rng);

    // reachable[k][s]: some subset of the first k cells in `order` sums to s
    let mut reachable = vec![vec![false; target + 1]; order.len() + 1];
    reachable[0][0] = true;
    for (k, &i) in order.iter().enumerate() {
        let v = solution[i] as usize;
        for s in 0..=target {
            reachable[k + 1][s] = reachable[k][s] || (s >= v && reachable[k][s - v]);
        }
    }
    if !reachable[order.len()][target] {
        trace!("score {} is not reachable", target);
        return None;
    }

    let mut reveal = vec![false; solution.len()];
    let mut remaining = target;
    for (k, &i) in order.iter().enumerate().rev() {
        let v = solution[i] as usize;
        let can_skip = reachable[k][remaining];
        let can_take = remaining >= v && reachable[k][remaining - v];
        let take = match (can_skip, can_take) {
            (true, true) => rng.gen_bool(REVEAL_PROBABILITY),
            (_, take) => take,
        };
        if take {
            reveal[i] = true;
            remaining -= v;
        }
    }
    debug_assert_eq!(0, remaining);
    trace!("revealed {} cells", reveal.iter().filter(|&&r| r).count());

    let mut reveal = reveal.into_iter();
    Some(solution.map(|&v| {
        if reveal.next().unwrap_or(false) {
            v
        } else {
            BLANK
        }
    }))
}
