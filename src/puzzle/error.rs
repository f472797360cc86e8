use thiserror::Error;

use crate::puzzle::Value;

#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("invalid puzzle dimensions {}x{}: both must be between 1 and {}", rows, cols, max)]
    InvalidDimensions { rows: usize, cols: usize, max: usize },
    #[error("no puzzle has a score of {} (the highest possible score is {})", score, max)]
    UnreachableScore { score: Value, max: Value },
}
