use std::fmt;
use std::fmt::Debug;

/// A `Coord` struct represents coordinates of an element in a `Grid`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self([row, col])
    }

    pub fn row(self) -> usize {
        self.0[0]
    }

    pub fn col(self) -> usize {
        self.0[1]
    }
}

/// A value that can be converted to a row-major element index given the number of columns
pub trait AsGridIndex: Copy {
    fn as_grid_index(self, cols: usize) -> usize;
}

impl AsGridIndex for usize {
    fn as_grid_index(self, _cols: usize) -> usize {
        self
    }
}

impl AsGridIndex for Coord {
    fn as_grid_index(self, cols: usize) -> usize {
        assert!(self.col() < cols, "column out of bounds: {:?}", self);
        self.row() * cols + self.col()
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
