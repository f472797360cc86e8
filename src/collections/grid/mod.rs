mod coord;

pub use self::coord::{AsGridIndex, Coord};

use std::fmt;
use std::fmt::Display;
use std::ops::{Deref, Index};

use thiserror::Error;

use crate::print::TabRows;

/// A container of elements represented in a rectangular grid
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new `Grid` by calling `f` for every coordinate in row-major order
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Coord) -> T) -> Self {
        let mut elements = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                elements.push(f(Coord::new(row, col)));
            }
        }
        Self {
            rows,
            cols,
            elements,
        }
    }

    /// Create a new `Grid` from a list of rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, NonRectangular> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut elements = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(NonRectangular {
                    row: i,
                    len: row.len(),
                    expected: cols,
                });
            }
            elements.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            elements,
        })
    }

    /// The number of rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// The number of columns
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + Clone {
        let cols = self.cols;
        (0..self.rows).map(move |row| &self.elements[row * cols..(row + 1) * cols])
    }

    /// Returns an iterator over the elements of one column
    pub fn col(&self, col: usize) -> impl Iterator<Item = &T> {
        assert!(col < self.cols);
        self.elements.iter().skip(col).step_by(self.cols)
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let cols = self.cols;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i / cols, i % cols), e))
    }

    /// Convert each element with `f`, keeping the dimensions
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            elements: self.elements.iter().map(f).collect(),
        }
    }
}

impl<T> Deref for Grid<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T, I: AsGridIndex> Index<I> for Grid<T> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        &self.elements[index.as_grid_index(self.cols)]
    }
}

/// Formats each row as tab-prefixed fields, one line per row
impl<T> Display for Grid<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&TabRows(self.rows()), f)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("row {row} has {len} elements, expected {expected}")]
pub struct NonRectangular {
    row: usize,
    len: usize,
    expected: usize,
}
