//! Tab separated grid output

use std::fmt;
use std::fmt::Display;
use std::io;
use std::io::Write;

use crate::collections::Grid;

/// Displays rows as tab-prefixed fields, one line per row.
/// Each row is bounded by its own length.
#[derive(Clone, Copy)]
pub struct TabRows<I>(pub I);

impl<I> Display for TabRows<I>
where
    I: IntoIterator + Clone,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.clone() {
            for element in row {
                write!(f, "\t{}", element)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Writes every row of `grid` as tab-prefixed fields followed by a line break
pub fn write_grid<T, W>(out: &mut W, grid: &Grid<T>) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    write!(out, "{}", grid)
}

/// Writes rows of possibly different lengths
pub fn write_rows<I, W>(out: &mut W, rows: I) -> io::Result<()>
where
    I: IntoIterator + Clone,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::Item: Display,
    W: Write,
{
    write!(out, "{}", TabRows(rows))
}

#[cfg(test)]
mod tests {
    use crate::collections::Grid;
    use crate::print::{write_grid, write_rows, TabRows};

    fn render_grid<T: std::fmt::Display>(grid: &Grid<T>) -> String {
        let mut out = Vec::new();
        write_grid(&mut out, grid).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn two_by_two() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!("\t1\t2\n\t3\t4\n", render_grid(&grid));
    }

    #[test]
    fn line_and_field_counts() {
        let grid = Grid::from_fn(3, 7, |coord| coord.col());
        let s = render_grid(&grid);
        let lines: Vec<_> = s.lines().collect();
        assert_eq!(3, lines.len());
        for line in lines {
            assert!(line.starts_with('\t'));
            assert_eq!(7, line.split('\t').skip(1).count());
        }
    }

    #[test]
    fn non_numeric_elements() {
        let grid = Grid::from_rows(vec![vec!["x", "o"], vec!["o", "x"]]).unwrap();
        assert_eq!("\tx\to\n\to\tx\n", render_grid(&grid));
    }

    #[test]
    fn jagged_rows_use_own_length() {
        let rows = vec![vec![1, 2, 3], vec![4], vec![]];
        let mut out = Vec::new();
        write_rows(&mut out, rows.iter().map(Vec::as_slice)).unwrap();
        assert_eq!("\t1\t2\t3\n\t4\n\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn tab_rows_over_nested_vecs() {
        let rows = vec![vec!['a'], vec!['b', 'c']];
        assert_eq!("\ta\n\tb\tc\n", TabRows(&rows).to_string());
    }

    #[test]
    fn matches_display() {
        let grid = Grid::from_fn(4, 2, |coord| coord.row() as i32 - 1);
        assert_eq!(grid.to_string(), render_grid(&grid));
    }
}
