//! Gauss-Jordan elimination over a dense augmented matrix.
//!
//! Each row holds N coefficients followed by the right-hand side, so an
//! N-variable system is N rows of N+1 entries. After elimination the last
//! column holds the solution.

use thiserror::Error;
use tracing::{debug, warn};

/// Pivots with a magnitude at or below this are treated as zero by
/// [`Pivoting::Partial`].
pub const PIVOT_EPSILON: f64 = 1e-12;

#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    /// A row does not have exactly `expected` entries.
    #[error("row {row} has {actual} entries, expected {expected} for a square system")]
    NotSquare { row: usize, expected: usize, actual: usize },

    /// No usable pivot exists in this column.
    #[error("no pivot found for column {column}, system is singular")]
    Singular { column: usize },
}

/// How the pivot row for a column is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Keep the diagonal unless it is exactly zero, otherwise swap in the
    /// first row below with a nonzero entry.
    FirstNonZero,
    /// Swap in the row with the largest magnitude entry at or below the
    /// diagonal, rejecting pivots within [`PIVOT_EPSILON`] of zero.
    #[default]
    Partial,
}

/// Solves the system with partial pivoting.
pub fn solve(rows: &[Vec<f64>]) -> Result<Vec<f64>, SolveError> {
    solve_with(rows, Pivoting::default())
}

pub fn solve_with(rows: &[Vec<f64>], pivoting: Pivoting) -> Result<Vec<f64>, SolveError> {
    let n = rows.len();
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n + 1) {
        return Err(SolveError::NotSquare {row, expected: n + 1, actual: r.len()});
    }
    let mut m = rows.to_vec();

    for col in 0 .. n {
        let Some(pivot_row) = find_pivot(&m, col, pivoting) else {
            warn!(column = col, "singular system, no pivot available");
            return Err(SolveError::Singular {column: col});
        };
        if pivot_row != col {
            debug!(column = col, from = pivot_row, "swapping pivot row");
            m.swap(col, pivot_row);
        }

        let scale = m[col][col];
        if scale != 1.0 {
            for x in &mut m[col][col ..] {*x /= scale}
        }

        let pivot = m[col].clone();
        for (r, row) in m.iter_mut().enumerate() {
            if r == col {continue}
            let factor = row[col];
            if factor != 0.0 {
                for (x, p) in row[col ..].iter_mut().zip(&pivot[col ..]) {*x -= factor * p}
            }
        }
    }

    Ok(m.into_iter().map(|row| row[n]).collect())
}

fn find_pivot(m: &[Vec<f64>], col: usize, pivoting: Pivoting) -> Option<usize> {
    match pivoting {
        Pivoting::FirstNonZero => (col .. m.len()).find(|&r| m[r][col] != 0.0),
        Pivoting::Partial => (col .. m.len())
            .max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))
            .filter(|&r| m[r][col].abs() > PIVOT_EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn zero_diagonal_needs_a_swap() {
        // y = 2, x + y = 5
        let rows = vec![vec![0.0, 1.0, 2.0], vec![1.0, 1.0, 5.0]];
        for pivoting in [Pivoting::FirstNonZero, Pivoting::Partial] {
            assert!(close(&solve_with(&rows, pivoting).unwrap(), &[3.0, 2.0]));
        }
    }

    #[test]
    fn singular_column_is_reported() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]];
        assert_eq!(solve(&rows), Err(SolveError::Singular {column: 1}));
        assert_eq!(solve_with(&rows, Pivoting::FirstNonZero), Err(SolveError::Singular {column: 1}));
    }

    #[test]
    fn partial_pivoting_rejects_near_zero_pivots() {
        let rows = vec![vec![1.0, 1.0, 2.0], vec![1.0, 1.0 + 1e-15, 2.0]];
        assert_eq!(solve(&rows), Err(SolveError::Singular {column: 1}));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]];
        assert_eq!(solve(&rows), Err(SolveError::NotSquare {row: 1, expected: 3, actual: 2}));
    }

    #[test]
    fn empty_system_has_empty_solution() {
        assert_eq!(solve(&[]), Ok(vec![]));
    }

    #[test]
    fn input_is_left_untouched() {
        let rows = vec![vec![2.0, 1.0, 5.0], vec![1.0, 3.0, 10.0]];
        let copy = rows.clone();
        solve(&rows).unwrap();
        assert_eq!(rows, copy);
    }
}
