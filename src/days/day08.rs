use bitvec::prelude::*;

use crate::answer::Answers;
use crate::error::{AocError, Result};

struct Forest {heights: Vec<Vec<u8>>, rows: usize, cols: usize}

impl Forest {
    fn parse(lines: &[&str]) -> Result<Self> {
        let heights = lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()).map(|line| {
            line.bytes().map(|c| if c.is_ascii_digit() {Ok(c - b'0')} else {Err(AocError::malformed(line))})
                .collect::<Result<Vec<_>>>()
        }).collect::<Result<Vec<_>>>()?;
        let rows = heights.len();
        let cols = heights.first().map_or(0, |r| r.len());
        if heights.iter().any(|r| r.len() != cols) {
            return Err(AocError::Malformed("rows of differing length".into()));
        }
        Ok(Forest {heights, rows, cols})
    }

    /// Marks trees visible along one line of sight, walking inwards.
    fn scan(&self, visible: &mut BitVec, line: impl Iterator<Item = (usize, usize)>) {
        let mut tallest = -1i8;
        for (r, c) in line {
            let h = self.heights[r][c] as i8;
            if h > tallest {
                visible.set(r * self.cols + c, true);
                tallest = h;
            }
        }
    }

    fn visible_count(&self) -> usize {
        let (rows, cols) = (self.rows, self.cols);
        let mut visible = bitvec![0; rows * cols];
        for r in 0 .. rows {
            self.scan(&mut visible, (0 .. cols).map(|c| (r, c)));
            self.scan(&mut visible, (0 .. cols).rev().map(|c| (r, c)));
        }
        for c in 0 .. cols {
            self.scan(&mut visible, (0 .. rows).map(|r| (r, c)));
            self.scan(&mut visible, (0 .. rows).rev().map(|r| (r, c)));
        }
        visible.count_ones()
    }

    fn viewing_distance(&self, h: u8, line: impl Iterator<Item = (usize, usize)>) -> usize {
        let mut seen = 0;
        for (r, c) in line {
            seen += 1;
            if self.heights[r][c] >= h {break}
        }
        seen
    }

    fn scenic_score(&self, r: usize, c: usize) -> usize {
        let h = self.heights[r][c];
        self.viewing_distance(h, (0 .. c).rev().map(|c| (r, c)))
            * self.viewing_distance(h, (c + 1 .. self.cols).map(|c| (r, c)))
            * self.viewing_distance(h, (0 .. r).rev().map(|r| (r, c)))
            * self.viewing_distance(h, (r + 1 .. self.rows).map(|r| (r, c)))
    }
}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let forest = Forest::parse(lines)?;
    let best = (0 .. forest.rows).flat_map(|r| (0 .. forest.cols).map(move |c| (r, c)))
        .map(|(r, c)| forest.scenic_score(r, c))
        .max().unwrap_or(0);
    Ok(Answers::new(forest.visible_count(), best))
}
