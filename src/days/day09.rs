use rustc_hash::FxHashSet;

use crate::answer::Answers;
use crate::error::{AocError, Result};
use crate::util::num;

type Pos = (i32, i32);
const KNOTS: usize = 10;

/// Pulls `knot` one step towards `leader` unless they already touch.
fn follow(leader: Pos, knot: &mut Pos) {
    let (dx, dy) = (leader.0 - knot.0, leader.1 - knot.1);
    if dx.abs() > 1 || dy.abs() > 1 {
        knot.0 += dx.signum();
        knot.1 += dy.signum();
    }
}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let mut knots: [Pos; KNOTS] = [(0, 0); KNOTS];
    let mut second: FxHashSet<Pos> = FxHashSet::default();
    let mut last: FxHashSet<Pos> = FxHashSet::default();
    second.insert(knots[1]);
    last.insert(knots[KNOTS - 1]);

    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        let (dir, steps) = line.split_once(' ').ok_or_else(|| AocError::malformed(line))?;
        let (dx, dy) = match dir {
            "R" => (1, 0), "L" => (-1, 0), "U" => (0, 1), "D" => (0, -1),
            _ => return Err(AocError::malformed(line))
        };
        for _ in 0 .. num::<u32>(steps)? {
            knots[0].0 += dx;
            knots[0].1 += dy;
            for ix in 1 .. KNOTS {
                let leader = knots[ix - 1];
                follow(leader, &mut knots[ix]);
            }
            second.insert(knots[1]);
            last.insert(knots[KNOTS - 1]);
        }
    }
    Ok(Answers::new(second.len(), last.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let lines = ["R 4", "U 4", "L 3", "D 1", "R 4", "D 1", "L 5", "R 2"];
        assert_eq!(solve(&lines).unwrap(), Answers::new(13usize, 1usize));
    }

    #[test]
    fn larger_example() {
        let lines = ["R 5", "U 8", "L 8", "D 3", "R 17", "D 10", "L 25", "U 20"];
        assert_eq!(solve(&lines).unwrap().part2, 36usize.into());
    }

    #[test]
    fn diagonal_catch_up() {
        let mut knot = (0, 0);
        follow((1, 2), &mut knot);
        assert_eq!(knot, (1, 1));
        follow((1, 2), &mut knot);
        assert_eq!(knot, (1, 1));
    }
}
