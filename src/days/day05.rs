use regex::Regex;

use crate::answer::Answers;
use crate::error::{AocError, Result};
use crate::util::num;

type Stacks = Vec<Vec<u8>>;

/// Reads the crate drawing, bottom row last and stack labels below it.
fn parse_drawing(drawing: &[&str]) -> Result<Stacks> {
    let Some((labels, rows)) = drawing.split_last() else {
        return Err(AocError::Malformed("missing crate drawing".into()));
    };
    let mut stacks = vec![vec![]; labels.split_whitespace().count()];
    for row in rows.iter().rev() {
        for (ix, stack) in stacks.iter_mut().enumerate() {
            match row.as_bytes().get(1 + 4 * ix) {
                Some(c @ b'A' ..= b'Z') => stack.push(*c),
                Some(b' ') | None => (),
                Some(_) => return Err(AocError::malformed(row))
            }
        }
    }
    Ok(stacks)
}

fn top_crates(stacks: &Stacks) -> String {
    stacks.iter().filter_map(|s| s.last()).map(|&c| c as char).collect()
}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let split = lines.iter().position(|l| l.trim().is_empty()).unwrap_or(lines.len());
    let mut one_by_one = parse_drawing(&lines[.. split])?;
    let mut all_at_once = one_by_one.clone();

    let re = Regex::new(r"^move (\d+) from (\d+) to (\d+)$").map_err(|e| AocError::Malformed(e.to_string()))?;
    for line in lines[split ..].iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        let caps = re.captures(line).ok_or_else(|| AocError::malformed(line))?;
        let (n, from, to) = (num::<usize>(&caps[1])?, num::<usize>(&caps[2])?, num::<usize>(&caps[3])?);
        let stack_count = one_by_one.len();
        if !(1 ..= stack_count).contains(&from) || !(1 ..= stack_count).contains(&to) {
            return Err(AocError::Malformed(format!("no such stack in {:?}", line)));
        }
        if one_by_one[from - 1].len() < n {
            return Err(AocError::Malformed(format!("not enough crates for {:?}", line)));
        }

        for stacks in [&mut one_by_one, &mut all_at_once] {
            let at = stacks[from - 1].len() - n;
            let moved = stacks[from - 1].split_off(at);
            stacks[to - 1].extend(moved);
        }
        if from != to {
            let at = one_by_one[to - 1].len() - n;
            one_by_one[to - 1][at ..].reverse();
        }
    }

    Ok(Answers::new(top_crates(&one_by_one), top_crates(&all_at_once)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: [&str; 9] = [
        "    [D]    ",
        "[N] [C]    ",
        "[Z] [M] [P]",
        " 1   2   3 ",
        "",
        "move 1 from 2 to 1",
        "move 3 from 1 to 3",
        "move 2 from 2 to 1",
        "move 1 from 1 to 2",
    ];

    #[test]
    fn example() {
        assert_eq!(solve(&EXAMPLE).unwrap(), Answers::new("CMZ", "MCD"));
    }

    #[test]
    fn drawing_rows_may_be_short() {
        let stacks = parse_drawing(&["    [D]", "[N] [C]", "[Z] [M] [P]", " 1   2   3"]).unwrap();
        assert_eq!(stacks, vec![b"ZN".to_vec(), b"MCD".to_vec(), b"P".to_vec()]);
    }

    #[test]
    fn moving_onto_the_same_stack_changes_nothing() {
        let lines = ["[A]", "[B]", "[C]", " 1 ", "", "move 3 from 1 to 1"];
        assert_eq!(solve(&lines).unwrap(), Answers::new("A", "A"));
    }

    #[test]
    fn moving_too_many_crates_fails() {
        let mut lines = EXAMPLE.to_vec();
        lines.push("move 9 from 1 to 2");
        assert!(solve(&lines).is_err());
    }
}
