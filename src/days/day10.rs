use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::answer::Answers;
use crate::error::{AocError, Result};
use crate::util::num;

const WIDTH: usize = 40;
const HEIGHT: usize = 6;

/// Splits an instruction into at most two tokens; longer lines are malformed.
fn tokens(line: &str) -> Result<ArrayVec<&str, 2>> {
    let mut out = ArrayVec::new();
    for token in line.split_whitespace() {
        out.try_push(token).map_err(|_| AocError::malformed(line))?;
    }
    Ok(out)
}

/// The value of X during each cycle, first cycle first.
fn register_trace(lines: &[&str]) -> Result<Vec<i64>> {
    let mut x = 1;
    let mut trace = vec![];
    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        match tokens(line)?[..] {
            ["noop"] => trace.push(x),
            ["addx", v] => {
                trace.extend([x, x]);
                x += num::<i64>(v)?;
            },
            _ => return Err(AocError::malformed(line))
        }
    }
    trace.push(x);
    Ok(trace)
}

fn signal_strength(trace: &[i64]) -> i64 {
    (20 ..= 220).step_by(40).filter_map(|cycle| trace.get(cycle - 1).map(|x| cycle as i64 * x)).sum()
}

fn render(trace: &[i64]) -> String {
    let last = trace.last().copied().unwrap_or(1);
    (0 .. HEIGHT).map(|row| {
        (0 .. WIDTH).map(|col| {
            let x = trace.get(row * WIDTH + col).copied().unwrap_or(last);
            if (x - col as i64).abs() <= 1 {'#'} else {'.'}
        }).collect::<String>()
    }).join("\n")
}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let trace = register_trace(lines)?;
    Ok(Answers::new(signal_strength(&trace), render(&trace)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_program_trace() {
        let trace = register_trace(&["noop", "addx 3", "addx -5"]).unwrap();
        assert_eq!(trace, [1i64, 1, 1, 4, 4, -1]);
    }

    #[test]
    fn idle_program() {
        let lines = vec!["noop"; 240];
        let answers = solve(&lines).unwrap();
        assert_eq!(answers.part1, 720i64.into());
        let row = format!("###{}", ".".repeat(WIDTH - 3));
        assert_eq!(answers.part2, vec![row; HEIGHT].join("\n").into());
    }

    #[test]
    fn sprite_follows_x() {
        // X moves to 10 from cycle 3 onwards
        let screen = render(&register_trace(&["addx 9"]).unwrap());
        let first = screen.lines().next().unwrap();
        assert_eq!(&first[.. 12], "##.......###");
    }

    #[test]
    fn unknown_instruction_is_rejected() {
        assert!(solve(&["mul 3"]).is_err());
        assert!(solve(&["addx 3 4"]).is_err());
        assert_eq!(tokens("addx -5").unwrap().as_slice(), ["addx", "-5"]);
    }
}
