use crate::answer::Answers;
use crate::error::{AocError, Result};

// Shapes and outcomes are both 0..3: rock/paper/scissors, lose/draw/win.
// `shape - opponent + 1` taken mod 3 is the outcome of playing `shape`.

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let mut by_shape = 0u32;
    let mut by_outcome = 0u32;
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let &[them, b' ', me] = line.trim().as_bytes() else {return Err(AocError::malformed(line))};
        let (them, me) = match (them, me) {
            (b'A' ..= b'C', b'X' ..= b'Z') => ((them - b'A') as u32, (me - b'X') as u32),
            _ => return Err(AocError::malformed(line))
        };

        let outcome = (me + 4 - them) % 3;
        by_shape += me + 1 + 3 * outcome;

        let shape = (them + me + 2) % 3;
        by_outcome += shape + 1 + 3 * me;
    }
    Ok(Answers::new(by_shape, by_outcome))
}
