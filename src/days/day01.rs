use itertools::Itertools;

use crate::answer::Answers;
use crate::error::Result;
use crate::util::{num, sections};

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let totals = sections(lines).into_iter().map(|elf|
        elf.into_iter().map(num::<u64>).sum::<Result<u64>>()
    ).collect::<Result<Vec<_>>>()?;

    let top3 = totals.iter().copied().sorted_unstable_by(|a, b| b.cmp(a)).take(3).collect_vec();
    Ok(Answers::new(top3.first().copied().unwrap_or(0), top3.iter().sum::<u64>()))
}
