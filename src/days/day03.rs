use itertools::Itertools;

use crate::answer::Answers;
use crate::error::{AocError, Result};

/// Items as a bit set indexed by priority: a..z are 1..26, A..Z are 27..52.
fn item_mask(items: &[u8]) -> Result<u64> {
    items.iter().try_fold(0u64, |mask, &c| {
        let priority = match c {
            b'a' ..= b'z' => c - b'a' + 1,
            b'A' ..= b'Z' => c - b'A' + 27,
            _ => return Err(AocError::Malformed(format!("unexpected item {:?}", c as char)))
        };
        Ok(mask | 1 << priority)
    })
}

fn common_priority(masks: impl IntoIterator<Item = u64>, context: &str) -> Result<u64> {
    let common = masks.into_iter().fold(!0u64, |a, m| a & m);
    if common.count_ones() != 1 {
        return Err(AocError::Malformed(format!("expected exactly one shared item in {:?}", context)));
    }
    Ok(common.trailing_zeros() as u64)
}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let lines = lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()).collect_vec();

    let mut halves = 0;
    for line in &lines {
        let (left, right) = line.as_bytes().split_at(line.len() / 2);
        halves += common_priority([item_mask(left)?, item_mask(right)?], line)?;
    }

    if lines.len() % 3 != 0 {
        return Err(AocError::Malformed(format!("{} rucksacks do not split into groups of three", lines.len())));
    }
    let mut badges = 0;
    for group in lines.chunks_exact(3) {
        let masks = group.iter().map(|l| item_mask(l.as_bytes())).collect::<Result<Vec<_>>>()?;
        badges += common_priority(masks, group[0])?;
    }

    Ok(Answers::new(halves, badges))
}
