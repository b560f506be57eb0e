use crate::answer::Answers;
use crate::error::{AocError, Result};
use crate::util::num;

type Range = (u32, u32);

fn parse_range(s: &str) -> Result<Range> {
    let (lo, hi) = s.split_once('-').ok_or_else(|| AocError::malformed(s))?;
    let (lo, hi) = (num(lo)?, num(hi)?);
    if lo > hi {return Err(AocError::Malformed(format!("empty section range {}", s)))}
    Ok((lo, hi))
}

fn contains(a: Range, b: Range) -> bool {a.0 <= b.0 && b.1 <= a.1}
fn overlaps(a: Range, b: Range) -> bool {a.0 <= b.1 && b.0 <= a.1}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let mut contained = 0usize;
    let mut overlapping = 0usize;
    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let (a, b) = line.split_once(',').ok_or_else(|| AocError::malformed(line))?;
        let (a, b) = (parse_range(a)?, parse_range(b)?);
        if contains(a, b) || contains(b, a) {contained += 1}
        if overlaps(a, b) {overlapping += 1}
    }
    Ok(Answers::new(contained, overlapping))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let lines = ["2-4,6-8", "2-3,4-5", "5-7,7-9", "2-8,3-7", "6-6,4-6", "2-6,4-8"];
        assert_eq!(solve(&lines).unwrap(), Answers::new(2usize, 4usize));
    }

    #[test]
    fn touching_ranges_overlap() {
        assert!(overlaps((1, 3), (3, 5)));
        assert!(!overlaps((1, 2), (3, 5)));
        assert!(contains((4, 4), (4, 4)));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(solve(&["4-2,1-1"]).is_err());
    }
}
