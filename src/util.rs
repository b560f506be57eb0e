use std::str::FromStr;

use crate::error::{AocError, Result};

pub fn gcd(a: u64, b: u64) -> u64 {if b == 0 {a} else {gcd(b, a % b)}}
pub fn lcm(a: u64, b: u64) -> u64 {a / gcd(a, b) * b}

/// Least common multiple of all values; 0 when there are none.
pub fn lcm_all(vals: impl IntoIterator<Item = u64>) -> u64 {
    let mut vals = vals.into_iter();
    let Some(first) = vals.next() else {return 0};
    vals.fold(first, lcm)
}

/// Parses a trimmed token, naming the target type in the error.
pub fn num<T: FromStr>(s: &str) -> Result<T> {
    s.trim().parse().map_err(|_| AocError::Parse {
        text: s.to_owned(),
        what: std::any::type_name::<T>(),
    })
}

/// Splits lines into groups separated by blank lines. Empty groups are dropped.
pub fn sections<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    lines.split(|line| line.trim().is_empty())
         .filter(|group| !group.is_empty())
         .map(|group| group.to_vec())
         .collect()
}
