//! One solver per puzzle day, looked up by day number.

use crate::answer::Answers;
use crate::error::{AocError, Result};

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;

/// A day's solution over its input lines.
pub type Solver = fn(&[&str]) -> Result<Answers>;

pub const DAYS: [Solver; 11] = [
    day01::solve, day02::solve, day03::solve, day04::solve, day05::solve, day06::solve,
    day07::solve, day08::solve, day09::solve, day10::solve, day11::solve,
];

pub fn solver(day: u8) -> Result<Solver> {
    (day as usize).checked_sub(1)
        .and_then(|ix| DAYS.get(ix))
        .copied()
        .ok_or(AocError::UnknownDay(day))
}

/// Runs a day's solver over owned lines as read from an input file.
pub fn solve(day: u8, lines: &[String]) -> Result<Answers> {
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    solver(day)?(&lines)
}
