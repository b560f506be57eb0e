//! Loads a day's input, runs its solver and times it.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::info;

use crate::answer::Answers;
use crate::days;
use crate::error::Result;
use crate::input::{input_path, read_lines, Variant};

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory holding `day{N}.in` and `day{N}test.in`.
    pub input_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {RunConfig {input_dir: PathBuf::from("input")}}
}

#[derive(Debug)]
pub struct Run {
    pub day: u8,
    pub variant: Variant,
    pub answers: Answers,
    pub elapsed: Duration,
}

pub fn run(day: u8, variant: Variant, config: &RunConfig) -> Result<Run> {
    let solver = days::solver(day)?;
    let lines = read_lines(&input_path(&config.input_dir, day, variant))?;
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

    let time = Instant::now();
    let answers = solver(&lines)?;
    let elapsed = time.elapsed();
    info!(day, %variant, elapsed_ms = elapsed.as_secs_f64() * 1000.0, "solved");
    Ok(Run {day, variant, answers, elapsed})
}
