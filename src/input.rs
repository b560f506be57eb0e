//! Locating and loading puzzle inputs.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AocError, Result};

/// Which input of a day to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The worked example from the puzzle text.
    Test,
    /// The personal puzzle input.
    Real,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {Variant::Test => "test", Variant::Real => "real"})
    }
}

/// `day{N}.in` for the real input, `day{N}test.in` for the example.
pub fn input_path(dir: &Path, day: u8, variant: Variant) -> PathBuf {
    match variant {
        Variant::Real => dir.join(format!("day{}.in", day)),
        Variant::Test => dir.join(format!("day{}test.in", day)),
    }
}

/// Reads a whole file into lines, without line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        debug!(path = %path.display(), %source, "failed to load input");
        AocError::Input {path: path.to_owned(), source}
    })?;
    let lines: Vec<String> = contents.lines().map(str::to_owned).collect();
    debug!(path = %path.display(), lines = lines.len(), "loaded input");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_the_day_naming() {
        let dir = Path::new("input");
        assert_eq!(input_path(dir, 7, Variant::Real), Path::new("input/day7.in"));
        assert_eq!(input_path(dir, 11, Variant::Test), Path::new("input/day11test.in"));
    }

    #[test]
    fn read_lines_strips_terminators() {
        let path = std::env::temp_dir().join(format!("aoc2022-read-lines-{}.in", std::process::id()));
        std::fs::write(&path, "1000\r\n2000\n\n3000\n").unwrap();
        let lines = read_lines(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(lines, ["1000", "2000", "", "3000"]);
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = read_lines(Path::new("definitely/not/here/day99.in")).unwrap_err();
        assert!(matches!(err, AocError::Input {..}));
    }
}
