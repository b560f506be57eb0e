use crate::answer::Answers;
use crate::error::{AocError, Result};

/// Characters consumed up to the end of the first window of `width`
/// distinct letters.
fn marker_end(signal: &[u8], width: usize) -> Option<usize> {
    signal.windows(width).position(|window|
        window.iter().fold(0u32, |seen, c| seen | 1 << (c - b'a')).count_ones() as usize == width
    ).map(|start| start + width)
}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let signal = lines.iter().map(|l| l.trim()).find(|l| !l.is_empty()).unwrap_or("").as_bytes();
    if let Some(c) = signal.iter().find(|c| !c.is_ascii_lowercase()) {
        return Err(AocError::Malformed(format!("unexpected signal character {:?}", *c as char)));
    }
    let find = |width| marker_end(signal, width).ok_or_else(||
        AocError::Malformed(format!("no marker of {} distinct characters", width))
    );
    Ok(Answers::new(find(4)?, find(14)?))
}
