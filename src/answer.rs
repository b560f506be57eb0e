use std::fmt;

/// One puzzle answer. Most days produce numbers; a few produce text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Int(i64),
    Text(String),
}

impl Answer {
    pub fn is_multiline(&self) -> bool {
        matches!(self, Answer::Text(s) if s.contains('\n'))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Answer::Int(n) => write!(f, "{}", n),
            Answer::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Answer {fn from(n: i64) -> Self {Answer::Int(n)}}
// Values past i64::MAX keep their digits as text rather than wrapping.
impl From<u64> for Answer {
    fn from(n: u64) -> Self {i64::try_from(n).map_or_else(|_| Answer::Text(n.to_string()), Answer::Int)}
}
impl From<usize> for Answer {fn from(n: usize) -> Self {Answer::from(n as u64)}}
impl From<u32> for Answer {fn from(n: u32) -> Self {Answer::Int(n.into())}}
impl From<String> for Answer {fn from(s: String) -> Self {Answer::Text(s)}}
impl From<&str> for Answer {fn from(s: &str) -> Self {Answer::Text(s.to_owned())}}

/// Both answers of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub part1: Answer,
    pub part2: Answer,
}

impl Answers {
    pub fn new(part1: impl Into<Answer>, part2: impl Into<Answer>) -> Self {
        Answers {part1: part1.into(), part2: part2.into()}
    }
}
