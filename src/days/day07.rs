//! Directory sizes from a shell transcript.
//!
//! Directories live in an arena and refer to their parent by index. A child
//! is always created after its parent, so summing sizes from the back of the
//! arena folds every subtree into its root in one pass.

use rustc_hash::FxHashMap;

use crate::answer::Answers;
use crate::error::{AocError, Result};
use crate::util::num;

const DISK: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;
const SMALL: u64 = 100_000;

#[derive(Debug, Default)]
struct Dir {
    parent: Option<usize>,
    children: FxHashMap<String, usize>,
    files: FxHashMap<String, u64>,
}

#[derive(Debug)]
struct Tree {dirs: Vec<Dir>}

impl Tree {
    fn new() -> Self {Tree {dirs: vec![Dir::default()]}}

    fn child(&mut self, at: usize, name: &str) -> usize {
        if let Some(&ix) = self.dirs[at].children.get(name) {return ix}
        let ix = self.dirs.len();
        self.dirs.push(Dir {parent: Some(at), ..Dir::default()});
        self.dirs[at].children.insert(name.to_owned(), ix);
        ix
    }

    /// Total size of every directory, indexed like the arena.
    fn sizes(&self) -> Vec<u64> {
        let mut sizes: Vec<u64> = self.dirs.iter().map(|d| d.files.values().sum()).collect();
        for ix in (1 .. self.dirs.len()).rev() {
            if let Some(parent) = self.dirs[ix].parent {sizes[parent] += sizes[ix]}
        }
        sizes
    }
}

fn parse(lines: &[&str]) -> Result<Tree> {
    let mut tree = Tree::new();
    let mut cwd = 0;
    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        match line.split_whitespace().collect::<Vec<_>>()[..] {
            ["$", "cd", "/"] => cwd = 0,
            ["$", "cd", ".."] => cwd = tree.dirs[cwd].parent.ok_or_else(||
                AocError::Malformed("cd .. from the root".into())
            )?,
            ["$", "cd", name] => cwd = tree.child(cwd, name),
            ["$", "ls"] => (),
            ["dir", name] => {tree.child(cwd, name);},
            [size, name] => {tree.dirs[cwd].files.insert(name.to_owned(), num(size)?);},
            _ => return Err(AocError::malformed(line))
        }
    }
    Ok(tree)
}

pub fn solve(lines: &[&str]) -> Result<Answers> {
    let sizes = parse(lines)?.sizes();
    let small: u64 = sizes.iter().filter(|&&s| s <= SMALL).sum();

    let used = sizes[0];
    let missing = NEEDED.saturating_sub(DISK.saturating_sub(used));
    let freed = sizes.iter().copied().filter(|&s| s >= missing).min().unwrap_or(used);
    Ok(Answers::new(small, freed))
}
