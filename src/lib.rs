//! Solutions to the 2022 puzzle calendar, plus two standalone helpers: a
//! Gauss-Jordan linear solver and BFS traversals over a node arena.

pub mod answer;
pub mod days;
pub mod error;
pub mod graph;
pub mod input;
pub mod linear;
pub mod runner;
pub mod util;

pub use answer::{Answer, Answers};
pub use error::{AocError, Result};
pub use graph::{Graph, GraphError, Node, NodeId};
pub use input::Variant;
pub use linear::{Pivoting, SolveError};
pub use runner::{run, Run, RunConfig};
