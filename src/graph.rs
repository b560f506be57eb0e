//! Undirected graphs stored as an arena of named nodes.
//!
//! Nodes are addressed by [`NodeId`], their index in the arena, so neighbor
//! lists stay valid however the arena grows. Edges added with
//! [`Graph::add_edge`] are symmetric; [`Graph::add_arc`] adds a one-way link
//! for callers that need it.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} is not in the graph")]
    InvalidNode(usize),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub neighbors: Vec<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    by_name: FxHashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {Self::default()}

    /// Builds a graph from named edge pairs, creating nodes on first mention.
    pub fn from_edges(edges: &[(&str, &str)]) -> Self {
        let mut graph = Graph::new();
        for &(a, b) in edges {
            let a = graph.node_named(a);
            let b = graph.node_named(b);
            graph.link(a, b);
            graph.link(b, a);
        }
        graph
    }

    /// Adds a node and returns its id. Names are not required to be unique;
    /// [`Graph::find`] returns the first node with a given name.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let name = name.into();
        self.by_name.entry(name.clone()).or_insert(id);
        self.nodes.push(Node {id, name, neighbors: vec![]});
        id
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        self.check(a)?;
        self.check(b)?;
        self.link(a, b);
        if a != b {self.link(b, a)}
        Ok(())
    }

    pub fn add_arc(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;
        self.link(from, to);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {self.by_name.get(name).copied()}
    pub fn node(&self, id: NodeId) -> Option<&Node> {self.nodes.get(id.0)}
    pub fn nodes(&self) -> &[Node] {&self.nodes}
    pub fn len(&self) -> usize {self.nodes.len()}
    pub fn is_empty(&self) -> bool {self.nodes.is_empty()}

    /// One shortest path from `src` to `dst`, destination first and source
    /// excluded, so its length is the hop count. Empty when `dst` cannot be
    /// reached or equals `src`.
    pub fn shortest_path(&self, src: NodeId, dst: NodeId) -> Result<Vec<NodeId>, GraphError> {
        self.check(src)?;
        self.check(dst)?;
        let mut came_from: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut curr = vec![src];
        let mut next = vec![];
        let mut layer = 0u32;

        while !curr.is_empty() && src != dst {
            layer += 1;
            for &at in &curr {
                for &n in &self.nodes[at.0].neighbors {
                    if n == src || came_from[n.0].is_some() {continue}
                    came_from[n.0] = Some(at);
                    if n == dst {
                        debug!(layer, "destination discovered");
                        return Ok(self.backtrace(&came_from, src, dst));
                    }
                    next.push(n);
                }
            }
            curr.clear();
            std::mem::swap(&mut curr, &mut next);
        }
        debug!(src = src.0, dst = dst.0, "no path");
        Ok(vec![])
    }

    fn backtrace(&self, came_from: &[Option<NodeId>], src: NodeId, dst: NodeId) -> Vec<NodeId> {
        let mut path = vec![];
        let mut at = dst;
        while at != src {
            path.push(at);
            match came_from[at.0] {
                Some(prev) => at = prev,
                None => break,
            }
        }
        path
    }

    /// Every node reachable from `src`, `src` included, in id order.
    pub fn connected_nodes(&self, src: NodeId) -> Result<Vec<NodeId>, GraphError> {
        self.check(src)?;
        let mut visited = vec![false; self.nodes.len()];
        let mut queue = std::collections::VecDeque::from([src]);
        visited[src.0] = true;
        while let Some(at) = queue.pop_front() {
            for &n in &self.nodes[at.0].neighbors {
                if !visited[n.0] {
                    visited[n.0] = true;
                    queue.push_back(n);
                }
            }
        }
        Ok(visited.iter().enumerate().filter(|&(_, &v)| v).map(|(i, _)| NodeId(i)).collect())
    }

    fn node_named(&mut self, name: &str) -> NodeId {
        match self.find(name) {
            Some(id) => id,
            None => self.add_node(name),
        }
    }

    fn link(&mut self, from: NodeId, to: NodeId) {
        let neighbors = &mut self.nodes[from.0].neighbors;
        if !neighbors.contains(&to) {neighbors.push(to)}
    }

    fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.0 < self.nodes.len() {Ok(())} else {Err(GraphError::InvalidNode(id.0))}
    }
}
