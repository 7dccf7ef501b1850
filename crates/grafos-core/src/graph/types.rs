use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque node label (city, person, user or product name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(label: impl Into<String>) -> Self {
        NodeId(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        NodeId(label.to_string())
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        NodeId(label)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Cost of traversing a single edge.
/// Always finite and non-negative once it has passed through [`Weight::checked`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    /// Cost of one hop in an unweighted graph
    pub const HOP: Weight = Weight(1.0);

    /// Validate a raw weight, returning `None` for negative or non-finite values
    pub fn checked(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Weight(value))
    }

    /// Sum of two weights, `None` when it no longer fits in a finite value
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Self::checked(self.0 + other.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order used by the priority queue
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::HOP
    }
}


impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(f64::from(value))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three graph shapes used by the example applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    DirectedWeighted,
    Undirected,
    Bipartite,
}

impl GraphKind {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::DirectedWeighted)
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::DirectedWeighted => write!(f, "directed-weighted"),
            GraphKind::Undirected => write!(f, "undirected"),
            GraphKind::Bipartite => write!(f, "bipartite"),
        }
    }
}

/// An edge as seen from one of its endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// `None` in unweighted graphs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl Edge {
    /// Traversal cost, one hop when the edge is unweighted
    pub fn cost(&self) -> Weight {
        self.weight.unwrap_or(Weight::HOP)
    }
}

/// Minimum-weight path between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Nodes from source to destination, both inclusive
    pub nodes: Vec<NodeId>,
    pub total_weight: Weight,
}

impl PathResult {
    pub fn source(&self) -> Option<&NodeId> {
        self.nodes.first()
    }

    pub fn destination(&self) -> Option<&NodeId> {
        self.nodes.last()
    }

    /// Consecutive node pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.nodes.iter().zip(self.nodes.iter().skip(1))
    }

    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Single entry of a [`DistanceMap`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopEntry {
    pub node: NodeId,
    pub hops: u32,
}

/// Hop counts from one source to every node reachable from it.
/// Entries are kept in breadth-first discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceMap {
    pub source: NodeId,
    entries: Vec<HopEntry>,
    #[serde(skip)]
    positions: HashMap<NodeId, usize>,
}

impl DistanceMap {
    pub(crate) fn new(source: NodeId) -> Self {
        let mut map = Self {
            source: source.clone(),
            entries: Vec::new(),
            positions: HashMap::new(),
        };
        map.insert(source, 0);
        map
    }

    /// Record a node the first time it is reached; later inserts are ignored
    pub(crate) fn insert(&mut self, node: NodeId, hops: u32) -> bool {
        if self.positions.contains_key(&node) {
            return false;
        }
        self.positions.insert(node.clone(), self.entries.len());
        self.entries.push(HopEntry { node, hops });
        true
    }

    pub fn get(&self, node: &str) -> Option<u32> {
        self.positions.get(node).map(|&i| self.entries[i].hops)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.positions.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HopEntry> {
        self.entries.iter()
    }

    pub fn max_hops(&self) -> u32 {
        self.entries.iter().map(|e| e.hops).max().unwrap_or(0)
    }
}
