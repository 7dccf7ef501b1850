//! Insertion-ordered adjacency storage shared by the three graph kinds

use crate::graph::types::{Edge, NodeId, Weight};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Link {
    target: usize,
    weight: Option<Weight>,
}

/// Node list plus per-node outbound links.
/// Undirected storage records every edge on both endpoints.
#[derive(Debug, Clone, Default)]
pub(crate) struct AdjacencyList {
    directed: bool,
    nodes: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
    links: Vec<Vec<Link>>,
    /// Edge list in first-insertion order, each undirected edge once
    edges: Vec<(usize, usize)>,
}

impl AdjacencyList {
    pub(crate) fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    /// Add a node if absent, returning its position
    pub(crate) fn add_node(&mut self, id: NodeId) -> usize {
        if let Some(&pos) = self.positions.get(&id) {
            return pos;
        }
        let pos = self.nodes.len();
        self.positions.insert(id.clone(), pos);
        self.nodes.push(id);
        self.links.push(Vec::new());
        pos
    }

    /// Add an edge, adding missing endpoints.
    /// Re-adding an existing edge replaces its weight.
    pub(crate) fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Option<Weight>) {
        let u = self.add_node(from);
        let v = self.add_node(to);

        let existed = Self::upsert(&mut self.links[u], v, weight);
        if !self.directed && u != v {
            Self::upsert(&mut self.links[v], u, weight);
        }
        if !existed {
            self.edges.push((u, v));
        }
    }

    fn upsert(links: &mut Vec<Link>, target: usize, weight: Option<Weight>) -> bool {
        match links.iter_mut().find(|l| l.target == target) {
            Some(link) => {
                link.weight = weight;
                true
            }
            None => {
                links.push(Link { target, weight });
                false
            }
        }
    }

    pub(crate) fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub(crate) fn outbound_edges(&self, id: &str) -> Vec<Edge> {
        let Some(u) = self.position(id) else {
            return Vec::new();
        };
        self.links[u]
            .iter()
            .map(|link| Edge {
                from: self.nodes[u].clone(),
                to: self.nodes[link.target].clone(),
                weight: link.weight,
            })
            .collect()
    }

    pub(crate) fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|&(u, v)| {
                let weight = self.links[u]
                    .iter()
                    .find(|l| l.target == v)
                    .and_then(|l| l.weight);
                Edge {
                    from: self.nodes[u].clone(),
                    to: self.nodes[v].clone(),
                    weight,
                }
            })
            .collect()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
