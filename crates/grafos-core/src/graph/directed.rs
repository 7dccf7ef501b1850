use crate::bail_invalid_graph;
use crate::error::Result;
use crate::graph::adjacency::AdjacencyList;
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Edge, GraphKind, NodeId, Weight};

/// Directed graph with non-negative edge weights (the route graph)
#[derive(Debug, Clone)]
pub struct DirectedGraph {
    name: String,
    adjacency: AdjacencyList,
}

impl DirectedGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjacency: AdjacencyList::new(true),
        }
    }

    /// Build from `(from, to, weight)` triples, rejecting negative or non-finite weights
    pub fn from_weighted_edges<I, S>(name: impl Into<String>, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<NodeId>,
    {
        let mut graph = Self::new(name);
        for (from, to, weight) in edges {
            graph.add_edge(from.into(), to.into(), weight)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        let Some(weight) = Weight::checked(weight) else {
            bail_invalid_graph!(
                &self.name,
                "edge {} -> {} has invalid weight {} (must be finite and non-negative)",
                from,
                to,
                weight
            );
        };
        self.adjacency.add_edge(from, to, Some(weight));
        Ok(())
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }
}

impl GraphProvider for DirectedGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> GraphKind {
        GraphKind::DirectedWeighted
    }

    fn nodes(&self) -> &[NodeId] {
        self.adjacency.nodes()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.adjacency.position(id)
    }

    fn outbound_edges(&self, id: &str) -> Vec<Edge> {
        self.adjacency.outbound_edges(id)
    }

    fn edges(&self) -> Vec<Edge> {
        self.adjacency.edges()
    }
}
