use crate::graph::adjacency::AdjacencyList;
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Edge, GraphKind, NodeId};

/// Undirected, unweighted graph (the social graph)
#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    name: String,
    adjacency: AdjacencyList,
}

impl UndirectedGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            adjacency: AdjacencyList::new(false),
        }
    }

    pub fn from_edges<I, S>(name: impl Into<String>, edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<NodeId>,
    {
        let mut graph = Self::new(name);
        for (a, b) in edges {
            graph.add_edge(a.into(), b.into());
        }
        graph
    }

    pub fn add_node(&mut self, id: NodeId) {
        self.adjacency.add_node(id);
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.adjacency.add_edge(a, b, None);
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Neighbors of `id` in insertion order
    pub fn neighbors(&self, id: &str) -> Vec<NodeId> {
        self.adjacency
            .outbound_edges(id)
            .into_iter()
            .map(|e| e.to)
            .collect()
    }
}

impl GraphProvider for UndirectedGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> GraphKind {
        GraphKind::Undirected
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_are_symmetric() {
        let graph = UndirectedGraph::from_edges("social", [("Ana", "Luis"), ("Luis", "Carlos")]);
        let luis: Vec<String> = graph.neighbors("Luis").iter().map(|n| n.to_string()).collect();
        assert_eq!(luis, vec!["Ana", "Carlos"]);
        assert_eq!(graph.neighbors("Carlos")[0].as_str(), "Luis");
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_isolated_node() {
        let mut graph = UndirectedGraph::from_edges("social", [("Ana", "Luis")]);
        graph.add_node("Sofia".into());
        assert!(graph.contains("Sofia"));
        assert!(graph.neighbors("Sofia").is_empty());
    }
}
