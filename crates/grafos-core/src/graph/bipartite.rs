use crate::bail_invalid_graph;
use crate::error::Result;
use crate::graph::adjacency::AdjacencyList;
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Edge, GraphKind, NodeId};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One side of a bipartite graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Users,
    Products,
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Users => write!(f, "users"),
            Partition::Products => write!(f, "products"),
        }
    }
}

/// Undirected graph whose nodes split into users and products,
/// with every edge crossing the two groups
#[derive(Debug, Clone)]
pub struct BipartiteGraph {
    name: String,
    adjacency: AdjacencyList,
    partitions: HashMap<NodeId, Partition>,
}

impl BipartiteGraph {
    /// Declare both partitions up front; edges may only join declared nodes
    pub fn new<U, P, S>(name: impl Into<String>, users: U, products: P) -> Result<Self>
    where
        U: IntoIterator<Item = S>,
        P: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        let mut graph = Self {
            name: name.into(),
            adjacency: AdjacencyList::new(false),
            partitions: HashMap::new(),
        };
        for user in users {
            graph.declare(user.into(), Partition::Users)?;
        }
        for product in products {
            graph.declare(product.into(), Partition::Products)?;
        }
        Ok(graph)
    }

    fn declare(&mut self, id: NodeId, partition: Partition) -> Result<()> {
        if let Some(existing) = self.partitions.get(&id) {
            if *existing != partition {
                bail_invalid_graph!(&self.name, "{} declared as both user and product", id);
            }
            return Ok(());
        }
        self.partitions.insert(id.clone(), partition);
        self.adjacency.add_node(id);
        Ok(())
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        let (Some(pa), Some(pb)) = (self.partitions.get(&a), self.partitions.get(&b)) else {
            let missing = if self.partitions.contains_key(&a) { &b } else { &a };
            bail_invalid_graph!(&self.name, "edge {} -- {} uses undeclared node {}", a, b, missing);
        };
        if pa == pb {
            bail_invalid_graph!(
                &self.name,
                "edge {} -- {} joins two {} (edges must cross partitions)",
                a,
                b,
                pa
            );
        }
        self.adjacency.add_edge(a, b, None);
        Ok(())
    }

    pub fn with_edges<I, S>(mut self, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<NodeId>,
    {
        for (a, b) in edges {
            self.add_edge(a.into(), b.into())?;
        }
        Ok(self)
    }

    pub fn partition_of(&self, id: &str) -> Option<Partition> {
        self.partitions.get(id).copied()
    }

    /// Nodes of one partition in declaration order
    pub fn members(&self, partition: Partition) -> Vec<&NodeId> {
        self.adjacency
            .nodes()
            .iter()
            .filter(|n| self.partitions.get(*n) == Some(&partition))
            .collect()
    }

    pub fn users(&self) -> Vec<&NodeId> {
        self.members(Partition::Users)
    }

    pub fn products(&self) -> Vec<&NodeId> {
        self.members(Partition::Products)
    }

    pub fn neighbors(&self, id: &str) -> Vec<NodeId> {
        self.adjacency
            .outbound_edges(id)
            .into_iter()
            .map(|e| e.to)
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }
}

impl GraphProvider for BipartiteGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> GraphKind {
        GraphKind::Bipartite
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
    use crate::error::GrafosError;

    fn shop() -> BipartiteGraph {
        BipartiteGraph::new("recommender", ["Luis", "Ana"], ["Libro", "Laptop"])
            .unwrap()
            .with_edges([("Luis", "Laptop"), ("Ana", "Libro")])
            .unwrap()
    }

    #[test]
    fn test_partitions_in_declaration_order() {
        let graph = shop();
        let users: Vec<&str> = graph.users().into_iter().map(NodeId::as_str).collect();
        let products: Vec<&str> = graph.products().into_iter().map(NodeId::as_str).collect();
        assert_eq!(users, vec!["Luis", "Ana"]);
        assert_eq!(products, vec!["Libro", "Laptop"]);
        assert_eq!(graph.partition_of("Laptop"), Some(Partition::Products));
        assert_eq!(graph.partition_of("Marta"), None);
    }

    #[test]
    fn test_same_partition_edge_rejected() {
        let err = shop()
            .with_edges([("Luis", "Ana")])
            .unwrap_err();
        assert!(matches!(err, GrafosError::InvalidGraph { .. }));
        assert!(err.to_string().contains("joins two users"));
    }

    #[test]
    fn test_undeclared_node_rejected() {
        let err = shop().with_edges([("Luis", "Tablet")]).unwrap_err();
        assert!(err.to_string().contains("undeclared node Tablet"));
    }

    #[test]
    fn test_label_in_both_partitions_rejected() {
        let err = BipartiteGraph::new("recommender", ["Luis"], ["Luis"]).unwrap_err();
        assert!(err.to_string().contains("both user and product"));
    }

    #[test]
    fn test_edges_are_undirected() {
        let graph = shop();
        assert_eq!(graph.neighbors("Laptop"), vec![NodeId::from("Luis")]);
        assert_eq!(graph.edge_count(), 2);
    }
}
