use crate::error::{GrafosError, Result};
use crate::graph::types::{Edge, GraphKind, NodeId};

/// Trait for providing graph adjacency to the query algorithms
pub trait GraphProvider {
    /// Short name used in error messages (`route`, `social`, ...)
    fn name(&self) -> &str;
    fn kind(&self) -> GraphKind;
    /// Nodes in insertion order
    fn nodes(&self) -> &[NodeId];
    /// Insertion position of a node, used for deterministic tie-breaking
    fn position(&self, id: &str) -> Option<usize>;
    /// Edges leaving `id`; both directions for undirected graphs
    fn outbound_edges(&self, id: &str) -> Vec<Edge>;
    /// Every edge once, in insertion order
    fn edges(&self) -> Vec<Edge>;

    fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Reject a node that is not part of this graph
    fn require(&self, id: &str) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| GrafosError::node_not_found(self.name(), id))
    }
}
