//! Path reconstruction utilities for graph search

use crate::graph::types::{NodeId, Weight};
use std::collections::HashMap;

pub struct PredecessorInfo {
    pub pred: NodeId,
    pub edge_weight: Weight,
}

/// Walk predecessors back from `to` until `from`.
/// Returns nodes in source-to-destination order and the summed edge weight,
/// or `None` when the chain does not lead back to `from` or the sum overflows.
pub fn reconstruct_path(
    from: &str,
    to: &str,
    predecessors: &HashMap<NodeId, PredecessorInfo>,
) -> Option<(Vec<NodeId>, Weight)> {
    let mut nodes = vec![NodeId::from(to)];
    let mut total = Weight::ZERO;
    let mut current = to;

    while current != from {
        let info = predecessors.get(current)?;
        total = total.checked_add(info.edge_weight)?;
        nodes.push(info.pred.clone());
        current = info.pred.as_str();
        // Each step adds a distinct node, so a longer walk means a cycle
        if nodes.len() > predecessors.len() + 1 {
            return None;
        }
    }

    nodes.reverse();
    Some((nodes, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(node: &str, weight: u32) -> PredecessorInfo {
        PredecessorInfo {
            pred: node.into(),
            edge_weight: Weight::from(weight),
        }
    }

    #[test]
    fn test_reconstruct_chain() {
        let mut preds = HashMap::new();
        preds.insert(NodeId::from("C"), pred("A", 3));
        preds.insert(NodeId::from("E"), pred("C", 4));

        let (nodes, total) = reconstruct_path("A", "E", &preds).unwrap();
        let labels: Vec<&str> = nodes.iter().map(NodeId::as_str).collect();
        assert_eq!(labels, vec!["A", "C", "E"]);
        assert_eq!(total, Weight::from(7));
    }

    #[test]
    fn test_reconstruct_same_node() {
        let (nodes, total) = reconstruct_path("A", "A", &HashMap::new()).unwrap();
        assert_eq!(nodes, vec![NodeId::from("A")]);
        assert_eq!(total, Weight::ZERO);
    }

    #[test]
    fn test_reconstruct_broken_chain() {
        let mut preds = HashMap::new();
        preds.insert(NodeId::from("E"), pred("C", 4));
        assert!(reconstruct_path("A", "E", &preds).is_none());
    }
}
