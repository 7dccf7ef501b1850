use crate::error::Result;
use crate::graph::types::{DistanceMap, NodeId};
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Breadth-first hop distances from `source` to every node reachable from it.
/// Unreachable nodes are absent from the result.
#[tracing::instrument(skip(provider), fields(graph = %provider.name(), source = %source))]
pub fn hop_distances(provider: &dyn GraphProvider, source: &str) -> Result<DistanceMap> {
    provider.require(source)?;

    let mut distances = DistanceMap::new(NodeId::from(source));
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();
    queue.push_back((NodeId::from(source), 0));

    while let Some((current_id, hops)) = queue.pop_front() {
        for edge in provider.outbound_edges(current_id.as_str()) {
            if distances.insert(edge.to.clone(), hops + 1) {
                queue.push_back((edge.to, hops + 1));
            }
        }
    }

    tracing::debug!(reached = distances.len(), "hop distances computed");
    Ok(distances)
}

/// Whether `to` can be reached from `from` following edge direction
#[tracing::instrument(skip(provider), fields(graph = %provider.name(), from = %from, to = %to))]
pub fn has_path(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<bool> {
    provider.require(from)?;
    provider.require(to)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    visited.insert(NodeId::from(from));
    queue.push_back(NodeId::from(from));

    while let Some(current_id) = queue.pop_front() {
        if current_id.as_str() == to {
            return Ok(true);
        }
        for edge in provider.outbound_edges(current_id.as_str()) {
            if visited.insert(edge.to.clone()) {
                queue.push_back(edge.to);
            }
        }
    }

    Ok(false)
}
