//! Product recommendations over the user/product bipartite graph
//!
//! Only direct interactions are computed. Suggesting products owned by
//! similar users is not implemented; [`BASIC_SUGGESTION`] is the advisory
//! text shown in its place.

use crate::error::{GrafosError, Result};
use crate::graph::{BipartiteGraph, GraphProvider, NodeId, Partition};
use std::collections::BTreeSet;

/// Advisory shown next to the direct interactions
pub const BASIC_SUGGESTION: &str =
    "Suggestion (basic): recommend to the user a product connected to similar users.";

/// Products directly connected to `user`
#[tracing::instrument(skip(graph), fields(graph = %graph.name(), user = %user))]
pub fn direct_interactions(graph: &BipartiteGraph, user: &str) -> Result<BTreeSet<NodeId>> {
    graph.require(user)?;
    if graph.partition_of(user) != Some(Partition::Users) {
        return Err(GrafosError::PartitionMismatch {
            node: user.to_string(),
            expected: Partition::Users.to_string(),
        });
    }

    let products: BTreeSet<NodeId> = graph.neighbors(user).into_iter().collect();
    tracing::debug!(count = products.len(), "direct interactions");
    Ok(products)
}
