use crate::error::{GrafosError, Result};
use crate::graph::algos::path::{reconstruct_path, PredecessorInfo};
use crate::graph::directed::DirectedGraph;
use crate::graph::types::{NodeId, PathResult, Weight};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost).
/// Equal costs fall back to node insertion position so pops are deterministic.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub position: usize,
    pub accumulated_cost: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// State tracked during the search
struct DijkstraState {
    settled: HashSet<NodeId>,
    best_costs: HashMap<NodeId, Weight>,
    predecessors: HashMap<NodeId, PredecessorInfo>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(from: &str, position: usize) -> Self {
        let mut state = Self {
            settled: HashSet::new(),
            best_costs: HashMap::new(),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
        };
        state.best_costs.insert(NodeId::from(from), Weight::ZERO);
        state.heap.push(Reverse(HeapEntry {
            node_id: NodeId::from(from),
            position,
            accumulated_cost: Weight::ZERO,
        }));
        state
    }

    /// Relax one edge; a predecessor is only replaced on a strictly smaller cost
    fn relax(
        &mut self,
        current: &NodeId,
        neighbor: NodeId,
        position: usize,
        new_cost: Weight,
        edge_weight: Weight,
    ) {
        if self.settled.contains(&neighbor) {
            return;
        }
        let improves = self
            .best_costs
            .get(&neighbor)
            .is_none_or(|existing| new_cost.total_cmp(existing) == Ordering::Less);
        if !improves {
            return;
        }

        self.best_costs.insert(neighbor.clone(), new_cost);
        self.predecessors.insert(
            neighbor.clone(),
            PredecessorInfo {
                pred: current.clone(),
                edge_weight,
            },
        );
        self.heap.push(Reverse(HeapEntry {
            node_id: neighbor,
            position,
            accumulated_cost: new_cost,
        }));
    }
}

/// Minimum-weight path from `from` to `to` over any provider.
/// Both nodes must exist; an unreachable destination yields [`GrafosError::NoPath`].
#[tracing::instrument(skip(provider), fields(graph = %provider.name(), from = %from, to = %to))]
pub fn shortest_path(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<PathResult> {
    let from_position = provider.require(from)?;
    provider.require(to)?;

    let mut state = DijkstraState::new(from, from_position);
    // A sum past f64::MAX cannot be compared, so that extension is skipped
    let mut overflowed = false;

    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        accumulated_cost,
        ..
    })) = state.heap.pop()
    {
        // Stale entry left behind by a later improvement
        if !state.settled.insert(current_id.clone()) {
            continue;
        }

        if current_id.as_str() == to {
            break;
        }

        for edge in provider.outbound_edges(current_id.as_str()) {
            let Some(position) = provider.position(edge.to.as_str()) else {
                continue;
            };
            let edge_weight = edge.cost();
            let Some(new_cost) = accumulated_cost.checked_add(edge_weight) else {
                tracing::warn!(from = %current_id, to = %edge.to, "route cost overflows");
                overflowed = true;
                continue;
            };
            state.relax(&current_id, edge.to, position, new_cost, edge_weight);
        }
    }

    if !state.settled.contains(to) {
        if overflowed {
            return Err(GrafosError::invalid_graph(
                provider.name(),
                format!("total weight of a route from {from} to {to} overflows"),
            ));
        }
        tracing::debug!(from, to, "destination unreachable");
        return Err(GrafosError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let (nodes, total_weight) =
        reconstruct_path(from, to, &state.predecessors).ok_or_else(|| GrafosError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        })?;

    tracing::debug!(hops = nodes.len() - 1, total = %total_weight, "route found");

    Ok(PathResult {
        nodes,
        total_weight,
    })
}

/// Shortest route between two cities of a directed weighted graph
pub fn find_shortest_route(graph: &DirectedGraph, from: &str, to: &str) -> Result<PathResult> {
    shortest_path(graph, from, to)
}
