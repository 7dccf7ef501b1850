//! Graph model and queries
//!
//! Provides the three example graph shapes and the algorithms run over them:
//! - Dijkstra shortest route over a directed weighted graph
//! - BFS hop distances and reachability over any graph
//! - Graph provider trait shared by every graph kind

mod adjacency;
pub mod algos;
pub mod bipartite;
pub mod directed;
pub mod provider;
pub mod types;
pub mod undirected;

pub use algos::{find_shortest_route, has_path, hop_distances, shortest_path};
pub use bipartite::{BipartiteGraph, Partition};
pub use directed::DirectedGraph;
pub use provider::GraphProvider;
pub use types::{DistanceMap, Edge, GraphKind, HopEntry, NodeId, PathResult, Weight};
pub use undirected::UndirectedGraph;
