//! Graph algorithm implementations
//!
//! - `bfs`: breadth-first hop distances and reachability
//! - `dijkstra`: weighted shortest path
//! - `path`: predecessor-chain reconstruction shared by the searches

pub mod bfs;
pub mod dijkstra;
pub mod path;

pub use bfs::{has_path, hop_distances};
pub use dijkstra::{find_shortest_route, shortest_path};
