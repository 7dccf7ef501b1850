//! Grafos Core Library
//!
//! Graph query layer behind the grafos classroom examples: shortest routes
//! over a directed weighted graph, hop distances in a social graph, and
//! direct interactions in a user/product bipartite graph.

pub mod catalog;
pub mod config;
pub mod diagram;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod recommend;
