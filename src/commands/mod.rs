//! CLI commands for grafos

pub mod apps;
pub mod dispatch;
pub mod recommend;
pub mod route;
pub mod social;
