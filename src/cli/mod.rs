//! CLI argument parsing for grafos
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --catalog

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use grafos_core::catalog::Application;
pub use grafos_core::format::OutputFormat;
use parse::{parse_application, parse_format};

/// Grafos - graph theory applications for the classroom
#[derive(Parser, Debug)]
#[command(name = "grafos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or dot
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, grafos_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Catalog file redefining the example graphs
    #[arg(long, global = true, env = "GRAFOS_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the example applications
    Apps,

    /// List the nodes that can be selected in an application
    Nodes {
        /// Application: routes, social, or recommender
        #[arg(value_parser = parse_application)]
        app: Application,
    },

    /// Shortest route between two cities (Dijkstra)
    Route {
        /// Origin city
        from: String,

        /// Destination city
        to: String,
    },

    /// Degree of connection from one person to everyone reachable
    Social {
        /// Person to measure from
        person: String,
    },

    /// Products a user has interacted with
    Recommend {
        /// User to look up (defaults to the catalog's default user)
        user: Option<String>,
    },
}
