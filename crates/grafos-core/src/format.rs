//! Output format handling for grafos
//!
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON
//! - dot: Graphviz diagram with the query result highlighted

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrafosError;

/// Output format for grafos commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Graphviz DOT diagram
    Dot,
}

impl FromStr for OutputFormat {
    type Err = GrafosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "dot" => Ok(OutputFormat::Dot),
            other => Err(GrafosError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Dot => write!(f, "dot"),
        }
    }
}

/// "1 step" / "3 steps"
pub fn steps(hops: u32) -> String {
    if hops == 1 {
        "1 step".to_string()
    } else {
        format!("{hops} steps")
    }
}
