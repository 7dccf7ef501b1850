//! Error types and exit codes for grafos
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown application)
//! - 3: Data error (unknown node, wrong partition, invalid graph definition)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - node or graph definition problem (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying the example graphs
#[derive(Error, Debug)]
pub enum GrafosError {
    // Query outcomes
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    // Data errors (exit code 3)
    #[error("node not found in {graph} graph: {node}")]
    NodeNotFound { graph: String, node: String },

    #[error("{node} is not in the {expected} partition")]
    PartitionMismatch { node: String, expected: String },

    #[error("invalid {graph} graph: {reason}")]
    InvalidGraph { graph: String, reason: String },

    // Usage errors (exit code 2)
    #[error("unknown application: {0} (expected: routes, social, or recommender)")]
    UnknownApplication(String),

    #[error("unknown format: {0} (expected: human, json, or dot)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GrafosError {
    /// Create an error for a node missing from a graph
    pub fn node_not_found(graph: &str, node: impl std::fmt::Display) -> Self {
        GrafosError::NodeNotFound {
            graph: graph.to_string(),
            node: node.to_string(),
        }
    }

    /// Create an error for a graph definition that violates an invariant
    pub fn invalid_graph(graph: &str, reason: impl std::fmt::Display) -> Self {
        GrafosError::InvalidGraph {
            graph: graph.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GrafosError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GrafosError::UnknownApplication(_)
            | GrafosError::UnknownFormat(_)
            | GrafosError::UsageError(_) => ExitCode::Usage,

            GrafosError::NodeNotFound { .. }
            | GrafosError::PartitionMismatch { .. }
            | GrafosError::InvalidGraph { .. } => ExitCode::Data,

            GrafosError::NoPath { .. }
            | GrafosError::Io(_)
            | GrafosError::Json(_)
            | GrafosError::Toml(_)
            | GrafosError::FailedOperation { .. }
            | GrafosError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GrafosError::NoPath { .. } => "no_path",
            GrafosError::NodeNotFound { .. } => "node_not_found",
            GrafosError::PartitionMismatch { .. } => "partition_mismatch",
            GrafosError::InvalidGraph { .. } => "invalid_graph",
            GrafosError::UnknownApplication(_) => "unknown_application",
            GrafosError::UnknownFormat(_) => "unknown_format",
            GrafosError::UsageError(_) => "usage_error",
            GrafosError::Io(_) => "io_error",
            GrafosError::Json(_) => "json_error",
            GrafosError::Toml(_) => "toml_error",
            GrafosError::FailedOperation { .. } => "failed_operation",
            GrafosError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for grafos operations
pub type Result<T> = std::result::Result<T, GrafosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GrafosError::node_not_found("route", "Z").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GrafosError::UnknownApplication("maps".into()).exit_code(),
            ExitCode::Usage
        );
        let no_path = GrafosError::NoPath {
            from: "E".into(),
            to: "A".into(),
        };
        assert_eq!(no_path.exit_code(), ExitCode::Failure);
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = GrafosError::PartitionMismatch {
            node: "Libro".into(),
            expected: "users".into(),
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "partition_mismatch");
        assert_eq!(json["error"]["message"], "Libro is not in the users partition");
    }
}
