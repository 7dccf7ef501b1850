//! Error macros for grafos

/// Macro for rejecting a graph definition
#[macro_export]
macro_rules! bail_invalid_graph {
    ($graph:expr, $($reason:tt)+) => {
        return Err($crate::error::GrafosError::invalid_graph(
            $graph,
            format!($($reason)+),
        ))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GrafosError::UsageError($msg.to_string()))
    };
}
