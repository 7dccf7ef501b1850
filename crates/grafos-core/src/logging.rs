//! Structured logging on stderr
//!
//! Filter precedence: `GRAFOS_LOG`, then `RUST_LOG`, then the CLI flags.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides every other log setting
pub const LOG_ENV: &str = "GRAFOS_LOG";

/// Crates whose events a bare level applies to
const CRATES: [&str; 2] = ["grafos", "grafos_core"];

/// Log elapsed time since `$start` at trace level.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let catalog = GraphCatalog::from_config(&config)?;
/// trace_time!(start, "load_catalog");
/// trace_time!(start, "route", from = from, to = to);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize the global subscriber from the CLI flags.
/// An explicit `log_level` wins over `verbose`.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = log_level.unwrap_or(if verbose { "debug" } else { "warn" });
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(directives_for(level)));

    let json_layer = log_json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
    });
    let compact_layer = (!log_json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .try_init()?;

    Ok(())
}

/// Expand a bare level like `debug` into per-crate directives
fn directives_for(level: &str) -> String {
    if level.contains('=') {
        return level.to_string();
    }
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_expands_to_both_crates() {
        assert_eq!(directives_for("debug"), "grafos=debug,grafos_core=debug");
    }

    #[test]
    fn test_explicit_directive_kept() {
        assert_eq!(directives_for("grafos_core=trace"), "grafos_core=trace");
    }

    #[test]
    fn test_directives_parse_as_filter() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(EnvFilter::try_new(directives_for(level)).is_ok());
        }
    }
}
