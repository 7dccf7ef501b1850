//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use grafos_core::catalog::GraphCatalog;
use grafos_core::config::CatalogConfig;
use grafos_core::error::Result;
use grafos_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Build the example graphs from the configured catalog, or the built-ins
    pub fn load_catalog(&self) -> Result<GraphCatalog> {
        let (config, path) = CatalogConfig::discover(self.cli.catalog.as_deref())?;
        if let Some(path) = &path {
            tracing::debug!(path = %path.display(), "catalog file");
        }
        let catalog = GraphCatalog::from_config(&config)?;
        trace_time!(self.start, "load_catalog");
        Ok(catalog)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("grafos {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Real-world applications of graph theory.");
        println!();
        println!("Run `grafos --help` for usage information.");
        Ok(())
    }
}
