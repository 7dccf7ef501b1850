//! Command implementations for all grafos commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{apps, recommend, route, social};
use grafos_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Apps => apps::execute_apps(ctx.cli),
            Commands::Nodes { app } => {
                let catalog = ctx.load_catalog()?;
                apps::execute_nodes(ctx.cli, &catalog, *app)
            }
            Commands::Route { from, to } => {
                let catalog = ctx.load_catalog()?;
                route::execute(ctx.cli, &catalog, from, to)
            }
            Commands::Social { person } => {
                let catalog = ctx.load_catalog()?;
                social::execute(ctx.cli, &catalog, person)
            }
            Commands::Recommend { user } => {
                let catalog = ctx.load_catalog()?;
                recommend::execute(ctx.cli, &catalog, user.as_deref())
            }
        }
    }
}
