//! Apps and nodes commands: what the user can pick from

use std::io::Write;

use crate::cli::{Cli, OutputFormat};
use grafos_core::bail_usage;
use grafos_core::catalog::{Application, GraphCatalog};
use grafos_core::diagram::DotWriter;
use grafos_core::error::Result;

/// List the example applications
pub fn execute_apps(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            for (i, app) in Application::ALL.iter().enumerate() {
                println!("{}. {} - {}", i + 1, app.name(), app.title());
            }
        }
        OutputFormat::Json => {
            let apps: Vec<serde_json::Value> = Application::ALL
                .iter()
                .map(|app| serde_json::json!({ "name": app.name(), "title": app.title() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&apps)?);
        }
        OutputFormat::Dot => {
            bail_usage!("dot output needs a single application; try `grafos nodes <APP> --format dot`")
        }
    }
    Ok(())
}

/// List the selectable nodes of an application, or draw its whole graph with `--format dot`
pub fn execute_nodes(cli: &Cli, catalog: &GraphCatalog, app: Application) -> Result<()> {
    let nodes = catalog.nodes(app);

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("{}:", app.title());
            }
            for node in &nodes {
                println!("{}", node);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "application": app,
                "title": app.title(),
                "graph": catalog.graph(app).kind(),
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Dot => {
            let writer = DotWriter::new();
            let mut stdout = std::io::stdout().lock();
            match app {
                Application::Routes => writer.write_routes(&mut stdout, catalog.routes(), None)?,
                Application::Social => writer.write_social(&mut stdout, catalog.social(), None)?,
                Application::Recommender => {
                    writer.write_recommender(&mut stdout, catalog.recommender(), None)?
                }
            }
            stdout.flush()?;
        }
    }

    Ok(())
}
