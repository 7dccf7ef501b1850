//! Route command: shortest route between two cities

use std::io::Write;

use crate::cli::{Cli, OutputFormat};
use grafos_core::catalog::GraphCatalog;
use grafos_core::diagram::DotWriter;
use grafos_core::error::{GrafosError, Result};
use grafos_core::graph::{find_shortest_route, PathResult};

/// Execute the route command.
/// An unreachable destination is reported as a normal outcome, not an error.
pub fn execute(cli: &Cli, catalog: &GraphCatalog, from: &str, to: &str) -> Result<()> {
    let route = match find_shortest_route(catalog.routes(), from, to) {
        Ok(path) => Some(path),
        Err(GrafosError::NoPath { .. }) => None,
        Err(e) => return Err(e),
    };

    match cli.format {
        OutputFormat::Human => output_human(from, to, route.as_ref()),
        OutputFormat::Json => output_json(from, to, route.as_ref())?,
        OutputFormat::Dot => {
            if route.is_none() && !cli.quiet {
                eprintln!("No path between {} and {}", from, to);
            }
            let mut stdout = std::io::stdout().lock();
            DotWriter::new().write_routes(&mut stdout, catalog.routes(), route.as_ref())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn output_human(from: &str, to: &str, route: Option<&PathResult>) {
    match route {
        Some(path) => {
            let stops: Vec<&str> = path.nodes.iter().map(|n| n.as_str()).collect();
            println!(
                "Shortest route: {} (distance: {})",
                stops.join(" → "),
                path.total_weight
            );
        }
        None => println!("No path between {} and {}", from, to),
    }
}

fn output_json(from: &str, to: &str, route: Option<&PathResult>) -> Result<()> {
    let output = match route {
        Some(path) => serde_json::json!({
            "from": from,
            "to": to,
            "found": true,
            "path": path.nodes,
            "distance": path.total_weight,
            "hops": path.hop_count(),
        }),
        None => serde_json::json!({
            "from": from,
            "to": to,
            "found": false,
            "path": [],
            "distance": null,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
