//! Social command: degree of connection from one person

use std::io::Write;

use crate::cli::{Cli, OutputFormat};
use grafos_core::catalog::GraphCatalog;
use grafos_core::diagram::DotWriter;
use grafos_core::error::Result;
use grafos_core::format::steps;
use grafos_core::graph::{hop_distances, DistanceMap};

/// Execute the social command
pub fn execute(cli: &Cli, catalog: &GraphCatalog, person: &str) -> Result<()> {
    let distances = hop_distances(catalog.social(), person)?;

    match cli.format {
        OutputFormat::Human => output_human(cli, &distances),
        OutputFormat::Json => output_json(&distances)?,
        OutputFormat::Dot => {
            let mut stdout = std::io::stdout().lock();
            DotWriter::new().write_social(&mut stdout, catalog.social(), Some(person))?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn output_human(cli: &Cli, distances: &DistanceMap) {
    if !cli.quiet {
        println!("Connections from {}:", distances.source);
    }
    for entry in distances.iter() {
        println!("{}: {}", entry.node, steps(entry.hops));
    }
}

fn output_json(distances: &DistanceMap) -> Result<()> {
    let entries: Vec<serde_json::Value> = distances
        .iter()
        .map(|entry| {
            serde_json::json!({
                "person": entry.node,
                "hops": entry.hops,
            })
        })
        .collect();
    let output = serde_json::json!({
        "source": distances.source,
        "reachable": distances.len(),
        "max_hops": distances.max_hops(),
        "distances": entries,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
