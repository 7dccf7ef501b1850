//! Recommend command: products a user has interacted with

use std::collections::BTreeSet;
use std::io::Write;

use crate::cli::{Cli, OutputFormat};
use grafos_core::catalog::GraphCatalog;
use grafos_core::diagram::DotWriter;
use grafos_core::error::Result;
use grafos_core::graph::NodeId;
use grafos_core::recommend::{direct_interactions, BASIC_SUGGESTION};

/// Execute the recommend command, falling back to the catalog's default user
pub fn execute(cli: &Cli, catalog: &GraphCatalog, user: Option<&str>) -> Result<()> {
    let user = user.unwrap_or_else(|| catalog.default_user().as_str());
    let products = direct_interactions(catalog.recommender(), user)?;

    match cli.format {
        OutputFormat::Human => output_human(cli, user, &products),
        OutputFormat::Json => output_json(user, &products)?,
        OutputFormat::Dot => {
            let mut stdout = std::io::stdout().lock();
            DotWriter::new().write_recommender(&mut stdout, catalog.recommender(), Some(user))?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn output_human(cli: &Cli, user: &str, products: &BTreeSet<NodeId>) {
    if products.is_empty() {
        println!("No interactions found for {}", user);
    } else {
        println!("Products connected to {}:", user);
        for product in products {
            println!("  {}", product);
        }
    }

    if !cli.quiet {
        println!();
        println!("{}", BASIC_SUGGESTION);
    }
}

fn output_json(user: &str, products: &BTreeSet<NodeId>) -> Result<()> {
    let output = serde_json::json!({
        "user": user,
        "products": products,
        "suggestion": BASIC_SUGGESTION,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
