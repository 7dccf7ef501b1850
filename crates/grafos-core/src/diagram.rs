//! # Diagram
//!
//! Renders the example graphs in the Dot-Format used by
//! [GraphViz](https://graphviz.org/), with the result of a query
//! highlighted: the route drawn in red, the selected person outlined, or
//! the selected user's interactions emphasized.
//!
//! ```ignore
//! let path = find_shortest_route(catalog.routes(), "A", "E")?;
//! DotWriter::new().write_routes(&mut std::io::stdout(), catalog.routes(), Some(&path))?;
//! ```
use std::collections::HashSet;
use std::fmt;
use std::io::{Result, Write};

use crate::graph::{BipartiteGraph, DirectedGraph, Edge, GraphProvider, NodeId, PathResult};

/// Colors used by the writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotColor {
    SkyBlue,
    LightGreen,
    LightBlue,
    Salmon,
    Red,
}

impl fmt::Display for DotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DotColor::SkyBlue => "skyblue",
            DotColor::LightGreen => "lightgreen",
            DotColor::LightBlue => "lightblue",
            DotColor::Salmon => "salmon",
            DotColor::Red => "red",
        };
        f.write_str(name)
    }
}

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Color of highlighted edges and outlines
    highlight: DotColor,
    /// Pen width of highlighted edges
    highlight_width: u32,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            highlight: DotColor::Red,
            highlight_width: 3,
        }
    }
}

/// Quote and escape a node label
fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Unordered edge key for undirected matching
fn undirected_key(a: &NodeId, b: &NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    fn start_graph<W: Write>(&self, writer: &mut W, name: &str, directed: bool) -> Result<()> {
        let graph_type = if directed { "digraph" } else { "graph" };
        writeln!(writer, "{graph_type} {} {{", quote(name))?;
        writeln!(writer, "  node [style=filled, fontname=\"Helvetica-Bold\"];")
    }

    fn finish_graph<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "}}")
    }

    fn write_node<W: Write>(
        &self,
        writer: &mut W,
        node: &NodeId,
        fill: DotColor,
        outlined: bool,
    ) -> Result<()> {
        let outline = if outlined {
            format!(", color={}, penwidth={}", self.highlight, self.highlight_width)
        } else {
            String::new()
        };
        writeln!(
            writer,
            "  {} [fillcolor={fill}{outline}];",
            quote(node.as_str())
        )
    }

    fn write_edge<W: Write>(
        &self,
        writer: &mut W,
        edge: &Edge,
        directed: bool,
        highlighted: bool,
    ) -> Result<()> {
        let edge_dir = if directed { "->" } else { "--" };
        let mut attrs = Vec::new();
        if let Some(weight) = edge.weight {
            attrs.push(format!("label=\"{weight}\""));
        }
        if highlighted {
            attrs.push(format!("color={}", self.highlight));
            attrs.push(format!("penwidth={}", self.highlight_width));
        }
        let attrs = if attrs.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attrs.join(", "))
        };
        writeln!(
            writer,
            "  {} {edge_dir} {}{attrs};",
            quote(edge.from.as_str()),
            quote(edge.to.as_str())
        )
    }

    /// Route graph with weights as labels and the path (if any) in the highlight color
    pub fn write_routes<W: Write>(
        &self,
        writer: &mut W,
        graph: &DirectedGraph,
        path: Option<&PathResult>,
    ) -> Result<()> {
        let on_path: HashSet<(&NodeId, &NodeId)> =
            path.map(|p| p.edges().collect()).unwrap_or_default();

        self.start_graph(writer, graph.name(), true)?;
        for node in graph.nodes() {
            self.write_node(writer, node, DotColor::SkyBlue, false)?;
        }
        for edge in graph.edges() {
            let highlighted = on_path.contains(&(&edge.from, &edge.to));
            self.write_edge(writer, &edge, true, highlighted)?;
        }
        self.finish_graph(writer)
    }

    /// Social graph with the selected person outlined
    pub fn write_social<W: Write>(
        &self,
        writer: &mut W,
        graph: &dyn GraphProvider,
        selected: Option<&str>,
    ) -> Result<()> {
        let directed = graph.kind().is_directed();
        self.start_graph(writer, graph.name(), directed)?;
        for node in graph.nodes() {
            let outlined = selected == Some(node.as_str());
            self.write_node(writer, node, DotColor::LightGreen, outlined)?;
        }
        for edge in graph.edges() {
            self.write_edge(writer, &edge, directed, false)?;
        }
        self.finish_graph(writer)
    }

    /// Bipartite graph with users and products ranked side by side and
    /// the selected user's interactions highlighted
    pub fn write_recommender<W: Write>(
        &self,
        writer: &mut W,
        graph: &BipartiteGraph,
        selected: Option<&str>,
    ) -> Result<()> {
        let picked: HashSet<(NodeId, NodeId)> = match selected {
            Some(user) => graph
                .outbound_edges(user)
                .iter()
                .map(|e| undirected_key(&e.from, &e.to))
                .collect(),
            None => HashSet::new(),
        };

        self.start_graph(writer, graph.name(), false)?;
        writeln!(writer, "  rankdir=LR;")?;
        for (group, fill) in [
            (graph.users(), DotColor::LightBlue),
            (graph.products(), DotColor::Salmon),
        ] {
            writeln!(writer, "  {{ rank=same;")?;
            for node in group {
                let outlined = selected == Some(node.as_str());
                self.write_node(writer, node, fill, outlined)?;
            }
            writeln!(writer, "  }}")?;
        }
        for edge in graph.edges() {
            let highlighted = picked.contains(&undirected_key(&edge.from, &edge.to));
            self.write_edge(writer, &edge, false, highlighted)?;
        }
        self.finish_graph(writer)
    }
}
