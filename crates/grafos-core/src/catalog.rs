//! The three example applications and the graphs they query

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bail_invalid_graph;
use crate::config::CatalogConfig;
use crate::error::{GrafosError, Result};
use crate::graph::{BipartiteGraph, DirectedGraph, GraphProvider, NodeId, UndirectedGraph};

/// Example application selectable by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    /// Shortest route between cities (Dijkstra)
    Routes,
    /// Degree of connection between people (BFS)
    Social,
    /// Products a user interacted with (bipartite graph)
    Recommender,
}

impl Application {
    pub const ALL: [Application; 3] = [
        Application::Routes,
        Application::Social,
        Application::Recommender,
    ];

    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Application::Routes => "routes",
            Application::Social => "social",
            Application::Recommender => "recommender",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Application::Routes => "Route planning (Dijkstra)",
            Application::Social => "Social network (degree of connection)",
            Application::Recommender => "Product recommender (bipartite graph)",
        }
    }
}

impl FromStr for Application {
    type Err = GrafosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "routes" | "route" | "1" => Ok(Application::Routes),
            "social" | "2" => Ok(Application::Social),
            "recommender" | "recommend" | "3" => Ok(Application::Recommender),
            other => Err(GrafosError::UnknownApplication(other.to_string())),
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable set of the three example graphs
#[derive(Debug, Clone)]
pub struct GraphCatalog {
    routes: DirectedGraph,
    social: UndirectedGraph,
    recommender: BipartiteGraph,
    default_user: NodeId,
}

impl GraphCatalog {
    /// The classroom data
    pub fn builtin() -> Result<Self> {
        Self::from_config(&CatalogConfig::default())
    }

    /// Build and validate every graph of a catalog definition
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let routes = DirectedGraph::from_weighted_edges(
            Application::Routes.name(),
            config
                .routes
                .edges
                .iter()
                .map(|(a, b, w)| (a.as_str(), b.as_str(), *w)),
        )?;

        let mut social = UndirectedGraph::from_edges(
            Application::Social.name(),
            config
                .social
                .edges
                .iter()
                .map(|(a, b)| (a.as_str(), b.as_str())),
        );
        for person in &config.social.people {
            social.add_node(NodeId::from(person.as_str()));
        }

        let rec = &config.recommender;
        let recommender = BipartiteGraph::new(
            Application::Recommender.name(),
            rec.users.iter().map(String::as_str),
            rec.products.iter().map(String::as_str),
        )?
        .with_edges(rec.edges.iter().map(|(a, b)| (a.as_str(), b.as_str())))?;

        let fallback = rec.users.first().map(String::as_str);
        let Some(default_user) = rec.default_user.as_deref().or(fallback).map(NodeId::from)
        else {
            bail_invalid_graph!(Application::Recommender.name(), "no users declared");
        };
        if !recommender.users().contains(&&default_user) {
            bail_invalid_graph!(
                Application::Recommender.name(),
                "default user {} is not a declared user",
                default_user
            );
        }

        tracing::debug!(
            routes = routes.edge_count(),
            social = social.edge_count(),
            recommender = recommender.edge_count(),
            "catalog built"
        );

        Ok(Self {
            routes,
            social,
            recommender,
            default_user,
        })
    }

    pub fn routes(&self) -> &DirectedGraph {
        &self.routes
    }

    pub fn social(&self) -> &UndirectedGraph {
        &self.social
    }

    pub fn recommender(&self) -> &BipartiteGraph {
        &self.recommender
    }

    pub fn default_user(&self) -> &NodeId {
        &self.default_user
    }

    /// Graph backing an application
    pub fn graph(&self, app: Application) -> &dyn GraphProvider {
        match app {
            Application::Routes => &self.routes,
            Application::Social => &self.social,
            Application::Recommender => &self.recommender,
        }
    }

    /// Nodes a user may pick for an application (users only for the recommender)
    pub fn nodes(&self, app: Application) -> Vec<&NodeId> {
        match app {
            Application::Recommender => self.recommender.users(),
            other => self.graph(other).nodes().iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RecommenderConfig, RoutesConfig};
    use crate::graph::GraphKind;

    fn labels(nodes: Vec<&NodeId>) -> Vec<&str> {
        nodes.into_iter().map(NodeId::as_str).collect()
    }

    #[test]
    fn test_builtin_shapes() {
        let catalog = GraphCatalog::builtin().unwrap();
        assert_eq!(catalog.routes().edge_count(), 6);
        assert_eq!(catalog.social().edge_count(), 7);
        assert_eq!(catalog.recommender().edge_count(), 4);
        assert_eq!(catalog.default_user().as_str(), "Luis");
        assert_eq!(
            catalog.graph(Application::Routes).kind(),
            GraphKind::DirectedWeighted
        );
        assert_eq!(catalog.graph(Application::Recommender).kind(), GraphKind::Bipartite);
    }

    #[test]
    fn test_nodes_follow_insertion_order() {
        let catalog = GraphCatalog::builtin().unwrap();
        assert_eq!(
            labels(catalog.nodes(Application::Routes)),
            vec!["A", "B", "C", "D", "E"]
        );
        assert_eq!(
            labels(catalog.nodes(Application::Social)),
            vec!["Ana", "Luis", "Carlos", "Marta", "Jorge", "Elena"]
        );
        assert_eq!(
            labels(catalog.nodes(Application::Recommender)),
            vec!["Luis", "Ana"]
        );
    }

    #[test]
    fn test_application_parsing() {
        assert_eq!("routes".parse::<Application>().unwrap(), Application::Routes);
        assert_eq!("Social".parse::<Application>().unwrap(), Application::Social);
        assert_eq!("3".parse::<Application>().unwrap(), Application::Recommender);
        assert!(matches!(
            "maps".parse::<Application>(),
            Err(GrafosError::UnknownApplication(_))
        ));
        for app in Application::ALL {
            assert_eq!(app.name().parse::<Application>().unwrap(), app);
        }
    }

    #[test]
    fn test_invalid_route_weight_rejected() {
        let config = CatalogConfig {
            routes: RoutesConfig {
                edges: vec![("A".into(), "B".into(), -1.0)],
            },
            ..Default::default()
        };
        let err = GraphCatalog::from_config(&config).unwrap_err();
        assert!(matches!(err, GrafosError::InvalidGraph { .. }));
    }

    #[test]
    fn test_default_user_falls_back_to_first_user() {
        let config = CatalogConfig {
            recommender: RecommenderConfig {
                users: vec!["Eva".into(), "Tomas".into()],
                products: vec!["Mesa".into()],
                edges: vec![("Tomas".into(), "Mesa".into())],
                default_user: None,
            },
            ..Default::default()
        };
        let catalog = GraphCatalog::from_config(&config).unwrap();
        assert_eq!(catalog.default_user().as_str(), "Eva");
    }

    #[test]
    fn test_default_user_must_be_a_user() {
        let config = CatalogConfig {
            recommender: RecommenderConfig {
                default_user: Some("Libro".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = GraphCatalog::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("default user Libro"));
    }

    #[test]
    fn test_recommender_without_users_rejected() {
        let config = CatalogConfig {
            recommender: RecommenderConfig {
                users: vec![],
                products: vec!["Libro".into()],
                edges: vec![],
                default_user: None,
            },
            ..Default::default()
        };
        assert!(GraphCatalog::from_config(&config).is_err());
    }
}
