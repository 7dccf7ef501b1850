//! Catalog configuration for grafos
//!
//! The three example graphs can be redefined in a TOML file. Sections that
//! are left out keep the built-in classroom data.
//!
//! Lookup order: explicit path (`--catalog` / `GRAFOS_CATALOG`), then
//! `$GRAFOS_CONFIG_DIR/catalog.toml`, then `<config dir>/grafos/catalog.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GrafosError, Result};

const CONFIG_DIR: &str = "grafos";
const CONFIG_FILE: &str = "catalog.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAFOS_CONFIG_DIR";

/// Definitions of the three example graphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directed weighted city graph
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Undirected social graph
    #[serde(default)]
    pub social: SocialConfig,

    /// Bipartite user/product graph
    #[serde(default)]
    pub recommender: RecommenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// `[from, to, weight]` triples
    pub edges: Vec<(String, String, f64)>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        let edges = [
            ("A", "B", 5.0),
            ("A", "C", 3.0),
            ("B", "D", 2.0),
            ("C", "D", 7.0),
            ("C", "E", 4.0),
            ("D", "E", 1.0),
        ];
        Self {
            edges: edges
                .into_iter()
                .map(|(a, b, w)| (a.to_string(), b.to_string(), w))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    /// `[person, person]` friendships
    pub edges: Vec<(String, String)>,

    /// People without any friendship yet
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<String>,
}

impl Default for SocialConfig {
    fn default() -> Self {
        let edges = [
            ("Ana", "Luis"),
            ("Luis", "Carlos"),
            ("Ana", "Marta"),
            ("Marta", "Carlos"),
            ("Carlos", "Jorge"),
            ("Luis", "Elena"),
            ("Elena", "Jorge"),
        ];
        Self {
            edges: pairs(&edges),
            people: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    pub users: Vec<String>,
    pub products: Vec<String>,
    /// `[user, product]` interactions (purchase, interest, ...)
    pub edges: Vec<(String, String)>,

    /// User queried when none is given; first user when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        let edges = [
            ("Luis", "Laptop"),
            ("Luis", "Libro"),
            ("Ana", "Auriculares"),
            ("Ana", "Libro"),
        ];
        Self {
            users: vec!["Luis".to_string(), "Ana".to_string()],
            products: vec![
                "Libro".to_string(),
                "Auriculares".to_string(),
                "Laptop".to_string(),
            ],
            edges: pairs(&edges),
            default_user: Some("Luis".to_string()),
        }
    }
}

fn pairs(edges: &[(&str, &str)]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

impl CatalogConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GrafosError::io_operation("read catalog", path.display(), e))?;
        let config: CatalogConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "catalog loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GrafosError::Other(format!("failed to serialize catalog: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| GrafosError::io_operation("write catalog", path.display(), e))?;
        Ok(())
    }

    /// Default catalog file location, if a config directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Resolve the catalog to use.
    /// An explicit path must exist; the default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            _ => {
                tracing::debug!("using built-in catalog");
                Ok((Self::default(), None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_builtin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = CatalogConfig::default();
        config.save(&path).unwrap();

        let loaded = CatalogConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_sections_fall_back_to_builtin() {
        let config: CatalogConfig = toml::from_str(
            r#"
            [social]
            edges = [["Ana", "Pablo"]]
            "#,
        )
        .unwrap();

        assert_eq!(config.routes, RoutesConfig::default());
        assert_eq!(config.recommender, RecommenderConfig::default());
        assert_eq!(config.social.edges.len(), 1);
        assert!(config.social.people.is_empty());
    }

    #[test]
    fn test_integer_weights_accepted() {
        let config: CatalogConfig = toml::from_str(
            r#"
            [routes]
            edges = [["X", "Y", 4], ["Y", "Z", 0.5]]
            "#,
        )
        .unwrap();
        assert_eq!(config.routes.edges[0].2, 4.0);
        assert_eq!(config.routes.edges[1].2, 0.5);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = CatalogConfig::discover(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("read catalog"));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[routes]\nedges = \"not a list\"\n").unwrap();
        assert!(matches!(
            CatalogConfig::load(&path),
            Err(GrafosError::Toml(_))
        ));
    }
}
