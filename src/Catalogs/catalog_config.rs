//! # Catalog configuration
//!
//! The chemistry reference data is hand-maintained, so it lives in a plain JSON
//! document that can be edited, swapped and versioned without touching the engine:
//!
//! ```json
//! {
//!   "bottles":   [ { "cation": "Na", "anion": "Cl", "category": "salt" } ],
//!   "molecular": [ { "id": "nh3", "name": "Ammonia", "formula": "NH3",
//!                    "state": "aq", "category": "base" } ]
//! }
//! ```
//!
//! A missing or broken file falls back to the built-in defaults (see [`CatalogConfig::load_or_default`]).
use super::reagents::{Category, Reagent};
use super::standard_data::standard_config;
use crate::chem_errors::ChemError;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// one generated aqueous reagent: cation id, anion id and its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottleSpec {
    pub cation: String,
    pub anion: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub bottles: Vec<BottleSpec>,
    #[serde(default)]
    pub molecular: Vec<Reagent>,
}

impl Default for CatalogConfig {
    /// built-in lab shelf
    fn default() -> Self {
        standard_config()
    }
}

impl CatalogConfig {
    /// no bottles and no molecular reagents, a base for hand-built shelves
    pub fn empty() -> Self {
        Self {
            bottles: Vec::new(),
            molecular: Vec::new(),
        }
    }
    pub fn from_json_str(json: &str) -> Result<Self, ChemError> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ChemError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(
            "loaded catalog config from {}: {} bottles, {} molecular reagents",
            path.display(),
            config.bottles.len(),
            config.molecular.len()
        );
        Ok(config)
    }
    /// reads the file, falling back to the built-in configuration on any error
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "cannot use catalog config {}: {}, using built-in data",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ChemError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalogs::reagents::PhysicalState;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_from_json_str() {
        let json = r#"{
            "bottles": [ { "cation": "Na", "anion": "Cl", "category": "salt" } ],
            "molecular": [ { "id": "nh3", "name": "Ammonia", "formula": "NH3",
                             "state": "aq", "category": "base" } ]
        }"#;
        let config = CatalogConfig::from_json_str(json).unwrap();
        assert_eq!(config.bottles.len(), 1);
        assert_eq!(config.bottles[0].category, Category::Salt);
        let nh3 = &config.molecular[0];
        assert_eq!(nh3.state, PhysicalState::Aqueous);
        assert!(nh3.redox.is_empty());
        assert!(nh3.ions.is_none());
        assert_eq!(nh3.color, "transparent");
    }

    #[test]
    fn test_config_file_round_trip() {
        let file = NamedTempFile::new().unwrap();
        let config = CatalogConfig::default();
        config.save_to_file(file.path()).unwrap();
        let loaded = CatalogConfig::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_broken_file_falls_back_to_default() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{ this is not json").unwrap();
        assert!(CatalogConfig::from_json_file(file.path()).is_err());
        let config = CatalogConfig::load_or_default(file.path());
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let json = r#"{ "bottles": [ { "cation": "Na", "anion": "Cl", "category": "gemstone" } ] }"#;
        assert!(matches!(
            CatalogConfig::from_json_str(json),
            Err(ChemError::JsonError(_))
        ));
    }
}
