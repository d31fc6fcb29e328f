use crate::core::{Catalog, Taxonomy};
use crate::domain::model::{InterestArea, Program};
use crate::utils::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// On-disk shape of the taxonomy and catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub areas: Vec<AreaEntry>,
    #[serde(default)]
    pub programs: Vec<ProgramEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaEntry {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub areas: Vec<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, toml::Value>,
}

impl CatalogData {
    /// The curated data shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| EngineError::ConfigValidationError {
            field: "catalog_data".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Builds and validates both registries; any violation is fatal.
    pub fn into_registries(self) -> Result<(Taxonomy, Catalog)> {
        let areas = self
            .areas
            .into_iter()
            .map(|entry| InterestArea::new(entry.id, entry.display_name, entry.keywords))
            .collect();
        let taxonomy = Taxonomy::new(areas)?;

        let programs = self
            .programs
            .into_iter()
            .map(|entry| {
                let mut program =
                    Program::new(entry.id, entry.name, entry.institution, entry.areas);
                for (key, value) in entry.metadata {
                    program = program.with_metadata(key, metadata_text(value));
                }
                program
            })
            .collect();
        let catalog = Catalog::new(programs, &taxonomy)?;

        tracing::info!(
            "Loaded {} interest areas and {} programs from {} institutions",
            taxonomy.len(),
            catalog.len(),
            catalog.institution_count()
        );

        Ok((taxonomy, catalog))
    }
}

fn metadata_text(value: toml::Value) -> String {
    match value {
        toml::Value::String(text) => text,
        other => other.to_string(),
    }
}
