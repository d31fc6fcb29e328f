#[cfg(feature = "cli")]
pub mod cli;
pub mod data;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_WEIGHT: u32 = 15;
pub const DEFAULT_TOP_AREAS: usize = 3;

/// Tunable values of the recommendation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default = "default_top_areas")]
    pub top_areas: usize,
    #[serde(default = "default_institutions")]
    pub default_institutions: Vec<String>,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_weight() -> u32 {
    DEFAULT_WEIGHT
}

fn default_top_areas() -> usize {
    DEFAULT_TOP_AREAS
}

fn default_institutions() -> Vec<String> {
    vec![
        "Universidad Nacional Mayor de San Marcos".to_string(),
        "Pontificia Universidad Católica del Perú".to_string(),
    ]
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            weight: default_weight(),
            top_areas: default_top_areas(),
            default_institutions: default_institutions(),
        }
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("engine.limit", self.limit, 1)?;
        validate_positive_number("engine.weight", self.weight as usize, 1)?;
        validate_positive_number("engine.top_areas", self.top_areas, 1)?;
        validate_positive_number(
            "engine.default_institutions",
            self.default_institutions.len(),
            1,
        )?;
        for institution in &self.default_institutions {
            validate_non_empty_string("engine.default_institutions", institution)?;
        }
        Ok(())
    }
}
