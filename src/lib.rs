pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{data::CatalogData, toml_config::TomlConfig, EngineSettings};
pub use core::{Catalog, RecommendationEngine, Taxonomy};
pub use domain::model::{
    AnalysisSummary, AnswerRecord, AnswerSheet, Assessment, InterestArea, Program,
    RankedProgram, Recommendation, ScoreVector,
};
pub use domain::ports::AssessmentRecorder;
pub use utils::error::{EngineError, Result};
