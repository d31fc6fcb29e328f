use crate::app::OutputFormat;
use crate::domain::model::AnswerSheet;
use crate::utils::error::{EngineError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "orientation-engine")]
#[command(about = "Recommends academic programs from free-text quiz answers")]
pub struct CliConfig {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to a taxonomy/catalog TOML file (overrides [data].path)
    #[arg(long)]
    pub data: Option<String>,

    /// JSON file mapping question ids to answer text
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Inline answer as QUESTION_ID=TEXT, may be repeated
    #[arg(long = "answer", value_name = "ID=TEXT")]
    pub inline_answers: Vec<String>,

    /// Override the number of recommendations
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Validate configuration and data, then print a summary without assessing
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// 將 `--answer id=text` 加入答案表
    pub fn apply_inline_answers(&self, sheet: &mut AnswerSheet) -> Result<()> {
        for raw in &self.inline_answers {
            let (question_id, text) =
                raw.split_once('=')
                    .ok_or_else(|| EngineError::InvalidConfigValueError {
                        field: "--answer".to_string(),
                        value: raw.clone(),
                        reason: "Expected QUESTION_ID=TEXT".to_string(),
                    })?;

            if question_id.trim().is_empty() {
                return Err(EngineError::InvalidConfigValueError {
                    field: "--answer".to_string(),
                    value: raw.clone(),
                    reason: "Question id cannot be empty".to_string(),
                });
            }

            sheet.insert(question_id.trim(), Some(text.to_string()));
        }
        Ok(())
    }
}
