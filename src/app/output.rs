use crate::domain::model::Assessment;
use crate::utils::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render(assessment: &Assessment, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(assessment)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(assessment)?),
        OutputFormat::Csv => render_csv(assessment),
    }
}

pub fn render_text(assessment: &Assessment) -> String {
    let mut lines = vec!["🎓 Recommended programs:".to_string()];
    for (position, recommendation) in assessment.recommendations.iter().enumerate() {
        lines.push(format!(
            "  {}. {} [score {}]",
            position + 1,
            recommendation.label,
            recommendation.match_score
        ));
    }

    lines.push("🏛️ Institutions:".to_string());
    for institution in &assessment.institutions {
        lines.push(format!("  - {}", institution));
    }

    let summary = &assessment.summary;
    if summary.top_areas.is_empty() {
        lines.push(format!(
            "📊 No interest area detected in {} answer(s)",
            summary.total_answers
        ));
    } else {
        lines.push(format!(
            "📊 Top areas: {} ({} answer(s))",
            summary.top_areas.join(", "),
            summary.total_answers
        ));
    }

    lines.join("\n")
}

/// rank,label,program,institution,match_score
pub fn render_csv(assessment: &Assessment) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["rank", "label", "program", "institution", "match_score"])?;

    for (position, recommendation) in assessment.recommendations.iter().enumerate() {
        writer.write_record([
            (position + 1).to_string(),
            recommendation.label.clone(),
            recommendation.program_name.clone(),
            recommendation.institution_name.clone(),
            recommendation.match_score.to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EngineError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| EngineError::InvalidConfigValueError {
        field: "output".to_string(),
        value: "csv".to_string(),
        reason: e.to_string(),
    })
}
