use crate::domain::model::Assessment;
use crate::domain::ports::AssessmentRecorder;
use crate::utils::error::{EngineError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// One audit line per assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentEntry {
    pub recorded_at: DateTime<Utc>,
    pub total_answers: usize,
    pub top_areas: Vec<String>,
    pub recommendations: Vec<String>,
    pub institutions: Vec<String>,
}

impl AssessmentEntry {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            recorded_at: Utc::now(),
            total_answers: assessment.summary.total_answers,
            top_areas: assessment.summary.top_areas.clone(),
            recommendations: assessment.labels(),
            institutions: assessment.institutions.clone(),
        }
    }
}

/// Emits a structured log event instead of persisting anything.
#[derive(Debug, Clone, Default)]
pub struct TracingRecorder;

#[async_trait]
impl AssessmentRecorder for TracingRecorder {
    async fn record(&self, assessment: &Assessment) -> Result<()> {
        let entry = AssessmentEntry::from_assessment(assessment);
        tracing::info!(
            recorded_at = %entry.recorded_at.to_rfc3339(),
            total_answers = entry.total_answers,
            top_areas = ?entry.top_areas,
            institutions = ?entry.institutions,
            "Assessment recorded"
        );
        Ok(())
    }
}

/// Appends each assessment as a JSON line to a local file.
#[derive(Debug, Clone)]
pub struct JsonLinesRecorder {
    path: PathBuf,
}

impl JsonLinesRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    // 所有檔案錯誤都視為稽核失敗，推薦結果已輸出
    fn failure(&self, action: &str, source: std::io::Error) -> EngineError {
        EngineError::RecorderError {
            message: format!("cannot {} {}: {}", action, self.path.display(), source),
        }
    }
}

#[async_trait]
impl AssessmentRecorder for JsonLinesRecorder {
    async fn record(&self, assessment: &Assessment) -> Result<()> {
        let entry = AssessmentEntry::from_assessment(assessment);
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.failure("create directory for", e))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.failure("open", e))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| self.failure("write", e))?;
        file.flush().await.map_err(|e| self.failure("flush", e))?;

        tracing::debug!("Assessment appended to {}", self.path.display());
        Ok(())
    }
}
