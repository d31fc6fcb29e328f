use crate::domain::model::Assessment;
use crate::utils::error::Result;
use async_trait::async_trait;

/// External collaborator notified whenever an assessment has been produced.
#[async_trait]
pub trait AssessmentRecorder: Send + Sync {
    async fn record(&self, assessment: &Assessment) -> Result<()>;
}
