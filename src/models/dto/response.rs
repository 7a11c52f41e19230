use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::McqRecord;
use crate::services::generation_service::GenerationOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateMcqResponse {
    pub questions: Vec<McqRecord>,
    pub requested: u8,
    pub returned: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl From<GenerationOutcome> for GenerateMcqResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        GenerateMcqResponse {
            returned: outcome.records.len(),
            questions: outcome.records,
            requested: outcome.requested,
            warnings: outcome.warnings,
            generated_at: outcome.generated_at,
        }
    }
}
