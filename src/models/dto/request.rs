use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_QUESTIONS;
use crate::models::domain::GenerationRequest;

fn default_question_count() -> i64 {
    i64::from(DEFAULT_QUESTIONS)
}

/// Body of `POST /generate` (urlencoded) and `POST /api/mcqs` (JSON).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateMcqRequest {
    #[serde(default)]
    pub text: String,

    // wider than the domain type so out-of-range input reaches validation
    #[serde(default = "default_question_count")]
    pub question_count: i64,
}

impl From<GenerateMcqRequest> for GenerationRequest {
    fn from(dto: GenerateMcqRequest) -> Self {
        // anything that does not fit is out of range; 0 fails validation too
        let question_count = u8::try_from(dto.question_count).unwrap_or(0);
        GenerationRequest::new(dto.text, question_count)
    }
}
