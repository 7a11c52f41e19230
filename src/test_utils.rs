#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;

    use crate::models::domain::McqRecord;
    use crate::services::generation_service::GenerationOutcome;

    pub const SOURCE_TEXT: &str = "Photosynthesis takes place in the chloroplasts of plant cells. \
Plants absorb carbon dioxide and release oxygen.";

    /// Well-formed model reply with two questions.
    pub fn two_question_reply() -> String {
        serde_json::to_string(&two_questions()).unwrap_or_default()
    }

    pub fn two_questions() -> Vec<McqRecord> {
        vec![
            McqRecord::new(
                "What gas do plants absorb?",
                vec![
                    "Oxygen".to_string(),
                    "Carbon dioxide".to_string(),
                    "Nitrogen".to_string(),
                    "Helium".to_string(),
                ],
                "Carbon dioxide",
            ),
            McqRecord::new(
                "Where does photosynthesis occur?",
                vec![
                    "Nucleus".to_string(),
                    "Ribosome".to_string(),
                    "Chloroplast".to_string(),
                    "Vacuole".to_string(),
                ],
                "Chloroplast",
            ),
        ]
    }

    pub fn outcome(records: Vec<McqRecord>) -> GenerationOutcome {
        GenerationOutcome {
            requested: records.len() as u8,
            records,
            warnings: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_reply_parses_back() {
        let parsed = crate::services::mcq_parser::parse_mcqs(&two_question_reply());
        assert_eq!(parsed.records, two_questions());
    }

    #[test]
    fn test_fixture_outcome_counts_requested() {
        let outcome = outcome(two_questions());
        assert_eq!(outcome.requested, 2);
        assert_eq!(outcome.misshapen_count(), 0);
    }
}
