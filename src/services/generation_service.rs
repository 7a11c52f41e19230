use std::sync::Arc;

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    config::{Config, EXPECTED_OPTION_COUNT},
    constants::prompts::{mcq_user_prompt, MCQ_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
    models::domain::{GenerationRequest, McqRecord},
    services::{llm_client::CompletionClient, mcq_parser::parse_mcqs},
};

/// Result of one submission: the records in the order the model returned
/// them, plus anything that went wrong while reading its reply.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub records: Vec<McqRecord>,
    pub warnings: Vec<String>,
    pub requested: u8,
    pub generated_at: DateTime<Utc>,
}

impl GenerationOutcome {
    pub fn misshapen_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| !r.has_expected_shape(EXPECTED_OPTION_COUNT))
            .count()
    }
}

pub struct GenerationService {
    client: Arc<dyn CompletionClient>,
    config: Arc<Config>,
}

impl GenerationService {
    pub fn new(client: Arc<dyn CompletionClient>, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationOutcome> {
        request.validate()?;
        // checked per call so a bad key never reaches the network
        self.config.validate()?;

        let user_prompt = mcq_user_prompt(&request.text, request.question_count);
        log::info!(
            "Requesting {} questions from {} characters of source text",
            request.question_count,
            request.text.len()
        );

        let reply = self
            .client
            .complete(MCQ_SYSTEM_PROMPT.as_str(), &user_prompt)
            .await
            .map_err(|e| match e {
                AppError::Upstream(msg) => AppError::Upstream(format!(
                    "An unexpected error occurred while calling the generation API: {}",
                    msg
                )),
                other => other,
            })?;

        let parsed = parse_mcqs(&reply);
        log::info!(
            "Parsed {} of {} requested questions ({} warnings)",
            parsed.records.len(),
            request.question_count,
            parsed.warnings.len()
        );

        Ok(GenerationOutcome {
            records: parsed.records,
            warnings: parsed.warnings,
            requested: request.question_count,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::llm_client::MockCompletionClient;
    use crate::test_utils::fixtures;
    use secrecy::SecretString;

    fn service_with(client: MockCompletionClient, config: Config) -> GenerationService {
        GenerationService::new(Arc::new(client), Arc::new(config))
    }

    #[actix_web::test]
    async fn sends_one_prompt_with_text_and_count() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|system, user| {
                system.contains("expert quiz creator")
                    && user.contains("Please generate 2 multiple-choice questions")
                    && user.contains(fixtures::SOURCE_TEXT)
            })
            .times(1)
            .returning(|_, _| Ok(fixtures::two_question_reply()));

        let service = service_with(client, Config::test_config());
        let outcome = service
            .generate(GenerationRequest::new(fixtures::SOURCE_TEXT, 2))
            .await
            .expect("generation should succeed");

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.requested, 2);
        assert_eq!(outcome.misshapen_count(), 0);
    }

    #[actix_web::test]
    async fn missing_api_key_fails_before_calling_client() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(0);

        let config = Config {
            api_key: SecretString::from(String::new()),
            ..Config::test_config()
        };
        let service = service_with(client, config);
        let result = service
            .generate(GenerationRequest::new(fixtures::SOURCE_TEXT, 3))
            .await;

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[actix_web::test]
    async fn blank_text_fails_before_calling_client() {
        let mut client = MockCompletionClient::new();
        client.expect_complete().times(0);

        let service = service_with(client, Config::test_config());
        let result = service.generate(GenerationRequest::new("   ", 3)).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn api_failure_propagates_as_upstream_error() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_, _| Err(AppError::Upstream("quota exceeded".into())));

        let service = service_with(client, Config::test_config());
        let result = service
            .generate(GenerationRequest::new(fixtures::SOURCE_TEXT, 3))
            .await;

        match result {
            Err(AppError::Upstream(msg)) => assert!(msg.contains("quota exceeded")),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn unparseable_reply_degrades_to_warnings() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .times(1)
            .returning(|_, _| Ok("I'd rather not.".to_string()));

        let service = service_with(client, Config::test_config());
        let outcome = service
            .generate(GenerationRequest::new(fixtures::SOURCE_TEXT, 3))
            .await
            .expect("shape problems are not errors");

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
    }
}
