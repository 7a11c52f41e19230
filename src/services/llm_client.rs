use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{config::Config, errors::AppResult};

/// Seam between the generation service and the external model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one prompt and returns the model's raw text reply.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

/// Chat-completions client for any OpenAI-compatible endpoint. Gemini is
/// reached through its OpenAI compatibility layer.
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.llm_api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
        }
    }

    /// Chat request in JSON mode: the reply is always a JSON value.
    fn build_request(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> AppResult<CreateChatCompletionRequest> {
        let messages = vec![
            ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()?,
            ),
            ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()?,
            ),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .response_format(ResponseFormat::JsonObject)
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let request = self.build_request(system_prompt, user_prompt)?;

        log::debug!("Calling generation API, model: {}", self.model);

        let response = self.client.chat().create(request).await.map_err(|e| {
            log::warn!("Generation API call failed: {}", e);
            e
        })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        log::debug!("Generation API returned {} characters", content.len());
        Ok(content)
    }
}
