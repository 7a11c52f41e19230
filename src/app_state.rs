use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        generation_service::GenerationService,
        llm_client::{CompletionClient, OpenAiCompletionClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_client(config, client)
    }

    /// Builds the state around any completion client; tests pass a stub.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let config = Arc::new(config);
        let generation_service = Arc::new(GenerationService::new(client, Arc::clone(&config)));

        Self {
            generation_service,
            config,
        }
    }
}
