use std::env;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_SECRETS_FILE: &str = ".secrets.env";
pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_LLM_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Bounds of the question-count control on the form.
pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 10;
pub const DEFAULT_QUESTIONS: u8 = 3;

/// Every generated question is asked to carry exactly this many options.
pub const EXPECTED_OPTION_COUNT: usize = 4;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub llm_api_base: String,
    pub llm_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub secrets_file: String,
}

impl Config {
    /// Loads the secrets file and then `.env` into the process environment,
    /// and reads the configuration from it. Missing files are not an error.
    pub fn load() -> Self {
        load_env_files(Path::new(&secrets_file_path()), Path::new(".env"));
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self {
            api_key: SecretString::from(env::var("GOOGLE_API_KEY").unwrap_or_default()),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            secrets_file: secrets_file_path(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    /// Fails when the API credential is missing or blank.
    pub fn validate(&self) -> AppResult<()> {
        if !self.has_api_key() {
            return Err(AppError::Configuration(format!(
                "GOOGLE_API_KEY not found. Add it to {} or the environment.",
                self.secrets_file
            )));
        }
        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            api_key: SecretString::from("test_api_key".to_string()),
            llm_api_base: "http://127.0.0.1:9".to_string(),
            llm_model: "test-model".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            secrets_file: DEFAULT_SECRETS_FILE.to_string(),
        }
    }
}

fn secrets_file_path() -> String {
    env::var("MCQ_SECRETS_FILE").unwrap_or_else(|_| DEFAULT_SECRETS_FILE.to_string())
}

/// dotenvy never overwrites a variable that is already set, so the secrets
/// file goes first and a placeholder in `.env` cannot shadow its key.
fn load_env_files(secrets_file: &Path, dotenv_file: &Path) {
    if secrets_file.exists() {
        match dotenvy::from_path(secrets_file) {
            Ok(_) => log::info!("Loaded secrets from {}", secrets_file.display()),
            Err(e) => log::warn!(
                "Could not read secrets file {}: {}",
                secrets_file.display(),
                e
            ),
        }
    } else {
        log::warn!(
            "Secrets file {} not found; relying on environment",
            secrets_file.display()
        );
    }

    if dotenv_file.exists() && dotenvy::from_path(dotenv_file).is_ok() {
        log::debug!("Loaded {}", dotenv_file.display());
    }
}
