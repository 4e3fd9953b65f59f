use std::{env::var, sync::Arc};

use dotenv::dotenv;
use eyre::Error;

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

struct EnvInner {
    rust_log: String,
    ai_base_url: Option<String>,
    ai_api_key: Option<String>,
}

impl Env {
    pub fn rust_log(&self) -> &str {
        &self.0.rust_log
    }

    /// AI credentials, if configured. The app runs without them; the chat
    /// and image-analysis features are simply disabled.
    pub fn ai(&self) -> Option<(&str, &str)> {
        match (&self.0.ai_base_url, &self.0.ai_api_key) {
            (Some(url), Some(key)) => Some((url.as_str(), key.as_str())),
            _ => None,
        }
    }

    pub fn load() -> Result<Env, Error> {
        dotenv().ok();

        Ok(Env(Arc::new(EnvInner {
            rust_log: var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            ai_base_url: var("AI_BASE_URL").ok(),
            ai_api_key: var("AI_API_KEY").ok(),
        })))
    }
}
