use crate::core::engine::DEFAULT_TYPING_DELAY;
use crate::services::Language;
use std::env;
use std::time::Duration;

/// Hosted text-generation endpoint; the access key is part of the URL
pub const DEFAULT_ENDPOINT: &str = "https://backend.buildpicoapps.com/aero/run/llm-api?pk=v1-Z0FBQUFBQm5HUEtMSjJkakVjcF9IQ0M0VFhRQ0FmSnNDSHNYTlJSblE0UXo1Q3RBcjFPcl9YYy1OZUhteDZWekxHdWRLM1M1alNZTkJMWEhNOWd4S1NPSDBTWC12M0U2UGc9PQ==";

#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_name: String,
    pub endpoint_url: String,
    pub typing_delay_ms: u64,
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        dotenv::dotenv().ok();

        let endpoint_url = env::var("GHOST_AI_ENDPOINT")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let typing_delay_ms = env::var("GHOST_AI_TYPING_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TYPING_DELAY.as_millis() as u64);

        let language = match env::var("GHOST_AI_LANGUAGE") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                log::warn!("⚠️ {}, falling back to English", e);
                Language::En
            }),
            Err(_) => Language::En,
        };

        let assistant_name = env::var("GHOST_AI_NAME").unwrap_or_else(|_| "Ghost AI".to_string());

        Self {
            assistant_name,
            endpoint_url,
            typing_delay_ms,
            language,
        }
    }
}

impl Config {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}
