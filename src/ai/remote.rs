use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply when the endpoint answers without a success status
pub const SOFT_FAILURE_REPLY: &str = "Sorry, I could not process your request.";
/// Reply when the request or its JSON body fails
pub const TRANSPORT_FAILURE_REPLY: &str = "Sorry, there was an error processing your request.";

/// Anything that can answer a prompt the local rules did not cover
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub status: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Why a remote call produced no usable text
#[derive(Debug)]
pub enum RemoteFailure {
    /// Endpoint answered, but not with `status == "success"`
    Soft { status: String },
    Transport(anyhow::Error),
}

impl RemoteFailure {
    pub fn apology(&self) -> &'static str {
        match self {
            RemoteFailure::Soft { .. } => SOFT_FAILURE_REPLY,
            RemoteFailure::Transport(_) => TRANSPORT_FAILURE_REPLY,
        }
    }
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteFailure::Soft { status } => write!(f, "endpoint returned status {:?}", status),
            RemoteFailure::Transport(e) => write!(f, "transport error: {:#}", e),
        }
    }
}

/// Client for the hosted text-generation endpoint
pub struct HttpResponder {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpResponder {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request and classifies the result
    pub async fn fetch(&self, prompt: &str) -> Result<String, RemoteFailure> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&CompletionRequest { prompt })
            .send()
            .await
            .context("Request to text-generation endpoint failed")
            .map_err(RemoteFailure::Transport)?;

        log::debug!("📡 Endpoint answered with HTTP {}", response.status());

        let body: CompletionResponse = response
            .json()
            .await
            .context("Failed to parse endpoint response")
            .map_err(RemoteFailure::Transport)?;

        match body {
            CompletionResponse {
                status,
                text: Some(text),
            } if status == "success" => Ok(text),
            CompletionResponse { status, .. } => Err(RemoteFailure::Soft { status }),
        }
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn respond(&self, prompt: &str) -> Result<String> {
        match self.fetch(prompt).await {
            Ok(text) => Ok(text),
            Err(failure @ RemoteFailure::Soft { .. }) => {
                log::warn!("⚠️ Remote reply unusable: {}", failure);
                Ok(failure.apology().to_string())
            }
            Err(failure) => {
                log::error!("❌ Remote call failed: {}", failure);
                Ok(failure.apology().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_is_just_the_prompt() {
        let body = serde_json::to_value(CompletionRequest { prompt: "hi there" }).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "hi there" }));
    }

    #[test]
    fn failures_apologize_differently() {
        let soft = RemoteFailure::Soft {
            status: "error".to_string(),
        };
        let transport = RemoteFailure::Transport(anyhow::anyhow!("connection reset"));
        assert_eq!(soft.apology(), SOFT_FAILURE_REPLY);
        assert_eq!(transport.apology(), TRANSPORT_FAILURE_REPLY);
        assert_ne!(soft.apology(), transport.apology());
    }

    #[test]
    fn response_without_text_still_parses() {
        let body: CompletionResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert_eq!(body.status, "error");
        assert!(body.text.is_none());
    }
}
