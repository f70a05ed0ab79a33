//! Sandbox client over HTTP

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use super::{SandboxClient, SandboxError, SubmissionHandle, SubmissionRequest};
use crate::config::SandboxConfig;

/// POSTs each request as JSON to the configured endpoint
pub struct HttpSandboxClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpSandboxClient {
    pub fn new(config: &SandboxConfig) -> Result<Self, SandboxError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SandboxError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl SandboxClient for HttpSandboxClient {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionHandle, SandboxError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| SandboxError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SandboxError::Transport(e.to_string()))?;
        debug!("sandbox answered {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(SandboxError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(SubmissionHandle {
            status: status.as_u16(),
            body,
        })
    }
}
