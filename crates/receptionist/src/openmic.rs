//! Thin client for the OpenMic voice platform.
//!
//! The platform does not expose bot management publicly, so only call history and
//! outbound calls go upstream. Call history is best effort: any failure is logged
//! and reported as an empty list.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::OpenMicConfig;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum OpenMicError {
    #[error("OPENMIC_API_KEY is not configured")]
    NotConfigured,
    #[error("OpenMic request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OpenMic API error {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct CreatePhoneCall<'a> {
    from_number: &'a str,
    to_number: &'a str,
    override_agent_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct OpenMicClient {
    http: Client,
    config: OpenMicConfig,
}

impl OpenMicClient {
    pub fn new(config: OpenMicConfig) -> Result<Self, OpenMicError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base.trim_end_matches('/'), path)
    }

    /// Call history for every agent, or for one agent when `bot_uid` is given.
    pub async fn call_logs(&self, bot_uid: Option<&str>) -> Vec<Value> {
        match self.fetch_call_logs(bot_uid).await {
            Ok(calls) => calls,
            Err(OpenMicError::NotConfigured) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "OpenMic call log request failed; returning empty logs");
                Vec::new()
            }
        }
    }

    pub async fn fetch_call_logs(&self, bot_uid: Option<&str>) -> Result<Vec<Value>, OpenMicError> {
        if !self.is_configured() {
            return Err(OpenMicError::NotConfigured);
        }

        let mut request = self
            .http
            .get(self.endpoint("calls"))
            .bearer_auth(&self.config.api_key);
        if let Some(agent_id) = bot_uid {
            request = request.query(&[("agent_id", agent_id)]);
        }

        let response = request.send().await?;
        let body = checked_json(response).await?;
        Ok(extract_calls(body))
    }

    /// Ask the platform to dial `to_number` using the given bot as the agent.
    pub async fn create_phone_call(
        &self,
        to_number: &str,
        bot_uid: &str,
    ) -> Result<Value, OpenMicError> {
        if !self.is_configured() {
            return Err(OpenMicError::NotConfigured);
        }

        let payload = CreatePhoneCall {
            from_number: &self.config.phone_number,
            to_number,
            override_agent_id: bot_uid,
        };
        let response = self
            .http
            .post(self.endpoint("create-phone-call"))
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let body = checked_json(response).await?;
        info!(to_number, bot_uid, "outbound call requested");
        Ok(body)
    }
}

async fn checked_json(response: reqwest::Response) -> Result<Value, OpenMicError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(OpenMicError::Status {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        });
    }
    Ok(response.json().await?)
}

/// Accepts either `{ "calls": [...] }` or a bare array.
fn extract_calls(body: Value) -> Vec<Value> {
    match body {
        Value::Array(calls) => calls,
        Value::Object(mut fields) => match fields.remove("calls") {
            Some(Value::Array(calls)) => calls,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OPENMIC_API_BASE;
    use serde_json::json;

    fn unconfigured() -> OpenMicClient {
        OpenMicClient::new(OpenMicConfig {
            api_key: String::new(),
            api_base: DEFAULT_OPENMIC_API_BASE.to_string(),
            phone_number: "+1234567890".to_string(),
        })
        .expect("client builds")
    }

    #[test]
    fn calls_are_read_from_wrapper_or_bare_array() {
        assert_eq!(extract_calls(json!({ "calls": [{ "id": 1 }] })).len(), 1);
        assert_eq!(extract_calls(json!([{ "id": 1 }, { "id": 2 }])).len(), 2);
        assert!(extract_calls(json!({ "data": [] })).is_empty());
        assert!(extract_calls(json!(null)).is_empty());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let mut client = unconfigured();
        client.config.api_base = "http://127.0.0.1:9/v1/".to_string();
        assert_eq!(client.endpoint("calls"), "http://127.0.0.1:9/v1/calls");
    }

    #[tokio::test]
    async fn missing_api_key_skips_upstream() {
        let client = unconfigured();
        assert!(client.call_logs(Some("bot_1")).await.is_empty());
        assert!(matches!(
            client.create_phone_call("+15550100", "bot_1").await,
            Err(OpenMicError::NotConfigured)
        ));
    }
}
