//! Liu Yao API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;

use crate::report::DivinationReport;

/// API Client for a remote Liu Yao server
pub struct LiuyaoClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

/// Body of `POST /enhanced-divination`
#[derive(Debug, Default, Serialize)]
pub struct EnhancedDivinationRequest {
    pub divination_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_yaos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_original: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_changed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_changed: Option<String>,
}

impl LiuyaoClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(|k| k.to_string()),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("Authorization", format!("Bearer {}", key)),
            None => builder,
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Cast remotely
    pub async fn divine(&self, request: &EnhancedDivinationRequest) -> Result<DivinationReport> {
        let url = format!("{}/enhanced-divination", self.base_url);
        let resp = self
            .authorized(self.client.post(&url))
            .json(request)
            .send()
            .await
            .context("Failed to connect to Liu Yao API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let report: DivinationReport = resp.json().await.context("Failed to parse response")?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_skips_empty_fields() {
        let request = EnhancedDivinationRequest {
            divination_type: "time".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"divination_type": "time"}));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = LiuyaoClient::new("http://localhost:8000/", None);
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
