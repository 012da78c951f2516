//! HTTP client the presentation layer uses to reach `/api/analyze`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::analysis::{AnalysisRequest, AnalysisResult};

#[derive(Debug, Error)]
pub enum ProxyClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend API error (status {status}): {body}")]
    Status { status: u16, body: String },
}

/// Anything that can run an analysis for the UI.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn analyze(
        &self,
        job_description: &str,
        resume_text: &str,
    ) -> Result<AnalysisResult, ProxyClientError>;
}

#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    endpoint: String,
}

impl ProxyClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, ProxyClientError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl AnalysisApi for ProxyClient {
    async fn analyze(
        &self,
        job_description: &str,
        resume_text: &str,
    ) -> Result<AnalysisResult, ProxyClientError> {
        let request = AnalysisRequest {
            job_description: job_description.to_string(),
            resume_text: resume_text.to_string(),
        };

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProxyClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: AnalysisResult = response.json().await?;
        debug!(overall_score = result.overall_score, "Proxy returned analysis");
        Ok(result)
    }
}
