//! HTTP client for the text-generation endpoint.
//!
//! Sends one JSON request per generation call and parses the candidate list
//! out of the response. A failed call is a failed call — no retries, no
//! caching; retry policy belongs to whoever invoked the pipeline.

use crate::defaults;
use crate::error::{RecapError, Result};
use crate::summarize::generator::{Generator, SamplingConfig};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wire format of a generation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    pub text_inputs: String,
    pub max_length: u32,
    pub num_return_sequences: u32,
    pub top_k: u32,
    pub top_p: f64,
    pub do_sample: bool,
}

impl GenerationRequest {
    /// Build a request from input text and sampling knobs.
    pub fn new(text: &str, sampling: &SamplingConfig) -> Self {
        Self {
            text_inputs: text.to_string(),
            max_length: sampling.max_length,
            num_return_sequences: sampling.num_return_sequences,
            top_k: sampling.top_k,
            top_p: sampling.top_p,
            do_sample: sampling.do_sample,
        }
    }
}

/// Wire format of a generation response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResponse {
    pub generated_texts: Vec<String>,
}

/// `Generator` backed by a remote HTTP endpoint.
pub struct EndpointGenerator {
    url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl EndpointGenerator {
    /// Create a client for the given endpoint URL with the default timeout.
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(defaults::TIMEOUT_SECS))
    }

    /// Create a client with an explicit per-call timeout.
    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RecapError::InferenceRequest {
                endpoint: url.to_string(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            url: url.to_string(),
            timeout_secs: timeout.as_secs(),
            client,
        })
    }

    /// The endpoint URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Generator for EndpointGenerator {
    async fn generate(&self, text: &str, sampling: &SamplingConfig) -> Result<Vec<String>> {
        let request = GenerationRequest::new(text, sampling);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RecapError::InferenceTimeout {
                        endpoint: self.url.clone(),
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    RecapError::InferenceRequest {
                        endpoint: self.url.clone(),
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecapError::InferenceStatus {
                endpoint: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let parsed: GenerationResponse =
            response
                .json()
                .await
                .map_err(|e| RecapError::InferenceResponse {
                    message: e.to_string(),
                })?;

        if parsed.generated_texts.is_empty() {
            return Err(RecapError::NoCandidates);
        }

        Ok(parsed.generated_texts)
    }

    fn name(&self) -> &str {
        &self.url
    }
}
