//! Generator trait for text generation.
//!
//! This trait allows swapping implementations (real HTTP endpoint vs mock).

use crate::defaults;
use crate::error::{RecapError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Sampling configuration passed through to the endpoint unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    /// Maximum output length per generation call.
    pub max_length: u32,
    /// Number of candidate sequences to request.
    pub num_return_sequences: u32,
    /// Top-k sampling cutoff.
    pub top_k: u32,
    /// Top-p (nucleus) sampling cutoff.
    pub top_p: f64,
    /// Whether sampling is enabled at all.
    pub do_sample: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_length: defaults::MAX_LENGTH,
            num_return_sequences: defaults::NUM_RETURN_SEQUENCES,
            top_k: defaults::TOP_K,
            top_p: defaults::TOP_P,
            do_sample: defaults::DO_SAMPLE,
        }
    }
}

/// Trait for length-bounded text generation.
///
/// One call sends one input text and returns the endpoint's ordered candidate
/// strings. Implementations must be safe to share across concurrent map-phase
/// calls.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate candidates for the given input text.
    ///
    /// The returned list is ordered as produced by the endpoint; callers that
    /// only need one summary take the first candidate.
    async fn generate(&self, text: &str, sampling: &SamplingConfig) -> Result<Vec<String>>;

    /// Name of the backing endpoint or model, for status output.
    fn name(&self) -> &str;
}

/// Mock generator for testing.
///
/// Returns a deterministic candidate derived from the input text, records
/// every input it was called with, and can be configured to fail on the
/// n-th call.
pub struct MockGenerator {
    name: String,
    fail_on_call: Option<usize>,
    calls: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Create a mock that summarizes input `text` as `"summary(<text>)"`.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fail_on_call: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail the n-th generate call (1-based) with an inference error.
    pub fn with_failure_on_call(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }

    /// Inputs received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The deterministic candidate produced for a given input.
    pub fn candidate_for(text: &str) -> String {
        format!("summary({text})")
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, text: &str, sampling: &SamplingConfig) -> Result<Vec<String>> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
            calls.push(text.to_string());
            calls.len()
        };

        if self.fail_on_call == Some(call_number) {
            return Err(RecapError::InferenceRequest {
                endpoint: self.name.clone(),
                message: format!("mock failure on call {call_number}"),
            });
        }

        let candidate = Self::candidate_for(text);
        Ok((0..sampling.num_return_sequences.max(1))
            .map(|_| candidate.clone())
            .collect())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_deterministic_candidate() {
        let generator = MockGenerator::new("mock");
        let sampling = SamplingConfig::default();

        let first = generator.generate("some input", &sampling).await.unwrap();
        let second = generator.generate("some input", &sampling).await.unwrap();

        assert_eq!(first, vec!["summary(some input)"]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn mock_respects_num_return_sequences() {
        let generator = MockGenerator::new("mock");
        let sampling = SamplingConfig {
            num_return_sequences: 3,
            ..Default::default()
        };

        let candidates = generator.generate("text", &sampling).await.unwrap();
        assert_eq!(candidates.len(), 3);
    }

    #[tokio::test]
    async fn mock_records_inputs_in_call_order() {
        let generator = MockGenerator::new("mock");
        let sampling = SamplingConfig::default();

        generator.generate("first", &sampling).await.unwrap();
        generator.generate("second", &sampling).await.unwrap();

        assert_eq!(generator.calls(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn mock_fails_on_configured_call() {
        let generator = MockGenerator::new("mock").with_failure_on_call(2);
        let sampling = SamplingConfig::default();

        assert!(generator.generate("one", &sampling).await.is_ok());
        let err = generator.generate("two", &sampling).await.unwrap_err();
        assert!(matches!(err, RecapError::InferenceRequest { .. }));
        assert!(generator.generate("three", &sampling).await.is_ok());
    }

    #[test]
    fn sampling_defaults_match_reference_values() {
        let sampling = SamplingConfig::default();
        assert_eq!(sampling.max_length, 100);
        assert_eq!(sampling.num_return_sequences, 1);
        assert_eq!(sampling.top_k, 50);
        assert!((sampling.top_p - 0.95).abs() < f64::EPSILON);
        assert!(sampling.do_sample);
    }

    #[test]
    fn generator_trait_object_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Generator>();
    }
}
