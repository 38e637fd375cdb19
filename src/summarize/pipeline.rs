//! Map/reduce summarization pipeline.
//!
//! Drives one transcript through tokenize → chunk → per-chunk summarization
//! (map) → joined re-summarization (reduce). Chunk summaries are collected in
//! chunk order even when map calls run concurrently; any generator error
//! aborts the run with nothing emitted.

use crate::chunker::{Chunk, chunk_tokens};
use crate::defaults;
use crate::error::{RecapError, Result};
use crate::summarize::generator::{Generator, SamplingConfig};
use crate::text::tokenize;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Configuration for the summarization pipeline.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Maximum tokens per chunk.
    pub window_size: usize,
    /// Instruction appended (on its own line) to every generation input.
    pub instruction: String,
    /// Sampling knobs passed through to the generator.
    pub sampling: SamplingConfig,
    /// Number of in-flight map-phase calls (1 = sequential).
    pub map_concurrency: usize,
    /// Suppress status messages.
    pub quiet: bool,
    /// Verbosity level (0=results only, 1=stage progress, 2=full diagnostics).
    pub verbosity: u8,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            window_size: defaults::WINDOW_SIZE,
            instruction: defaults::INSTRUCTION.to_string(),
            sampling: SamplingConfig::default(),
            map_concurrency: defaults::MAP_CONCURRENCY,
            quiet: false,
            verbosity: 0,
        }
    }
}

/// Result of one pipeline run, serialized as the output document.
///
/// `summary` holds the full candidate list of the reduce call;
/// `chunk_summaries[i]` is the chosen candidate for chunk `i`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryResult {
    pub summary: Vec<String>,
    pub chunk_summaries: Vec<String>,
}

/// Summarization pipeline: Tokenizer → Chunker → map → reduce.
pub struct Summarizer {
    config: SummarizerConfig,
    generator: Arc<dyn Generator>,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Summarizer {
    /// Create a pipeline over the given generator.
    ///
    /// Fails if `window_size` is zero; a zero `map_concurrency` is treated
    /// as 1.
    pub fn new(config: SummarizerConfig, generator: Arc<dyn Generator>) -> Result<Self> {
        if config.window_size == 0 {
            return Err(RecapError::ConfigInvalidValue {
                key: "summarize.window_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(Self { config, generator })
    }

    /// Summarize one transcript.
    ///
    /// An empty transcript (zero tokens) is an input error: no chunks are
    /// produced and no generator call is made.
    pub async fn run(&self, transcript: &str) -> Result<SummaryResult> {
        let tokens = tokenize(transcript);
        if tokens.is_empty() {
            return Err(RecapError::EmptyTranscript);
        }

        let chunks = chunk_tokens(&tokens, self.config.window_size);
        if !self.config.quiet && self.config.verbosity >= 1 {
            eprintln!(
                "recap: transcript split into {} chunk(s) of up to {} tokens",
                chunks.len(),
                self.config.window_size
            );
        }

        let chunk_summaries = self.summarize_chunks(&chunks).await?;

        if !self.config.quiet && self.config.verbosity >= 1 {
            eprintln!("recap: combining {} chunk summaries", chunk_summaries.len());
        }
        let combined = chunk_summaries.join(" ");
        let summary = self
            .generator
            .generate(&self.with_instruction(&combined), &self.config.sampling)
            .await?;

        Ok(SummaryResult {
            summary,
            chunk_summaries,
        })
    }

    /// Map phase: one summary per chunk, collected in chunk order.
    ///
    /// `buffered` dispatches up to `map_concurrency` calls at once but yields
    /// results in input order, so no reordering bookkeeping is needed. The
    /// first error aborts collection.
    async fn summarize_chunks(&self, chunks: &[Chunk]) -> Result<Vec<String>> {
        let concurrency = self.config.map_concurrency.max(1);
        let total = chunks.len();

        stream::iter(chunks.iter().enumerate().map(|(index, chunk)| {
            let input = self.with_instruction(&chunk.text);
            async move {
                if !self.config.quiet && self.config.verbosity >= 2 {
                    eprintln!(
                        "recap: summarizing chunk {}/{} ({} tokens, {} chars input)",
                        index + 1,
                        total,
                        chunk.len(),
                        input.len()
                    );
                }
                let candidates = self.generator.generate(&input, &self.config.sampling).await?;
                candidates.into_iter().next().ok_or(RecapError::NoCandidates)
            }
        }))
        .buffered(concurrency)
        .try_collect()
        .await
    }

    /// Append the instruction on its own line, as the endpoint expects.
    fn with_instruction(&self, text: &str) -> String {
        format!("{text}\n{}", self.config.instruction)
    }
}
