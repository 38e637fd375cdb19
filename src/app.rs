//! Summarization application entry point.
//!
//! Orchestrates the complete flow for one transcript:
//! read document → extract transcript → map/reduce summarize → write result.

use crate::config::Config;
use crate::error::{RecapError, Result};
use crate::summarize::endpoint::EndpointGenerator;
use crate::summarize::pipeline::{Summarizer, SummarizerConfig, SummaryResult};
use crate::transcript::TranscriptionDocument;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// CLI overrides applied on top of the loaded configuration.
#[derive(Debug, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub window_size: Option<usize>,
    pub instruction: Option<String>,
    pub timeout_secs: Option<u64>,
    pub concurrency: Option<usize>,
}

/// Run the summarize command: read document → summarize → write result.
///
/// # Arguments
/// * `config` - Base configuration (already env-overridden)
/// * `input` - Document path, or None/"-" for stdin
/// * `output` - Result path (file or directory), or None for stdout
/// * `overrides` - CLI flag overrides
/// * `quiet` - Suppress status messages
/// * `verbosity` - Verbosity level (0=results, 1=progress, 2=diagnostics)
pub async fn run_summarize_command(
    mut config: Config,
    input: Option<&Path>,
    output: Option<&Path>,
    overrides: Overrides,
    quiet: bool,
    verbosity: u8,
) -> Result<()> {
    // Apply CLI overrides
    if let Some(url) = overrides.endpoint {
        config.endpoint.url = Some(url);
    }
    if let Some(window) = overrides.window_size {
        config.summarize.window_size = window;
    }
    if let Some(instruction) = overrides.instruction {
        config.summarize.instruction = instruction;
    }
    if let Some(timeout) = overrides.timeout_secs {
        config.endpoint.timeout_secs = timeout;
    }
    if let Some(concurrency) = overrides.concurrency {
        config.summarize.map_concurrency = concurrency;
    }
    config.validate()?;

    let url = config
        .endpoint
        .url
        .clone()
        .ok_or_else(|| RecapError::ConfigInvalidValue {
            key: "endpoint.url".to_string(),
            message: "no endpoint configured; set --endpoint, RECAP_ENDPOINT, or [endpoint] url"
                .to_string(),
        })?;

    let document = read_input(input)?;
    if !quiet && verbosity >= 1 {
        eprintln!(
            "recap: read {} bytes from {}",
            document.len(),
            input.map_or("stdin".to_string(), |p| p.display().to_string())
        );
    }

    let generator = Arc::new(EndpointGenerator::with_timeout(
        &url,
        Duration::from_secs(config.endpoint.timeout_secs),
    )?);
    let summarizer = Summarizer::new(
        SummarizerConfig {
            window_size: config.summarize.window_size,
            instruction: config.summarize.instruction.clone(),
            sampling: config.sampling_config(),
            map_concurrency: config.summarize.map_concurrency,
            quiet,
            verbosity,
        },
        generator,
    )?;

    let result = summarize_document(&document, &summarizer).await?;

    write_result(&result, input, output)?;
    if !quiet && verbosity >= 1 {
        eprintln!("recap: done");
    }
    Ok(())
}

/// Parse the transcription document and run the pipeline on its transcript.
pub async fn summarize_document(json: &str, summarizer: &Summarizer) -> Result<SummaryResult> {
    let document = TranscriptionDocument::from_json(json)?;
    summarizer.run(document.transcript()?).await
}

/// Read the input document from a file path or stdin ("-" or None).
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write the result document to the output path, or stdout when absent.
fn write_result(result: &SummaryResult, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let json =
        serde_json::to_string_pretty(result).map_err(|e| RecapError::Other(e.to_string()))?;

    match output {
        None => {
            println!("{json}");
            Ok(())
        }
        Some(path) => {
            let target = resolve_output_path(path, input);
            std::fs::write(&target, json)?;
            Ok(())
        }
    }
}

/// Resolve the concrete output file path.
///
/// A directory output gets a `<input-stem>.summary.json` file inside it,
/// mirroring how the upstream pipeline derives the result name from the
/// input object name. Stdin input falls back to `transcript.summary.json`.
fn resolve_output_path(output: &Path, input: Option<&Path>) -> PathBuf {
    if !output.is_dir() {
        return output.to_path_buf();
    }

    let stem = input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");
    output.join(format!("{stem}.summary.json"))
}
