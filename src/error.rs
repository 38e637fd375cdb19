//! Error types for recap.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecapError {
    // Input document errors
    #[error("Failed to parse transcription document: {message}")]
    DocumentParse { message: String },

    #[error("Transcription document has no transcript field at results.transcripts[0].transcript")]
    TranscriptMissing,

    #[error("Transcript is empty, nothing to summarize")]
    EmptyTranscript,

    // Inference endpoint errors
    #[error("Generation request to {endpoint} failed: {message}")]
    InferenceRequest { endpoint: String, message: String },

    #[error("Generation request to {endpoint} timed out after {timeout_secs}s")]
    InferenceTimeout { endpoint: String, timeout_secs: u64 },

    #[error("Generation endpoint {endpoint} returned status {status}")]
    InferenceStatus { endpoint: String, status: u16 },

    #[error("Generation endpoint returned an unexpected response: {message}")]
    InferenceResponse { message: String },

    #[error("Generation endpoint returned no candidates")]
    NoCandidates,

    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Storage boundary (reading input, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

impl RecapError {
    /// True for errors caused by the input document rather than by recap
    /// or the endpoint. Callers use this to distinguish "bad input" from
    /// "pipeline failed" when reporting.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RecapError::DocumentParse { .. }
                | RecapError::TranscriptMissing
                | RecapError::EmptyTranscript
        )
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, RecapError>;
