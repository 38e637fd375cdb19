//! Transcription-service document parsing.
//!
//! The upstream speech-to-text service writes a JSON document with the
//! transcript text at `results.transcripts[0].transcript`. Only that field
//! matters here; everything else in the document is ignored.

use crate::error::{RecapError, Result};
use serde::Deserialize;

/// Top level of the transcription-service output document.
#[derive(Debug, Deserialize)]
pub struct TranscriptionDocument {
    pub results: TranscriptionResults,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptionResults {
    #[serde(default)]
    pub transcripts: Vec<TranscriptEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptEntry {
    pub transcript: String,
}

impl TranscriptionDocument {
    /// Parse a transcription document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RecapError::DocumentParse {
            message: e.to_string(),
        })
    }

    /// The transcript text, or `TranscriptMissing` if the transcripts list
    /// is empty.
    pub fn transcript(&self) -> Result<&str> {
        self.results
            .transcripts
            .first()
            .map(|entry| entry.transcript.as_str())
            .ok_or(RecapError::TranscriptMissing)
    }
}
