use crate::defaults;
use crate::error::{RecapError, Result};
use crate::summarize::generator::SamplingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub sampling: SamplingSection,
    pub summarize: SummarizeConfig,
}

/// Generation endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Endpoint URL. Required for real runs; no usable default exists.
    pub url: Option<String>,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

/// Sampling knobs forwarded to the endpoint unmodified
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SamplingSection {
    pub max_length: u32,
    pub num_return_sequences: u32,
    pub top_k: u32,
    pub top_p: f64,
    pub do_sample: bool,
}

/// Chunking and pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummarizeConfig {
    pub window_size: usize,
    pub instruction: String,
    pub map_concurrency: usize,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: defaults::TIMEOUT_SECS,
        }
    }
}

impl Default for SamplingSection {
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

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            window_size: defaults::WINDOW_SIZE,
            instruction: defaults::INSTRUCTION.to_string(),
            map_concurrency: defaults::MAP_CONCURRENCY,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is missing or contains invalid TOML.
    /// Missing fields use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RecapError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                RecapError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing; invalid TOML is still
    /// an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(RecapError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - RECAP_ENDPOINT → endpoint.url
    /// - RECAP_INSTRUCTION → summarize.instruction
    /// - RECAP_WINDOW_SIZE → summarize.window_size
    ///
    /// Empty or unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("RECAP_ENDPOINT")
            && !url.is_empty()
        {
            self.endpoint.url = Some(url);
        }

        if let Ok(instruction) = std::env::var("RECAP_INSTRUCTION")
            && !instruction.is_empty()
        {
            self.summarize.instruction = instruction;
        }

        if let Ok(window) = std::env::var("RECAP_WINDOW_SIZE")
            && let Ok(window) = window.parse::<usize>()
            && window > 0
        {
            self.summarize.window_size = window;
        }

        self
    }

    /// Validate values a TOML file could set to something unusable.
    pub fn validate(&self) -> Result<()> {
        if self.summarize.window_size == 0 {
            return Err(RecapError::ConfigInvalidValue {
                key: "summarize.window_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.endpoint.timeout_secs == 0 {
            return Err(RecapError::ConfigInvalidValue {
                key: "endpoint.timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.sampling.num_return_sequences == 0 {
            return Err(RecapError::ConfigInvalidValue {
                key: "sampling.num_return_sequences".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.sampling.top_p) {
            return Err(RecapError::ConfigInvalidValue {
                key: "sampling.top_p".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        Ok(())
    }

    /// The sampling knobs as the generator expects them.
    pub fn sampling_config(&self) -> SamplingConfig {
        SamplingConfig {
            max_length: self.sampling.max_length,
            num_return_sequences: self.sampling.num_return_sequences,
            top_k: self.sampling.top_k,
            top_p: self.sampling.top_p,
            do_sample: self.sampling.do_sample,
        }
    }

    /// Effective configuration rendered as TOML, for `recap config dump`.
    pub fn to_display_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RecapError::Other(e.to_string()))
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/recap/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("recap")
            .join("config.toml")
    }
}
