//! Summarization: the generator capability and the map/reduce pipeline.

pub mod endpoint;
pub mod generator;
pub mod pipeline;

pub use endpoint::EndpointGenerator;
pub use generator::{Generator, MockGenerator, SamplingConfig};
pub use pipeline::{Summarizer, SummarizerConfig, SummaryResult};
