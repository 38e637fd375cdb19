//! Word-level text processing: tokenization and detokenization.
//!
//! The tokenizer defines the unit the chunker counts in; the detokenizer
//! turns a token window back into readable model input. The pair is not an
//! exact inverse — it only has to produce text the generation model can
//! coherently condition on.

pub mod detokenizer;
pub mod tokenizer;

pub use detokenizer::detokenize;
pub use tokenizer::tokenize;
