//! Token-window chunker.
//!
//! Partitions a token sequence into ordered, non-overlapping, gap-free
//! windows of at most `window_size` tokens. Every chunk except the last
//! holds exactly `window_size` tokens; the last takes all remaining tokens,
//! so its size is in `(0, window_size]`. An empty token sequence yields
//! zero chunks — the caller decides what that means.

use crate::text::detokenize;

/// A contiguous token window `[start, end)` plus its detokenized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// First token index covered by this chunk (inclusive).
    pub start: usize,
    /// One past the last token index covered by this chunk.
    pub end: usize,
    /// Detokenized text of the window, ready as model input.
    pub text: String,
}

impl Chunk {
    /// Number of tokens in this chunk.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True if the chunk covers no tokens. Never produced by [`chunk_tokens`].
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Partition `tokens` into windows of at most `window_size` tokens.
///
/// The chunk count is `ceil(tokens.len() / window_size)`. All chunks but the
/// last cover exactly `window_size` tokens; the last covers the remainder.
///
/// # Panics
/// Panics if `window_size` is zero. Configuration validation rejects a zero
/// window before the pipeline runs.
pub fn chunk_tokens<S: AsRef<str>>(tokens: &[S], window_size: usize) -> Vec<Chunk> {
    assert!(window_size > 0, "window_size must be at least 1");

    let count = tokens.len().div_ceil(window_size);
    let mut chunks = Vec::with_capacity(count);

    for i in 0..count {
        let start = i * window_size;
        // The last chunk takes all remaining tokens, not a fixed-size slice.
        let end = if i == count - 1 {
            tokens.len()
        } else {
            start + window_size
        };
        chunks.push(Chunk {
            start,
            end,
            text: detokenize(&tokens[start..end]),
        });
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_tokens(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tok{i}")).collect()
    }

    /// Assert the chunks partition `[0, n)` exactly: ordered, contiguous,
    /// no gaps, no overlaps.
    fn assert_exact_partition(chunks: &[Chunk], n: usize) {
        let mut cursor = 0;
        for chunk in chunks {
            assert_eq!(chunk.start, cursor, "gap or overlap at token {cursor}");
            assert!(chunk.end > chunk.start, "empty chunk at {}", chunk.start);
            cursor = chunk.end;
        }
        assert_eq!(cursor, n, "chunks do not cover the full sequence");
    }

    #[test]
    fn empty_sequence_yields_zero_chunks() {
        let tokens: Vec<String> = Vec::new();
        assert!(chunk_tokens(&tokens, 400).is_empty());
    }

    #[test]
    fn chunk_count_is_ceiling_of_n_over_w() {
        for (n, w, expected) in [
            (1, 1, 1),
            (1, 400, 1),
            (399, 400, 1),
            (400, 400, 1),
            (401, 400, 2),
            (800, 400, 2),
            (801, 400, 3),
            (900, 400, 3),
        ] {
            let chunks = chunk_tokens(&fake_tokens(n), w);
            assert_eq!(chunks.len(), expected, "N={n} W={w}");
            assert_exact_partition(&chunks, n);
        }
    }

    #[test]
    fn reference_scenario_900_tokens_window_400() {
        let chunks = chunk_tokens(&fake_tokens(900), 400);
        let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(sizes, [400, 400, 100]);
        assert_exact_partition(&chunks, 900);
    }

    #[test]
    fn all_but_last_are_exactly_window_sized() {
        let chunks = chunk_tokens(&fake_tokens(1234), 100);
        let (last, full) = chunks.split_last().unwrap();
        for chunk in full {
            assert_eq!(chunk.len(), 100);
        }
        assert_eq!(last.len(), 34);
    }

    #[test]
    fn last_chunk_size_is_between_one_and_window() {
        for n in 1..=50 {
            let chunks = chunk_tokens(&fake_tokens(n), 7);
            let last = chunks.last().unwrap();
            assert!(last.len() >= 1 && last.len() <= 7, "N={n}");
        }
    }

    #[test]
    fn exact_window_boundary_yields_single_full_chunk() {
        // N = W must produce one chunk covering the whole sequence — the
        // remainder rule, not a fixed-size re-slice.
        let chunks = chunk_tokens(&fake_tokens(400), 400);
        assert_eq!(chunks.len(), 1);
        assert_eq!((chunks[0].start, chunks[0].end), (0, 400));
    }

    #[test]
    fn window_of_one_gives_one_token_per_chunk() {
        let chunks = chunk_tokens(&fake_tokens(5), 1);
        assert_eq!(chunks.len(), 5);
        assert_exact_partition(&chunks, 5);
        assert!(chunks.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn chunk_text_is_detokenized_window() {
        let tokens = ["Hello", ",", "world", ".", "Bye", "."];
        let chunks = chunk_tokens(&tokens, 4);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "Hello, world.");
        assert_eq!(chunks[1].text, "Bye.");
    }

    #[test]
    #[should_panic(expected = "window_size must be at least 1")]
    fn zero_window_panics() {
        chunk_tokens(&fake_tokens(3), 0);
    }
}
