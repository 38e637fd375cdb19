//! Word-level tokenizer.
//!
//! Splits text into words and punctuation marks following the usual
//! word-level conventions: punctuation becomes its own token, contraction
//! suffixes ("n't", "'s", "'re", ...) are split from their stem, hyphenated
//! words stay whole. Deterministic, no I/O.

/// Contraction suffixes split off after an apostrophe (lowercase).
const APOSTROPHE_SUFFIXES: &[&str] = &["s", "re", "ve", "ll", "d", "m", "em"];

/// Tokenize text into an ordered sequence of word-level tokens.
///
/// An empty or whitespace-only input yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for item in text.split_whitespace() {
        push_item(item, &mut tokens);
    }
    tokens
}

/// Split one whitespace-delimited item into tokens and append them in order.
fn push_item(item: &str, tokens: &mut Vec<String>) {
    let chars: Vec<char> = item.chars().collect();
    let mut start = 0;
    let mut end = chars.len();

    // Peel leading punctuation, one token per mark
    while start < end && !chars[start].is_alphanumeric() {
        tokens.push(chars[start].to_string());
        start += 1;
    }

    // Peel trailing punctuation into a holdback stack so order is preserved.
    // Runs of dots stay together ("..." is one token); other marks split.
    let mut trailing: Vec<String> = Vec::new();
    while end > start && !chars[end - 1].is_alphanumeric() {
        if chars[end - 1] == '.' {
            let mut dots = 0;
            while end - dots > start && chars[end - 1 - dots] == '.' {
                dots += 1;
            }
            trailing.push(".".repeat(dots));
            end -= dots;
        } else {
            trailing.push(chars[end - 1].to_string());
            end -= 1;
        }
    }

    if start < end {
        push_word(&chars[start..end], tokens);
    }

    while let Some(mark) = trailing.pop() {
        tokens.push(mark);
    }
}

/// Append a core word, splitting a contraction suffix if present.
fn push_word(word: &[char], tokens: &mut Vec<String>) {
    let joined: String = word.iter().collect();
    let lower = joined.to_lowercase();

    // "don't" → "do" + "n't"
    if let Some(stem_len) = lower.len().checked_sub(3)
        && lower.ends_with("n't")
        && stem_len > 0
    {
        let split_at = joined
            .char_indices()
            .nth(word.len() - 3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        tokens.push(joined[..split_at].to_string());
        tokens.push(joined[split_at..].to_string());
        return;
    }

    // "it's" → "it" + "'s", "we're" → "we" + "'re", ...
    if let Some(pos) = joined.rfind('\'') {
        let suffix = joined[pos + 1..].to_lowercase();
        if pos > 0 && APOSTROPHE_SUFFIXES.contains(&suffix.as_str()) {
            tokens.push(joined[..pos].to_string());
            tokens.push(joined[pos..].to_string());
            return;
        }
    }

    tokens.push(joined);
}
