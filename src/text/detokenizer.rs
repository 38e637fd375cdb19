//! Detokenizer: reassembles a token window into readable text.
//!
//! Joins tokens with spaces, except that closing punctuation and contraction
//! suffixes attach to the preceding token and opening brackets attach to the
//! following one. Not an exact inverse of the tokenizer.

/// Characters that attach to the preceding token with no space.
const CLOSING: &[char] = &['.', ',', '!', '?', ';', ':', '%', ')', ']', '}'];

/// Characters that attach to the following token with no space.
const OPENING: &[char] = &['(', '[', '{'];

/// Reassemble a token sequence into a single string.
pub fn detokenize<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    let mut suppress_space = false;

    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }

        if out.is_empty() || suppress_space || attaches_left(token) {
            out.push_str(token);
        } else {
            out.push(' ');
            out.push_str(token);
        }

        suppress_space = attaches_right(token);
    }

    out
}

/// True if the token glues onto the preceding text (no space before it).
fn attaches_left(token: &str) -> bool {
    // Contraction suffixes and possessives: "'s", "'re", "n't", bare "'"
    if token == "n't" || token == "'" {
        return true;
    }
    if let Some(rest) = token.strip_prefix('\'')
        && !rest.is_empty()
        && rest.chars().all(|c| c.is_alphabetic())
    {
        return true;
    }
    // Closing punctuation, including ellipses
    token.chars().all(|c| CLOSING.contains(&c))
}

/// True if the following token glues onto this one (no space after it).
fn attaches_right(token: &str) -> bool {
    token.chars().all(|c| OPENING.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    #[test]
    fn empty_tokens_yield_empty_string() {
        let tokens: Vec<String> = Vec::new();
        assert_eq!(detokenize(&tokens), "");
    }

    #[test]
    fn plain_words_join_with_spaces() {
        assert_eq!(detokenize(&["the", "quick", "fox"]), "the quick fox");
    }

    #[test]
    fn no_space_before_sentence_punctuation() {
        assert_eq!(detokenize(&["Hello", ",", "world", "."]), "Hello, world.");
        assert_eq!(detokenize(&["Done", "!"]), "Done!");
        assert_eq!(detokenize(&["Why", "?"]), "Why?");
    }

    #[test]
    fn contractions_rejoin() {
        assert_eq!(detokenize(&["do", "n't", "stop"]), "don't stop");
        assert_eq!(detokenize(&["it", "'s", "fine"]), "it's fine");
        assert_eq!(detokenize(&["we", "'re", "late"]), "we're late");
    }

    #[test]
    fn brackets_attach_inward() {
        assert_eq!(
            detokenize(&["see", "(", "below", ")", "."]),
            "see (below)."
        );
    }

    #[test]
    fn ellipsis_attaches_to_preceding_word() {
        assert_eq!(detokenize(&["wait", "...", "go"]), "wait... go");
    }

    #[test]
    fn possessive_apostrophe_attaches() {
        assert_eq!(detokenize(&["dogs", "'", "bowls"]), "dogs' bowls");
    }

    #[test]
    fn percent_attaches_to_number() {
        assert_eq!(detokenize(&["100", "%", "sure"]), "100% sure");
    }

    #[test]
    fn empty_tokens_are_skipped() {
        assert_eq!(detokenize(&["a", "", "b"]), "a b");
    }

    #[test]
    fn tokenize_then_detokenize_reads_naturally() {
        let text = "We didn't finish; it's due Friday (hopefully).";
        let tokens = tokenize(text);
        assert_eq!(detokenize(&tokens), text);
    }
}
