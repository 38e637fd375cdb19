use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use recap::chunker::chunk_tokens;
use recap::text::tokenize;

/// Build a transcript-shaped input: sentences with punctuation and
/// contractions, sized to roughly `n_words` words.
fn synthetic_transcript(n_words: usize) -> String {
    let sentence = "Well, I don't think we're ready to ship yet. \
                    Let's review the deadline (again) and decide.";
    let words_per_sentence = sentence.split_whitespace().count();
    let repeats = n_words.div_ceil(words_per_sentence);
    let mut out = String::with_capacity(repeats * (sentence.len() + 1));
    for _ in 0..repeats {
        out.push_str(sentence);
        out.push(' ');
    }
    out
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_and_chunk");

    for n_words in [1_000usize, 10_000, 100_000] {
        let transcript = synthetic_transcript(n_words);

        group.bench_with_input(
            BenchmarkId::new("tokenize", n_words),
            &transcript,
            |b, transcript| {
                b.iter(|| tokenize(black_box(transcript)));
            },
        );

        let tokens = tokenize(&transcript);
        group.bench_with_input(
            BenchmarkId::new("chunk_400", n_words),
            &tokens,
            |b, tokens| {
                b.iter(|| chunk_tokens(black_box(tokens), 400));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
