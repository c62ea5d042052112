use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typescribe::compare_words;

fn benchmark_compare_words_short(c: &mut Criterion) {
    let original_text = "The quick brown fox jumps over the lazy dog. This pangram contains \
                         every letter of the alphabet at least once.";
    let typed_text = "The quick brwn fox jumps the lazy lazy dog. This pangram contains \
                      every leter of the alphabet at least once.";

    c.bench_function("compare_words_short", |b| {
        b.iter(|| compare_words(black_box(original_text), black_box(typed_text)))
    });
}

fn benchmark_compare_words_exam_length(c: &mut Criterion) {
    // Roughly a ten minute exam passage
    let original_words: Vec<String> = (0..400).map(|i| format!("word{}", i % 57)).collect();
    let typed_words: Vec<String> = original_words
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % 23 != 0)
        .map(|(idx, word)| {
            if idx % 17 == 0 {
                format!("{}x", word)
            } else {
                word.clone()
            }
        })
        .collect();

    let original_text = original_words.join(" ");
    let typed_text = typed_words.join(" ");

    c.bench_function("compare_words_exam_length", |b| {
        b.iter(|| compare_words(black_box(&original_text), black_box(&typed_text)))
    });
}

criterion_group!(
    benches,
    benchmark_compare_words_short,
    benchmark_compare_words_exam_length
);
criterion_main!(benches);
