use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cal_core::arabic_cal::{mapper, to_cal};

const WORDS: [(&str, &str); 3] = [
    ("plain", "دقسريا-دفيليفوس"),
    ("dotted", "دقِسَرِيَا-ذفِيلِيفُوس"),
    ("long_vowels", "لَبعِلدبٰبَيكُون"),
];

fn bench_to_cal(c: &mut Criterion) {
    // build the shared mapper outside the timed loop
    mapper();
    let mut group = c.benchmark_group("to_cal");
    for (name, word) in WORDS {
        group.bench_with_input(BenchmarkId::from_parameter(name), word, |b, w| {
            b.iter(|| to_cal(std::hint::black_box(w)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_to_cal);
criterion_main!(benches);
