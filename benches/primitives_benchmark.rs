use bitprim::{constant, BitPrimitives, Rotation, BACKEND};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::distributions::{Distribution, Uniform};

fn bench_primitives(b: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let sample = Uniform::new(1, u64::MAX);

    let mut group = b.benchmark_group(format!("primitives ({:?})", BACKEND));
    group.bench_function("count_set_bits u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.count_set_bits()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("parity_bits u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.parity_bits()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("first_set_bit u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.first_set_bit()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("fast_log2 u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(e.fast_log2()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("leading_zero_bits u16", |b| {
        b.iter_batched(
            || (sample.sample(&mut rng) as u16) | 1,
            |e| black_box(e.leading_zero_bits()),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("rotate_left_bits u32", |b| {
        let amount = Rotation::<u32>::constant::<13>();
        b.iter_batched(
            || sample.sample(&mut rng) as u32,
            |e| black_box(e.rotate_left_bits(amount)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_fallback(b: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let sample = Uniform::new(1, u64::MAX);

    let mut group = b.benchmark_group("portable");
    group.bench_function("count_set_bits u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(constant::count_set_bits_u64(e)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("parity_bits u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(constant::parity_bits_u64(e)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("first_set_bit u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(constant::first_set_bit_u64(e)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("fast_log2 u64", |b| {
        b.iter_batched(
            || sample.sample(&mut rng),
            |e| black_box(constant::fast_log2_u64(e)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

/// Popcount over a slice of words, the inner loop of a rank query.
fn bench_word_rank(b: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let sample = Uniform::new(0, u64::MAX);

    let mut group = b.benchmark_group("word rank");
    for len in [1 << 8, 1 << 12, 1 << 16] {
        let words: Vec<u64> = (0..len).map(|_| sample.sample(&mut rng)).collect();
        group.bench_with_input(format!("{} words", len), &words, |b, words| {
            b.iter(|| black_box(words.iter().map(|w| w.count_set_bits()).sum::<u32>()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_primitives, bench_fallback, bench_word_rank);
criterion_main!(benches);
