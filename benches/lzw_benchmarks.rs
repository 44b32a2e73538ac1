use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lzw_core::lzw::{build_seed_dictionary, decode, encode, SeedDictionary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn text(size: usize) -> Vec<u8> {
    b"TOBEORNOTTOBEORTOBEORNOT#"
        .iter()
        .cycle()
        .take(size)
        .copied()
        .collect()
}

fn run(size: usize) -> Vec<u8> {
    vec![b'a'; size]
}

fn random(size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size).map(|_| rng.gen()).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_encode");
    let inputs: [(&str, fn(usize) -> Vec<u8>); 3] =
        [("text", text), ("run", run), ("random", random)];
    for (name, generate) in inputs {
        for size in SIZES {
            let input = generate(size);
            let seed = build_seed_dictionary(&input);
            group.bench_with_input(BenchmarkId::new(name, size), &input, |b, input| {
                b.iter(|| encode(black_box(input.as_slice()), black_box(&seed)))
            });
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_decode");
    let seed: SeedDictionary<u8> = (0..=255u8).collect();
    for size in SIZES {
        let input = text(size);
        let (codes, _) = encode(&input, &seed).unwrap();
        group.bench_with_input(BenchmarkId::new("text", size), &codes, |b, codes| {
            b.iter(|| decode(black_box(codes.as_slice()), black_box(&seed)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
