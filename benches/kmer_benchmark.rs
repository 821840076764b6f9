use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kcounter::kmer::Kmer;
use kcounter::run::count_kmers_in_sequences;
use kcounter::{count_kmers, CountOptions};

fn bench_from_sub(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kmer::from_sub");

    for k in [5, 11, 21, 31] {
        let seq = "ACGT".repeat(k / 4 + 1);
        let sub = seq.as_bytes()[..k].to_vec();

        group.bench_with_input(BenchmarkId::from_parameter(k), &sub, |b, sub| {
            b.iter(|| Kmer::from_sub(black_box(sub)));
        });
    }

    group.finish();
}

fn bench_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kmer::canonical");

    for k in [5, 11, 21, 31] {
        let seq = "TGCA".repeat(k / 4 + 1);
        let kmer = Kmer::from_sub(&seq.as_bytes()[..k]).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(k), &kmer, |b, kmer| {
            b.iter(|| black_box(kmer.clone().canonical()));
        });
    }

    group.finish();
}

fn bench_count_kmers(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_kmers");
    let seq = "ACGTNACGTACGTTGCAacgtGGCCTTAA".repeat(100);

    for (name, options) in [
        ("raw", CountOptions::new()),
        ("canonical", CountOptions::new().canonical(true)),
        ("relative", CountOptions::new().relative(true)),
    ] {
        group.bench_with_input(BenchmarkId::new(name, 11), &seq, |b, seq| {
            b.iter(|| count_kmers(black_box(seq), black_box(11), options));
        });
    }

    group.finish();
}

fn bench_count_kmers_in_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_kmers_in_sequences");

    let records: Vec<Bytes> = (0..100)
        .map(|_| Bytes::from("ACGTACGTACGTACGTACGTACGTACGTACGT".repeat(10)))
        .collect();

    for k in [5, 11, 21] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| {
                count_kmers_in_sequences(
                    black_box(&records),
                    black_box(k),
                    CountOptions::new().canonical(true),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_from_sub,
    bench_canonical,
    bench_count_kmers,
    bench_count_kmers_in_sequences,
);

criterion_main!(benches);
