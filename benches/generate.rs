//! Generation and estimation throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use passforge::{estimate_strength, GenerationCriteria, PasswordGenerator, ReseedingRng};

fn bench_generate(c: &mut Criterion) {
    let mut generator = PasswordGenerator::with_source(ReseedingRng::from_seed([7; 32]));

    for length in [16usize, 128] {
        let criteria = GenerationCriteria::with_length(length);
        c.bench_function(&format!("generate_{length}"), |b| {
            b.iter(|| generator.generate(black_box(&criteria)))
        });
    }
}

fn bench_estimate(c: &mut Criterion) {
    let password = "k7#Qm2!vR9@xLp4$Wz8&Nc5^Tb3*Hd6(";
    c.bench_function("estimate_strength", |b| {
        b.iter(|| estimate_strength(black_box(password)))
    });
}

criterion_group!(benches, bench_generate, bench_estimate);
criterion_main!(benches);
