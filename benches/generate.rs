use abacus::{Constraints, RowGenerator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_generate(c: &mut Criterion) {
    let plain = Constraints::default();
    let shaped = Constraints {
        count: 6,
        max_magnitude: 9,
        max_sum: 80,
        leading_digit_count: 2,
        leading_digit_cap: 8,
        trailing_values: vec![4],
        sum_digit_cap: 5,
        ..Constraints::default()
    };

    let mut generator = RowGenerator::seeded(42);
    c.bench_function("generate_row_default", |b| {
        b.iter(|| generator.generate(black_box(&plain)))
    });
    c.bench_function("generate_row_shaped", |b| {
        b.iter(|| generator.generate(black_box(&shaped)))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
