use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tuplex::prelude::*;

/// Access through a list should cost the same as access through the equivalent native tuple.
fn bench_access(c: &mut Criterion) {
    let mut g = c.benchmark_group("access");

    let list = tuplex!(1u64, 2u32, 3u16, 4u8, 5u64, 6u32, 7u16, 8u8);
    let native = (1u64, 2u32, 3u16, 4u8, 5u64, 6u32, 7u16, 8u8);

    g.bench_function("tuplex", |b| {
        b.iter(|| {
            let list = black_box(&list);
            *list.get::<0>() + *list.get::<4>() + u64::from(*list.get::<7>())
        })
    });
    g.bench_function("native", |b| {
        b.iter(|| {
            let native = black_box(&native);
            native.0 + native.4 + u64::from(native.7)
        })
    });
    g.finish();
}

/// Concatenation should cost the same as moving or cloning the elements by hand.
fn bench_concat(c: &mut Criterion) {
    let mut g = c.benchmark_group("concat");

    let left = tuplex!(1u64, String::from("two"));
    let middle = tuplex!(vec![3u8; 16]);
    let right = tuplex!(4u32, 'c', 6i64);

    g.bench_function("borrowed", |bench| {
        bench.iter(|| concat((black_box(&left), black_box(&middle), black_box(&right))))
    });
    g.bench_function("owned", |bench| {
        bench.iter_batched(
            || (left.clone(), middle.clone(), right.clone()),
            |(a, b, c)| concat((a, b, c)),
            criterion::BatchSize::SmallInput,
        )
    });
    g.bench_function("by hand", |bench| {
        bench.iter(|| {
            let (a, b, c) = (black_box(&left), black_box(&middle), black_box(&right));
            tuplex!(
                *a.get::<0>(),
                a.get::<1>().clone(),
                b.get::<0>().clone(),
                *c.get::<0>(),
                *c.get::<1>(),
                *c.get::<2>()
            )
        })
    });
    g.finish();
}

criterion_group!(benches, bench_access, bench_concat);
criterion_main!(benches);
