//! Performance benchmarks for the packed codec
//!
//! Run with: cargo bench --bench convert_benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palette_core::packed::PackedColor;
use palette_core::palette;

fn bench_pack_unpack(c: &mut Criterion) {
    c.bench_function("pack_srgb", |b| {
        b.iter(|| {
            black_box(PackedColor::from_rgba(black_box([0.31, 0.26, 0.71, 1.0])));
        });
    });

    let packed = PackedColor::from_rgba([0.31, 0.26, 0.71, 1.0]);
    c.bench_function("unpack_srgb", |b| {
        b.iter(|| {
            black_box(black_box(packed).to_rgba());
        });
    });
}

fn bench_palette_queries(c: &mut Criterion) {
    // Touch the tables once so initialization cost stays out of the loop.
    let _ = palette::names_by_hue();

    c.bench_function("lookup_hit", |b| {
        b.iter(|| {
            black_box(palette::lookup(black_box("Ocean Blue"), palette::TRANSPARENT));
        });
    });

    c.bench_function("closest_name", |b| {
        b.iter(|| {
            black_box(palette::closest_name(black_box([0.31, 0.26, 0.71])));
        });
    });
}

criterion_group!(benches, bench_pack_unpack, bench_palette_queries);
criterion_main!(benches);
