use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use morton_lut::{LutEncoder, LutEncoder2D32, LutEncoder3D32, LutEncoder3D64};

pub fn encode_2d_benchmark(c: &mut Criterion) {
    let encoder = LutEncoder2D32::new();
    c.bench_function("2d32 min", |b| {
        b.iter(|| encoder.encode(black_box([u16::MIN as u32; 2])))
    });
    c.bench_function("2d32 max", |b| {
        b.iter(|| encoder.encode(black_box([u16::MAX as u32; 2])))
    });

    let mut group = c.benchmark_group("2d32 grid");
    group.throughput(Throughput::Elements(1 << 16));
    group.bench_function("lut8", |b| {
        b.iter(|| {
            for x in 0..256 {
                for y in 0..256 {
                    black_box(encoder.encode([x, y]));
                }
            }
        })
    });
    let encoder = LutEncoder::<u32, 2, 16, 4>::new();
    group.bench_function("lut4", |b| {
        b.iter(|| {
            for x in 0..256 {
                for y in 0..256 {
                    black_box(encoder.encode([x, y]));
                }
            }
        })
    });
}

pub fn encode_3d_benchmark(c: &mut Criterion) {
    let encoder = LutEncoder3D32::new();
    c.bench_function("3d32 max", |b| {
        b.iter(|| encoder.encode(black_box([LutEncoder3D32::input_mask(); 3])))
    });
    let encoder = LutEncoder3D64::new();
    c.bench_function("3d64 max", |b| {
        b.iter(|| encoder.encode(black_box([LutEncoder3D64::input_mask(); 3])))
    });

    // Consecutive inputs are cache-friendly, so larger tables should shine here
    let mut group = c.benchmark_group("3d64 grid");
    group.throughput(Throughput::Elements(1 << 15));
    group.bench_function("lut11", |b| {
        b.iter(|| {
            for x in 0..32 {
                for y in 0..32 {
                    for z in 0..32 {
                        black_box(encoder.encode([x, y, z]));
                    }
                }
            }
        })
    });
    let encoder = LutEncoder::<u64, 3, 21, 7>::new();
    group.bench_function("lut7", |b| {
        b.iter(|| {
            for x in 0..32 {
                for y in 0..32 {
                    for z in 0..32 {
                        black_box(encoder.encode([x, y, z]));
                    }
                }
            }
        })
    });
}

criterion_group!(benches, encode_2d_benchmark, encode_3d_benchmark);
criterion_main!(benches);
