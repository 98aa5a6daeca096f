use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wiredraw::geometry::{CubeTable, WireSphereTable};

fn wire_sphere_table_benchmark(c: &mut Criterion) {
    c.bench_function("wire_sphere_table_30", |b| {
        b.iter(|| black_box(WireSphereTable::generate(black_box(30))))
    });
    c.bench_function("wire_sphere_table_360", |b| {
        b.iter(|| black_box(WireSphereTable::generate(black_box(360))))
    });
}

fn cube_table_benchmark(c: &mut Criterion) {
    c.bench_function("cube_table", |b| {
        b.iter(|| black_box(CubeTable::generate()))
    });
}

criterion_group!(benches, wire_sphere_table_benchmark, cube_table_benchmark);
criterion_main!(benches);
