use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use zensmu::pm_table::{analysis, decode, Field, Registry};
use zensmu::smu_mailbox::{CapabilityMap, Encoding, Family, Operation};

fn make_table(len: usize) -> Vec<u8> {
    (0..len / 4)
        .flat_map(|index| (index as f32 * 0.25).to_le_bytes())
        .collect()
}

fn bench_decode(c: &mut Criterion) {
    let buffer = make_table(2212);
    c.bench_function("decode_380804", |b| {
        b.iter(|| {
            let table = decode(black_box(0x0038_0804), black_box(&buffer)).unwrap();
            black_box(table.value(Field::PptLimit));
        });
    });
    c.bench_function("summarize_cores", |b| {
        let table = Registry::builtin().decode(0x0038_0804, &buffer).unwrap();
        b.iter(|| black_box(analysis::summarize(black_box(&table), 0)));
    });
}

fn bench_routing(c: &mut Criterion) {
    let map = CapabilityMap::builtin();
    c.bench_function("route_and_encode", |b| {
        b.iter(|| {
            let route = map.route(black_box(Family::Vermeer), black_box(Operation::SetPpt));
            black_box(Encoding::Milli.encode(route.len() as f64 * 42.5, None))
        });
    });
}

criterion_group!(benches, bench_decode, bench_routing);
criterion_main!(benches);
