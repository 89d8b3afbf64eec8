use chrono::TimeDelta;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use sac_rs::{ByteOrder, ReadOptions, SacTrace, WriteOptions, read_bytes, write_bytes};

/// Generate realistic seismic-like samples: a decaying oscillation with a slow drift.
fn seismic_samples(n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| {
            let t = i as f32;
            let drift = (t * 0.005).sin() * 50.0;
            let wave = (-t / 2000.0).exp() * (t * 0.3).sin() * 1000.0;
            drift + wave
        })
        .collect()
}

fn make_trace(npts: usize) -> SacTrace {
    let mut sac = SacTrace::new().with_data(seismic_samples(npts));
    sac.set_kstnm(Some("ANMO"));
    sac.set_knetwk(Some("IU"));
    sac.set_kcmpnm(Some("BHZ"));
    sac.set_delta(Some(0.01));
    sac
}

fn bench_decode(c: &mut Criterion) {
    let mut sac = make_trace(10_000);
    let little = sac.to_bytes(&WriteOptions::new()).unwrap();
    let big = sac
        .to_bytes(&WriteOptions::new().with_byte_order(ByteOrder::Big))
        .unwrap();
    let text = sac.to_bytes(&WriteOptions::new().with_ascii(true)).unwrap();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(10_000));

    let auto = ReadOptions::new();
    group.bench_function("binary/little/10k", |b| {
        b.iter(|| read_bytes(black_box(&little), &auto).unwrap())
    });
    group.bench_function("binary/big/10k", |b| {
        b.iter(|| read_bytes(black_box(&big), &auto).unwrap())
    });
    let ascii = ReadOptions::new().with_ascii(true);
    group.bench_function("ascii/10k", |b| {
        b.iter(|| read_bytes(black_box(&text), &ascii).unwrap())
    });
    let headonly = ReadOptions::new().with_headonly(true);
    group.bench_function("binary/headonly", |b| {
        b.iter(|| read_bytes(black_box(&little), &headonly).unwrap())
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut sac = make_trace(10_000);

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("binary/little/10k", |b| {
        b.iter(|| write_bytes(black_box(&mut sac), &WriteOptions::new()).unwrap())
    });
    let big = WriteOptions::new().with_byte_order(ByteOrder::Big);
    group.bench_function("binary/big/10k", |b| {
        b.iter(|| write_bytes(black_box(&mut sac), &big).unwrap())
    });
    let ascii = WriteOptions::new().with_ascii(true);
    group.bench_function("ascii/10k", |b| {
        b.iter(|| write_bytes(black_box(&mut sac), &ascii).unwrap())
    });

    group.finish();
}

fn bench_headers(c: &mut Criterion) {
    let mut sac = make_trace(1_000);
    sac.set_a(Some(12.5));
    sac.set_t1(Some(30.0));
    let reftime = sac.reftime().unwrap();
    let later = reftime + TimeDelta::microseconds(2_500_300);

    let mut group = c.benchmark_group("headers");

    group.bench_function("set_reftime/round_trip", |b| {
        b.iter(|| {
            sac.set_reftime(black_box(later)).unwrap();
            sac.set_reftime(black_box(reftime)).unwrap();
        })
    });
    group.bench_function("headers/listing", |b| b.iter(|| sac.headers().unwrap()));

    sac.set_stla(Some(34.95)).unwrap();
    sac.set_stlo(Some(-106.46)).unwrap();
    sac.set_evla(Some(38.3)).unwrap();
    sac.set_evlo(Some(142.4)).unwrap();
    group.bench_function("set_distances", |b| {
        b.iter(|| sac.set_distances(black_box(true)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_headers);
criterion_main!(benches);
