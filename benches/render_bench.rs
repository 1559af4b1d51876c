use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tplfill::{list_placeholders, render};

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let mut vals: HashMap<String, String> = HashMap::new();
    vals.insert("USER".into(), "tentacles".into());
    vals.insert("HOST".into(), "localhost".into());
    vals.insert("PORT".into(), "8080".into());

    group.bench_function("multiple_vars", |b| {
        b.iter(|| {
            let _ = render(black_box("Connect to ${USER}@${ HOST }:${PORT}"), &vals);
        })
    });

    let mut large_vals: HashMap<String, String> = HashMap::new();
    let mut large_payload = String::new();
    for i in 0..100 {
        large_vals.insert(format!("KEY_{}", i), format!("value_{}", i));
        large_payload.push_str(&format!("Key {}: ${{KEY_{}}} costs $5\n", i, i));
    }

    group.bench_function("large_payload_100_vars", |b| {
        b.iter(|| {
            let _ = render(black_box(&large_payload), &large_vals);
        })
    });

    group.bench_function("list_large_payload", |b| {
        b.iter(|| {
            let _ = list_placeholders(black_box(&large_payload));
        })
    });

    group.bench_function("literal_noop", |b| {
        b.iter(|| {
            let _ = render(black_box("Just a plain string without placeholders"), &vals);
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_render);
criterion_main!(benches);
