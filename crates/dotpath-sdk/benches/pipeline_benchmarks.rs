use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dotpath_sdk::{diff_flat, diff_values, flatten};
use serde_json::{json, Value};

// Helper to build a wide map of scalar leaves
fn wide_value(keys: usize) -> Value {
    let entries = (0..keys)
        .map(|i| (format!("key_{}", i), json!(i)))
        .collect::<serde_json::Map<_, _>>();
    Value::Object(entries)
}

// Helper to build a deeply nested map with one leaf at the bottom
fn deep_value(depth: usize) -> Value {
    let mut value = json!(0);
    for i in 0..depth {
        let mut wrapper = serde_json::Map::new();
        wrapper.insert(format!("level_{}", i), value);
        value = Value::Object(wrapper);
    }
    value
}

fn bench_flatten_wide(c: &mut Criterion) {
    c.bench_function("flatten_wide_map_1000_keys", |b| {
        let value = wide_value(1000);
        b.iter(|| {
            let flat = flatten(black_box(&value));
            black_box(flat);
        });
    });
}

fn bench_flatten_deep(c: &mut Criterion) {
    c.bench_function("flatten_deep_nesting_256_levels", |b| {
        let value = deep_value(256);
        b.iter(|| {
            let flat = flatten(black_box(&value));
            black_box(flat);
        });
    });
}

fn bench_diff_flat(c: &mut Criterion) {
    c.bench_function("diff_flat_1000_paths_100_modified", |b| {
        let first = flatten(&wide_value(1000));
        let mut second = first.clone();
        for i in 0..100 {
            second.insert(format!("key_{}", i), json!("changed"));
        }

        b.iter(|| {
            let diff = diff_flat(black_box(&first), black_box(&second));
            black_box(diff);
        });
    });
}

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("diff_values_end_to_end", |b| {
        let first = json!({
            "server": {"port": 8080, "hosts": ["a", "b", "c"]},
            "limits": {"cpu": 4, "mem": 2048},
            "flags": [true, false, true],
        });
        let second = json!({
            "server": {"port": 9090, "hosts": ["a", "b"]},
            "limits": {"cpu": 4, "mem": 4096},
            "flags": [true, true, true],
        });

        b.iter(|| {
            let diff = diff_values(black_box(&first), black_box(&second));
            black_box(diff);
        });
    });
}

criterion_group!(
    benches,
    bench_flatten_wide,
    bench_flatten_deep,
    bench_diff_flat,
    bench_pipeline
);
criterion_main!(benches);
