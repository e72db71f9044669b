use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_flat::{
    flatten, flatten_with_options, properties, to_flat_map, unflatten, FlattenOptions, Map, Value,
};

#[derive(Serialize, Clone)]
struct Service {
    name: String,
    replicas: u32,
    ports: Vec<u16>,
    env: Vec<EnvVar>,
}

#[derive(Serialize, Clone)]
struct EnvVar {
    key: String,
    value: String,
}

fn service(env_count: usize) -> Service {
    Service {
        name: "api".to_string(),
        replicas: 3,
        ports: vec![80, 443, 8080],
        env: (0..env_count)
            .map(|i| EnvVar {
                key: format!("VAR_{}", i),
                value: format!("value-{}", i),
            })
            .collect(),
    }
}

fn deep_value(depth: usize) -> Value {
    let mut value = Value::from("leaf");
    for level in 0..depth {
        let mut map = Map::new();
        map.insert(format!("level{}", level), value);
        map.insert("sibling".to_string(), Value::from(level));
        value = Value::Object(map);
    }
    value
}

fn benchmark_flatten_struct(c: &mut Criterion) {
    let svc = service(10);
    c.bench_function("to_flat_map_struct", |b| {
        b.iter(|| to_flat_map(black_box(&svc)).unwrap())
    });
}

fn benchmark_flatten_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten_env_vars");
    for size in [10, 100, 1000].iter() {
        let value = serde_flat::to_value(&service(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| flatten(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_unflatten_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("unflatten_env_vars");
    for size in [10, 100, 1000].iter() {
        let flat = to_flat_map(&service(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &flat, |b, flat| {
            b.iter(|| unflatten(black_box(flat)))
        });
    }
    group.finish();
}

fn benchmark_depth(c: &mut Criterion) {
    let value = deep_value(64);
    let mut group = c.benchmark_group("deep_nesting");
    group.bench_function("unbounded", |b| b.iter(|| flatten(black_box(&value))));
    let bounded = FlattenOptions::new().with_max_depth(8);
    group.bench_function("max_depth_8", |b| {
        b.iter(|| flatten_with_options(black_box(&value), &bounded))
    });
    group.finish();
}

fn benchmark_properties(c: &mut Criterion) {
    let text: String = (0..500)
        .map(|i| format!("section{}.key{}=value {}\n", i % 20, i, i))
        .collect();
    c.bench_function("properties_from_str_500", |b| {
        b.iter(|| properties::from_str(black_box(&text)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_flatten_struct,
    benchmark_flatten_sizes,
    benchmark_unflatten_sizes,
    benchmark_depth,
    benchmark_properties
);
criterion_main!(benches);
