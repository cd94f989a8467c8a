use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use toon_encoder::{encode, to_string, to_string_with_options, to_value, Delimiter, ToonOptions};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn users(size: usize) -> Vec<User> {
    (0..size)
        .map(|i| User {
            id: i as u32,
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            active: i % 2 == 0,
        })
        .collect()
}

fn benchmark_record_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_arrays");

    for size in [10, 100, 1000].iter() {
        let data = users(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&data)))
        });
    }
    group.finish();
}

fn benchmark_primitive_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive_arrays");

    let integers: Vec<i64> = (0..1000).collect();
    let floats: Vec<f64> = (0..1000).map(|i| i as f64 * 0.5).collect();
    let words: Vec<String> = (0..1000).map(|i| format!("word{}", i)).collect();

    group.bench_function("integers", |b| b.iter(|| to_string(black_box(&integers))));
    group.bench_function("floats", |b| b.iter(|| to_string(black_box(&floats))));
    group.bench_function("strings", |b| b.iter(|| to_string(black_box(&words))));
    group.finish();
}

fn benchmark_rows(c: &mut Criterion) {
    let rows: Vec<Vec<u32>> = (0..200).map(|i| (i..i + 8).collect()).collect();

    c.bench_function("rows_200x8", |b| b.iter(|| to_string(black_box(&rows))));
}

fn benchmark_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("strings");

    let bare = "hello world";
    let quoted = "key: value, with \"quotes\"\nand a newline";
    let long = "lorem ipsum ".repeat(100);

    group.bench_function("bare", |b| b.iter(|| to_string(black_box(bare))));
    group.bench_function("quoted", |b| b.iter(|| to_string(black_box(quoted))));
    group.bench_function("long", |b| b.iter(|| to_string(black_box(&long))));
    group.finish();
}

fn benchmark_encode_prebuilt_value(c: &mut Criterion) {
    let products: Vec<Product> = (0..100)
        .map(|i| Product {
            sku: format!("SKU-{:04}", i),
            name: format!("Product {}", i),
            price: 9.99 + i as f64,
            quantity: i,
        })
        .collect();
    let value = to_value(&products).unwrap();

    c.bench_function("classify_only", |b| b.iter(|| to_value(black_box(&products))));
    c.bench_function("encode_value", |b| b.iter(|| encode(black_box(&value))));
}

fn benchmark_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("delimiters");
    let data = users(100);

    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        let options = ToonOptions::new().with_delimiter(delimiter);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", delimiter)),
            &options,
            |b, options| b.iter(|| to_string_with_options(black_box(&data), options.clone())),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_record_arrays,
    benchmark_primitive_arrays,
    benchmark_rows,
    benchmark_strings,
    benchmark_encode_prebuilt_value,
    benchmark_delimiters
);
criterion_main!(benches);
