use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use products_core::{InMemoryProductStore, Product, ProductStore};
use tokio::runtime::Runtime; // To run async code within Criterion

fn seeded_store(rows: usize) -> InMemoryProductStore {
  InMemoryProductStore::with_products((0..rows).map(|i| Product::new(format!("Product {}", i))))
    .expect("seed store")
}

fn bench_add(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let store = InMemoryProductStore::new();

  c.bench_function("memory_store_add", |b| {
    b.to_async(&rt).iter(|| async {
      store.add(Product::new("Widget")).await.unwrap();
    })
  });
}

fn bench_get_by_id(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let store = seeded_store(10_000);

  c.bench_function("memory_store_get_by_id", |b| {
    b.to_async(&rt).iter(|| async {
      store.get_by_id(5_000).await.unwrap();
    })
  });
}

fn bench_get_all(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let mut group = c.benchmark_group("memory_store_get_all");

  for rows in [10usize, 100, 1_000] {
    let store = seeded_store(rows);
    group.throughput(Throughput::Elements(rows as u64));
    group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
      b.to_async(&rt).iter(|| async {
        store.get_all().await.unwrap();
      })
    });
  }
  group.finish();
}

criterion_group!(benches, bench_add, bench_get_by_id, bench_get_all);
criterion_main!(benches);
