use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrukv::LruCache;

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key{}", i)).collect()
}

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_cached", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        let data = "x".repeat(1024);
        let ids = keys(100);

        // Pre-populate
        for id in &ids {
            cache.set(id, &data).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&ids[counter % 100]));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        let data = "x".repeat(1024);
        let ids = keys(2000);

        for id in &ids[..100] {
            cache.set(id, &data).unwrap();
        }

        let mut counter = 0usize;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&ids[counter % 100]));
            } else {
                black_box(cache.set(&ids[counter % 2000], &data).ok());
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_evicted", |b| {
        let mut cache = LruCache::new(10).unwrap(); // Small cache
        let data = "x".repeat(1024);
        let ids = keys(100);

        // Pre-populate with more than cache size
        for id in &ids {
            cache.set(id, &data).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            // Only the last 10 keys survive, so these lookups all miss
            black_box(cache.get(&ids[counter % 90]));
            counter += 1;
        });
    });

    group.bench_function("set_evicting", |b| {
        let mut cache = LruCache::new(10).unwrap(); // Small cache
        let data = "x".repeat(1024);
        let ids = keys(100);

        let mut counter = 0;
        b.iter(|| {
            // Cycling through more keys than capacity evicts on every set
            black_box(cache.set(&ids[counter % 100], &data).ok());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    group.sample_size(20);

    group.bench_function("grow_shrink_1000", |b| {
        let ids = keys(1000);
        b.iter(|| {
            let mut cache = LruCache::new(1000).unwrap();
            for id in &ids {
                cache.set(id, "v").unwrap();
            }
            cache.resize(4000).unwrap();
            cache.resize(500).unwrap();
            black_box(cache.len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_mixed_50_50,
    bench_cache_miss,
    bench_resize
);
criterion_main!(benches);
