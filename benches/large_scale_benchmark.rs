use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use pinyinsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Records");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60)); // Large setup, few samples

    let mut rng = rand::rng();
    let count = 1_000_000;
    let syllables = ["bǎo", "zhàng", "yù", "Lǚ", "nǜ", "rén", "jiān", "dū", "'", "-", " "];

    let records: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            let len = rng.random_range(1..5);
            let pinyin: String = (0..len)
                .map(|_| syllables[rng.random_range(0..syllables.len())])
                .collect();
            serde_json::json!({ "pinyin": pinyin, "id": i })
        })
        .collect();

    let total_bytes: usize = records
        .iter()
        .filter_map(|r| r["pinyin"].as_str())
        .map(str::len)
        .sum();
    group.throughput(Throughput::Bytes(total_bytes as u64));

    group.bench_function("sort_pinyin_indices (field)", |b| {
        b.iter(|| {
            sort_pinyin_indices(
                black_box(&records),
                &KeyAccessor::field("pinyin"),
                SortOptions::default(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_1m_records);
criterion_main!(benches);
