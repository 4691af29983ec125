use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feature_engine::{average_charges_by_region, enrich, filter_records, FilterSelection};
use insurance_record::{Record, Region, Sex, Smoker};

fn dataset(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::new(
                18 + (i % 47) as u32,
                Sex::ALL[i % 2],
                16.0 + (i % 30) as f64 * 0.9,
                (i % 6) as u32,
                Smoker::ALL[i % 5 / 4],
                Region::ALL[i % 4],
                1100.0 + (i * 37 % 60000) as f64,
            )
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let records = dataset(1338);

    c.bench_function("enrich_1338", |b| b.iter(|| enrich(black_box(&records))));

    let enriched = enrich(&records);
    let selection = FilterSelection::all().with_smoker([Smoker::Yes]);
    c.bench_function("filter_then_average_1338", |b| {
        b.iter(|| average_charges_by_region(&filter_records(black_box(&enriched), &selection)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
