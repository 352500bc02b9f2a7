use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gnb_core::{Dataset, FeatureVector};
use gnb_models::{Classifier, NormalizationStrategy};
use std::hint::black_box;

fn make_classification_data(rows: usize, cols: usize, classes: usize) -> Classifier<usize> {
    let mut dataset = Dataset::new();
    for i in 0..rows {
        let class_offset = (i % classes) as f64 * 0.2;
        let v: FeatureVector = (0..cols)
            .map(|j| ((i + 3 * j) % 101) as f64 * 0.01 + class_offset)
            .collect();
        dataset.entry(i % classes).or_insert_with(Vec::new).push(v);
    }
    Classifier::from_dataset(dataset)
}

fn make_queries(rows: usize, cols: usize) -> Vec<FeatureVector> {
    (0..rows)
        .map(|i| (0..cols).map(|j| ((i * (j + 1)) % 97) as f64 * 0.01).collect())
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let model = make_classification_data(2_048, 10, 3);

    let mut group = c.benchmark_group("normalize");
    for strategy in [NormalizationStrategy::MinMax, NormalizationStrategy::ZScore] {
        group.bench_function(format!("{strategy}_2048x10"), |b| {
            b.iter(|| {
                let out = model.normalize(black_box(strategy)).unwrap();
                black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let model = make_classification_data(2_048, 10, 3);

    c.bench_function("fit_2048x10_c3", |b| {
        b.iter_batched(
            || model.clone(),
            |local| {
                black_box(local.fit().unwrap());
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_predict(c: &mut Criterion) {
    let fitted = make_classification_data(2_048, 12, 3).fit().unwrap();
    let queries = make_queries(256, 12);

    let mut group = c.benchmark_group("predict");
    group.bench_function("predict_proba_c3_d12", |b| {
        b.iter(|| {
            let scores = fitted.predict_proba(black_box(&queries[0])).unwrap();
            black_box(scores);
        })
    });
    group.bench_function("predict_batch_256x12", |b| {
        b.iter(|| {
            let preds = fitted.predict_batch(black_box(&queries)).unwrap();
            black_box(preds);
        })
    });
    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let fitted = make_classification_data(2_048, 10, 3).fit().unwrap();

    c.bench_function("score_2048x10_c3", |b| {
        b.iter(|| {
            let accuracy = fitted.score().unwrap();
            black_box(accuracy);
        })
    });
}

criterion_group!(benches, bench_normalize, bench_fit, bench_predict, bench_score);
criterion_main!(benches);
