use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use reach::cluster::{Clustering, Dbscan};
use reach::distance::{DistanceOracle, Euclidean, Precomputed};

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Synthetic blobs around a handful of centers, plus uniform background noise.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let d = 8;
    let centers: Vec<Vec<f32>> = (0..5)
        .map(|_| (0..d).map(|_| rng.random::<f32>() * 20.0).collect())
        .collect();

    let data: Vec<Vec<f32>> = (0..n)
        .map(|i| {
            if i % 10 == 0 {
                (0..d).map(|_| rng.random::<f32>() * 20.0).collect()
            } else {
                let c = &centers[i % centers.len()];
                c.iter().map(|x| x + rng.random::<f32>() - 0.5).collect()
            }
        })
        .collect();

    group.bench_function("fit_predict_n1000_d8", |b| {
        b.iter(|| {
            let model = Dbscan::new(1.0, 5);
            model.fit_predict(black_box(&data)).unwrap();
        })
    });

    let euclid = Euclidean::new(&data).unwrap();
    let matrix = Precomputed::from_fn(n, |i, j| euclid.distance(i, j).unwrap()).unwrap();
    group.bench_function("run_precomputed_n1000", |b| {
        b.iter(|| {
            let model = Dbscan::new(1.0, 5);
            model.run(black_box(&matrix)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
