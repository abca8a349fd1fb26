//! DBSCAN on a small 2D dataset, through the vector API and through a custom oracle.
//!
//! The fmt subscriber prints the engine's debug events.

use reach::{
    Clustering, Dbscan, DbscanModel, DistanceOracle, LogProgress, PointRole, Result, NOISE,
};

/// Manhattan distance, supplied by the caller instead of the library.
struct Manhattan(Vec<[f64; 2]>);

impl DistanceOracle for Manhattan {
    fn num_points(&self) -> usize {
        self.0.len()
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64> {
        let (a, b) = (self.0[i], self.0[j]);
        Ok((a[0] - b[0]).abs() + (a[1] - b[1]).abs())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Three well-separated clusters in 2D, plus one outlier.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
        // Outlier
        vec![20.0, 20.0],
    ];

    // --- Euclidean, via the vector convenience API ---
    let dbscan = Dbscan::new(1.0, 2);
    let labels = dbscan.fit_predict(&data)?;
    println!("=== DBSCAN (eps=1.0, min_points=2, Euclidean) ===");
    for (i, label) in labels.iter().enumerate() {
        let tag = if *label == NOISE {
            "NOISE".to_string()
        } else {
            format!("cluster {}", label)
        };
        println!("  point {:2} ({:5.1}, {:5.1}) => {}", i, data[i][0], data[i][1], tag);
    }

    // --- Manhattan, via a model that owns its oracle ---
    let points: Vec<[f64; 2]> = data
        .iter()
        .map(|p| [f64::from(p[0]), f64::from(p[1])])
        .collect();
    let mut model = DbscanModel::with_distance(Dbscan::new(0.5, 3), Manhattan(points));
    let result = model.train()?;
    println!("\n=== DBSCAN (eps=0.5, min_points=3, Manhattan) ===");
    for i in 0..result.len() {
        let role = match result.role(i) {
            PointRole::Core => "core",
            PointRole::Border => "border",
            PointRole::Noise => "noise",
        };
        println!("  point {:2} => {:?} ({})", i, result.label(i), role);
    }
    println!("  cluster sizes: {:?}", result.cluster_sizes());

    // --- Progress logging ---
    let oracle = reach::Euclidean::new(&data)?;
    let result = dbscan.run_observed(&oracle, &mut LogProgress::new(25))?;
    println!("\n{} clusters, {} noise points", result.n_clusters(), result.noise_indices().len());

    Ok(())
}
