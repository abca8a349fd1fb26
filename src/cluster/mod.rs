//! Density-based clustering.
//!
//! ## DBSCAN
//!
//! Density-based clustering that can discover non-convex clusters and identify
//! outliers (noise points). DBSCAN does not require specifying the number of
//! clusters in advance.
//!
//! The engine here only needs two things from a dataset: how many points it has,
//! and the distance between any two of them. Both come from a
//! [`DistanceOracle`](crate::distance::DistanceOracle), so the same code clusters
//! dense vectors, strings under edit distance, or a precomputed matrix.
//!
//! **Assumptions**:
//! - Clusters have similar density
//! - The oracle is symmetric and deterministic
//!
//! **When to use**: the number of clusters is unknown, shapes are non-convex, or
//! outliers should be reported instead of forced into a cluster.
//!
//! ## Usage
//!
//! ```rust
//! use reach::cluster::{Clustering, Dbscan, PointState};
//! use reach::distance::Precomputed;
//!
//! // Dense vectors, Euclidean distance.
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//! let labels = Dbscan::new(0.5, 2).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![1, 1, 2, 2]);
//!
//! // Any oracle, full result.
//! let matrix = Precomputed::from_rows(&[
//!     vec![0.0, 0.2, 5.0],
//!     vec![0.2, 0.0, 5.0],
//!     vec![5.0, 5.0, 0.0],
//! ])
//! .unwrap();
//! let result = Dbscan::new(0.5, 2).run(&matrix).unwrap();
//! assert_eq!(result.label(0), PointState::Cluster(1));
//! assert_eq!(result.label(2), PointState::Noise);
//! ```

mod assignment;
mod dbscan;
mod model;
mod observe;
mod traits;

pub use assignment::{Assignment, ClusterId, PointRole, PointState};
pub use dbscan::{Dbscan, DbscanExt, NOISE};
pub use model::DbscanModel;
pub use observe::{CancelFlag, LogProgress, ScanObserver};
pub use traits::Clustering;
