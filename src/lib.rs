//! Density clustering over pairwise distances.
//!
//! `reach` implements DBSCAN against an abstract distance oracle: the engine sees
//! point indices and distances, never feature values.
//!
//! - [`cluster`]: the DBSCAN engine, its result type, a trainable model wrapper,
//!   and scan observers (progress, cancellation)
//! - [`distance`]: the [`DistanceOracle`] trait and a few ready-made oracles

#![forbid(unsafe_code)]

pub mod cluster;
pub mod distance;
pub mod error;

pub use cluster::{
    Assignment, CancelFlag, ClusterId, Clustering, Dbscan, DbscanExt, DbscanModel, LogProgress,
    PointRole, PointState, ScanObserver, NOISE,
};
pub use distance::{DistanceOracle, Euclidean, FnOracle, Precomputed};
pub use error::{Error, Result};
