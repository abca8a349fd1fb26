//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinPts**: Minimum neighborhood size for a point to be "core". The
//!   neighborhood always contains the point itself.
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in ascending index order. For each unclassified point P:
//!    - Find its ε-neighborhood
//!    - If it holds fewer than MinPts points, mark P as noise (may change later)
//!    - Else P is core: open a new cluster and expand it
//!
//! 2. Expansion: every unclassified or noise neighbor joins the cluster.
//!    Previously unclassified neighbors are queued; when a queued point turns
//!    out to be core, its own neighbors are absorbed the same way. Noise points
//!    that get absorbed become border points and are never queued.
//!
//! Cluster ids are handed out in discovery order, starting from
//! [`Dbscan::initial_cluster_id`].
//!
//! ## Complexity
//!
//! - **Time**: every point's neighborhood is queried exactly once, so O(n²)
//!   oracle calls without a spatial index.
//! - **Space**: O(n) for states plus the seed queue.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use super::assignment::{Assignment, ClusterId, PointState};
use super::observe::ScanObserver;
use super::traits::Clustering;
use crate::distance::{DistanceOracle, Euclidean};
use crate::error::{Error, Result};

/// DBSCAN parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood membership (inclusive).
    epsilon: f64,
    /// Minimum neighborhood size (point included) for core classification.
    min_points: usize,
    /// Id given to the first cluster discovered.
    initial_cluster_id: ClusterId,
}

/// Label used by [`Clustering::fit_predict`] for noise points.
pub const NOISE: usize = usize::MAX;

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_points` - Minimum number of points, the query point included, to
    ///   form a dense region.
    pub fn new(epsilon: f64, min_points: usize) -> Self {
        Self {
            epsilon,
            min_points,
            initial_cluster_id: 1,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Set the id of the first discovered cluster. Must be positive.
    pub fn with_initial_cluster_id(mut self, id: ClusterId) -> Self {
        self.initial_cluster_id = id;
        self
    }

    /// Neighborhood radius.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Minimum neighborhood size.
    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Id of the first discovered cluster.
    pub fn initial_cluster_id(&self) -> ClusterId {
        self.initial_cluster_id
    }

    /// Check the parameters against a dataset of `n_points`.
    pub fn validate(&self, n_points: usize) -> Result<()> {
        if n_points == 0 {
            return Err(Error::EmptyInput);
        }

        if self.min_points == 0 {
            return Err(Error::InvalidParameter {
                name: "min_points",
                message: "must be at least 1",
            });
        }

        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be non-negative",
            });
        }

        if self.initial_cluster_id == 0 {
            return Err(Error::InvalidParameter {
                name: "initial_cluster_id",
                message: "must be positive",
            });
        }

        if self.initial_cluster_id.checked_add(n_points).is_none() {
            return Err(Error::InvalidParameter {
                name: "initial_cluster_id",
                message: "too large for the dataset size",
            });
        }

        Ok(())
    }

    /// Cluster every point reachable through `oracle`.
    pub fn run<D>(&self, oracle: &D) -> Result<Assignment>
    where
        D: DistanceOracle + ?Sized,
    {
        self.run_observed(oracle, &mut ())
    }

    /// Like [`Dbscan::run`], consulting `observer` between top-level point visits.
    ///
    /// If the observer asks to stop, the run fails with [`Error::Cancelled`] and
    /// no partial labeling is returned.
    pub fn run_observed<D, O>(&self, oracle: &D, observer: &mut O) -> Result<Assignment>
    where
        D: DistanceOracle + ?Sized,
        O: ScanObserver + ?Sized,
    {
        let n = oracle.num_points();
        self.validate(n)?;

        let span = tracing::debug_span!(
            "dbscan",
            n,
            epsilon = self.epsilon,
            min_points = self.min_points
        );
        let _enter = span.enter();

        let mut scan = Scan::new(self, oracle, n);
        for point_idx in 0..n {
            if observer.should_stop() {
                tracing::warn!(scanned = point_idx, total = n, "dbscan cancelled");
                return Err(Error::Cancelled {
                    scanned: point_idx,
                    total: n,
                });
            }

            if scan.states[point_idx] == PointState::Unclassified {
                scan.visit(point_idx)?;
            }

            observer.on_progress(point_idx + 1, n);
        }

        Ok(scan.finish())
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.75 * 0.75, 4)
    }
}

/// Mutable state of one run. Owned by a single call to [`Dbscan::run_observed`].
struct Scan<'a, D: ?Sized> {
    oracle: &'a D,
    epsilon: f64,
    min_points: usize,
    n: usize,
    states: Vec<PointState>,
    core: Vec<bool>,
    // Scratch buffer for the current neighborhood, ascending.
    neighbors: Vec<usize>,
    // Work queue of the cluster being grown; traversed by index while it grows.
    seeds: Vec<usize>,
    next_cluster_id: ClusterId,
    n_clusters: usize,
}

impl<'a, D: DistanceOracle + ?Sized> Scan<'a, D> {
    fn new(params: &Dbscan, oracle: &'a D, n: usize) -> Self {
        Self {
            oracle,
            epsilon: params.epsilon,
            min_points: params.min_points,
            n,
            states: vec![PointState::Unclassified; n],
            core: vec![false; n],
            neighbors: Vec::new(),
            seeds: Vec::new(),
            next_cluster_id: params.initial_cluster_id,
            n_clusters: 0,
        }
    }

    /// Fill `self.neighbors` with the ε-neighborhood of `point_idx`, itself included.
    fn region_query(&mut self, point_idx: usize) -> Result<()> {
        self.neighbors.clear();
        for other in 0..self.n {
            if other == point_idx {
                self.neighbors.push(other);
                continue;
            }

            let d = self.oracle.distance(point_idx, other)?;
            if d.is_nan() || d < 0.0 {
                return Err(Error::oracle(
                    point_idx,
                    other,
                    format!("invalid distance {d}"),
                ));
            }
            if d <= self.epsilon {
                self.neighbors.push(other);
            }
        }
        Ok(())
    }

    /// Top-level visit of an unclassified point.
    fn visit(&mut self, point_idx: usize) -> Result<()> {
        self.region_query(point_idx)?;

        if self.neighbors.len() < self.min_points {
            // Provisional: a later expansion may promote it to a border point.
            self.states[point_idx] = PointState::Noise;
            return Ok(());
        }

        let cluster_id = self.next_cluster_id;
        self.core[point_idx] = true;
        self.states[point_idx] = PointState::Cluster(cluster_id);
        self.seeds.clear();
        let mut size = 1 + self.absorb_neighbors(cluster_id);

        let mut cursor = 0;
        while cursor < self.seeds.len() {
            let seed = self.seeds[cursor];
            cursor += 1;

            self.region_query(seed)?;
            if self.neighbors.len() >= self.min_points {
                self.core[seed] = true;
                size += self.absorb_neighbors(cluster_id);
            }
        }

        tracing::debug!(cluster_id, size, seed = point_idx, "dbscan cluster complete");
        self.next_cluster_id += 1;
        self.n_clusters += 1;
        Ok(())
    }

    /// Pull the current neighborhood into `cluster_id`; returns how many points joined.
    ///
    /// Unclassified points are queued for expansion. Noise points become border
    /// points without being queued: their neighborhood was already found sparse.
    fn absorb_neighbors(&mut self, cluster_id: ClusterId) -> usize {
        let mut joined = 0;
        for &idx in &self.neighbors {
            match self.states[idx] {
                PointState::Unclassified => {
                    self.states[idx] = PointState::Cluster(cluster_id);
                    self.seeds.push(idx);
                    joined += 1;
                }
                PointState::Noise => {
                    tracing::trace!(point = idx, cluster_id, "noise promoted to border");
                    self.states[idx] = PointState::Cluster(cluster_id);
                    joined += 1;
                }
                PointState::Cluster(_) => {}
            }
        }
        joined
    }

    fn finish(self) -> Assignment {
        let noise = self.states.iter().filter(|s| s.is_noise()).count();
        let core = self.core.iter().filter(|&&c| c).count();
        tracing::debug!(
            clusters = self.n_clusters,
            noise,
            core,
            "dbscan finished"
        );
        Assignment::new(
            self.states,
            self.core,
            self.next_cluster_id - self.n_clusters,
            self.n_clusters,
        )
    }
}

impl Clustering for Dbscan {
    /// Euclidean DBSCAN over dense vectors. Noise points get [`NOISE`].
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let labels = self.fit_predict_with_noise(data)?;
        Ok(labels.into_iter().map(|l| l.unwrap_or(NOISE)).collect())
    }

    /// Always 0: DBSCAN has no configured cluster count.
    ///
    /// The number of clusters actually found is [`Assignment::n_clusters`] on the
    /// result of [`Dbscan::run`].
    fn n_clusters(&self) -> usize {
        0
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>>;

    /// Check if a label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        let oracle = Euclidean::new(data)?;
        Ok(self.run(&oracle)?.to_labels_with_noise())
    }
}
