//! A trainable DBSCAN model that owns its distance oracle and last result.

use std::fmt;

use super::assignment::Assignment;
use super::dbscan::Dbscan;
use crate::distance::DistanceOracle;
use crate::error::{Error, Result};

/// DBSCAN parameters bundled with an installed distance oracle.
///
/// The assignment of the last successful [`DbscanModel::train`] is kept until the
/// next training or until the oracle is replaced.
pub struct DbscanModel {
    params: Dbscan,
    distance: Option<Box<dyn DistanceOracle>>,
    cluster_ids: Option<Assignment>,
}

impl DbscanModel {
    /// Model without a distance oracle.
    pub fn new(params: Dbscan) -> Self {
        Self {
            params,
            distance: None,
            cluster_ids: None,
        }
    }

    /// Model with `distance` installed.
    pub fn with_distance(params: Dbscan, distance: impl DistanceOracle + 'static) -> Self {
        let mut model = Self::new(params);
        model.set_distance(distance);
        model
    }

    /// Install (or replace) the distance oracle. Drops any previous result.
    pub fn set_distance(&mut self, distance: impl DistanceOracle + 'static) {
        self.distance = Some(Box::new(distance));
        self.cluster_ids = None;
    }

    /// The installed distance oracle.
    pub fn distance(&self) -> Option<&dyn DistanceOracle> {
        self.distance.as_deref()
    }

    /// Parameters.
    pub fn params(&self) -> &Dbscan {
        &self.params
    }

    /// Minimum neighborhood size.
    pub fn min_points(&self) -> usize {
        self.params.min_points()
    }

    /// Neighborhood radius.
    pub fn epsilon(&self) -> f64 {
        self.params.epsilon()
    }

    /// Cluster the dataset behind the installed oracle.
    ///
    /// On failure the previous result is cleared as well.
    pub fn train(&mut self) -> Result<&Assignment> {
        self.cluster_ids = None;
        let oracle = self.distance.as_deref().ok_or(Error::MissingOracle)?;
        let assignment = self.params.run(oracle)?;
        Ok(self.cluster_ids.insert(assignment))
    }

    /// Install `distance`, then [`train`](Self::train).
    pub fn train_with(&mut self, distance: impl DistanceOracle + 'static) -> Result<&Assignment> {
        self.set_distance(distance);
        self.train()
    }

    /// Result of the last successful training.
    pub fn cluster_ids(&self) -> Option<&Assignment> {
        self.cluster_ids.as_ref()
    }
}

impl Default for DbscanModel {
    fn default() -> Self {
        Self::new(Dbscan::default())
    }
}

impl fmt::Debug for DbscanModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbscanModel")
            .field("params", &self.params)
            .field("has_distance", &self.distance.is_some())
            .field("cluster_ids", &self.cluster_ids)
            .finish()
    }
}
