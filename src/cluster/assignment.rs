//! Per-point cluster state and the result of a DBSCAN run.

use std::ops::Range;

/// Cluster identifier. Ids of one run are contiguous, starting at the configured
/// initial id.
pub type ClusterId = usize;

/// Classification of one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointState {
    /// Not visited yet. Never present in a completed [`Assignment`].
    Unclassified,
    /// Not density-reachable from any core point.
    Noise,
    /// Member of a cluster.
    Cluster(ClusterId),
}

impl PointState {
    /// The cluster id, if this point belongs to a cluster.
    pub fn cluster_id(self) -> Option<ClusterId> {
        match self {
            Self::Cluster(id) => Some(id),
            _ => None,
        }
    }

    /// True for [`PointState::Noise`].
    pub fn is_noise(self) -> bool {
        self == Self::Noise
    }
}

/// Role a point plays in the density structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// At least `min_points` points (itself included) within epsilon.
    Core,
    /// Clustered, but not dense enough to be core.
    Border,
    /// Unclustered.
    Noise,
}

/// Final labeling produced by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    states: Vec<PointState>,
    core: Vec<bool>,
    initial_cluster_id: ClusterId,
    n_clusters: usize,
}

impl Assignment {
    pub(crate) fn new(
        states: Vec<PointState>,
        core: Vec<bool>,
        initial_cluster_id: ClusterId,
        n_clusters: usize,
    ) -> Self {
        debug_assert_eq!(states.len(), core.len());
        debug_assert!(!states.contains(&PointState::Unclassified));
        Self {
            states,
            core,
            initial_cluster_id,
            n_clusters,
        }
    }

    /// One state per point, indexed by point.
    pub fn states(&self) -> &[PointState] {
        &self.states
    }

    /// Consume into the per-point states.
    pub fn into_states(self) -> Vec<PointState> {
        self.states
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when there are no points (never the case for a successful run).
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of clusters discovered.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// The ids allocated during the run, in discovery order.
    pub fn cluster_ids(&self) -> Range<ClusterId> {
        self.initial_cluster_id..self.initial_cluster_id + self.n_clusters
    }

    /// State of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn label(&self, i: usize) -> PointState {
        self.states[i]
    }

    /// Whether point `i` is a core point.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn is_core(&self, i: usize) -> bool {
        self.core[i]
    }

    /// Core / border / noise role of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn role(&self, i: usize) -> PointRole {
        match (self.states[i], self.core[i]) {
            (PointState::Cluster(_), true) => PointRole::Core,
            (PointState::Cluster(_), false) => PointRole::Border,
            _ => PointRole::Noise,
        }
    }

    /// Indices of core points, ascending.
    pub fn core_indices(&self) -> Vec<usize> {
        self.core
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of noise points, ascending.
    pub fn noise_indices(&self) -> Vec<usize> {
        self.indices_where(|s| s.is_noise())
    }

    /// Indices of the members of cluster `id`, ascending.
    pub fn members(&self, id: ClusterId) -> Vec<usize> {
        self.indices_where(|s| s == PointState::Cluster(id))
    }

    /// Member count per cluster, in id order.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.n_clusters];
        for id in self.states.iter().filter_map(|s| s.cluster_id()) {
            sizes[id - self.initial_cluster_id] += 1;
        }
        sizes
    }

    /// Labels with noise as `None`.
    pub fn to_labels_with_noise(&self) -> Vec<Option<ClusterId>> {
        self.states.iter().map(|s| s.cluster_id()).collect()
    }

    fn indices_where(&self, pred: impl Fn(PointState) -> bool) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, &s)| pred(s))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assignment {
        use PointState::*;
        Assignment::new(
            vec![Cluster(1), Cluster(1), Noise, Cluster(2), Cluster(2), Cluster(1)],
            vec![true, true, false, true, false, false],
            1,
            2,
        )
    }

    #[test]
    fn queries() {
        let a = sample();
        assert_eq!(a.len(), 6);
        assert!(!a.is_empty());
        assert_eq!(a.cluster_ids(), 1..3);
        assert_eq!(a.members(1), vec![0, 1, 5]);
        assert_eq!(a.members(2), vec![3, 4]);
        assert_eq!(a.noise_indices(), vec![2]);
        assert_eq!(a.core_indices(), vec![0, 1, 3]);
        assert_eq!(a.cluster_sizes(), vec![3, 2]);
        assert_eq!(
            a.to_labels_with_noise(),
            vec![Some(1), Some(1), None, Some(2), Some(2), Some(1)]
        );
    }

    #[test]
    fn roles() {
        let a = sample();
        assert_eq!(a.role(0), PointRole::Core);
        assert_eq!(a.role(2), PointRole::Noise);
        assert_eq!(a.role(4), PointRole::Border);
    }

    #[test]
    fn point_state_helpers() {
        assert_eq!(PointState::Cluster(4).cluster_id(), Some(4));
        assert_eq!(PointState::Noise.cluster_id(), None);
        assert!(PointState::Noise.is_noise());
        assert!(!PointState::Unclassified.is_noise());
    }
}
