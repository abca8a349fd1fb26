use thiserror::Error;

/// Errors returned by the clustering engine and its distance oracles.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset has no points.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A model was trained before a distance oracle was installed.
    #[error("no distance oracle installed")]
    MissingOracle,

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// The distance oracle could not produce a usable distance for a pair.
    #[error("distance oracle failed for pair ({i}, {j}): {message}")]
    Oracle {
        /// First point index.
        i: usize,
        /// Second point index.
        j: usize,
        /// Human-readable explanation.
        message: String,
    },

    /// The run was stopped by its observer between two top-level point visits.
    #[error("clustering cancelled after scanning {scanned} of {total} points")]
    Cancelled {
        /// Points visited by the outer scan before stopping.
        scanned: usize,
        /// Dataset size.
        total: usize,
    },
}

impl Error {
    /// Build an [`Error::Oracle`] from anything printable.
    pub fn oracle(i: usize, j: usize, message: impl Into<String>) -> Self {
        Self::Oracle {
            i,
            j,
            message: message.into(),
        }
    }

    /// True for failures raised by input validation, before any work is done.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::InvalidParameter { .. }
                | Self::MissingOracle
                | Self::DimensionMismatch { .. }
        )
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_grouping() {
        assert!(Error::EmptyInput.is_invalid_input());
        assert!(Error::MissingOracle.is_invalid_input());
        assert!(Error::InvalidParameter {
            name: "epsilon",
            message: "must be non-negative",
        }
        .is_invalid_input());
        assert!(!Error::oracle(0, 1, "boom").is_invalid_input());
        assert!(!Error::Cancelled {
            scanned: 1,
            total: 2
        }
        .is_invalid_input());
    }

    #[test]
    fn oracle_message() {
        let err = Error::oracle(3, 7, "unreachable host");
        assert_eq!(
            err.to_string(),
            "distance oracle failed for pair (3, 7): unreachable host"
        );
    }
}
