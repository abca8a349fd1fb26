//! Distance oracles.
//!
//! The clustering engine never looks at feature values. Everything it knows about
//! the dataset comes through [`DistanceOracle`]: the number of points, and the
//! distance between two of them by index.
//!
//! Implementations must be symmetric (`distance(i, j) == distance(j, i)`) and
//! deterministic for a fixed dataset. Self-distance should be 0.

use crate::error::{Error, Result};

/// Pairwise distance capability over an indexed dataset.
pub trait DistanceOracle {
    /// Number of points addressable by this oracle (`0..num_points()`).
    fn num_points(&self) -> usize;

    /// Distance between points `i` and `j`.
    ///
    /// Returns [`Error::Oracle`] when no distance can be computed for the pair.
    fn distance(&self, i: usize, j: usize) -> Result<f64>;
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for &T {
    fn num_points(&self) -> usize {
        (**self).num_points()
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64> {
        (**self).distance(i, j)
    }
}

impl<T: DistanceOracle + ?Sized> DistanceOracle for Box<T> {
    fn num_points(&self) -> usize {
        (**self).num_points()
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64> {
        (**self).distance(i, j)
    }
}

/// Euclidean distance over borrowed dense vectors.
#[derive(Debug, Clone, Copy)]
pub struct Euclidean<'a> {
    data: &'a [Vec<f32>],
}

impl<'a> Euclidean<'a> {
    /// Wrap `data`, checking that every vector has the same dimensionality.
    pub fn new(data: &'a [Vec<f32>]) -> Result<Self> {
        if let Some(first) = data.first() {
            let expected = first.len();
            if let Some(bad) = data.iter().find(|v| v.len() != expected) {
                return Err(Error::DimensionMismatch {
                    expected,
                    found: bad.len(),
                });
            }
        }
        Ok(Self { data })
    }

    /// The wrapped vectors.
    pub fn data(&self) -> &'a [Vec<f32>] {
        self.data
    }
}

impl DistanceOracle for Euclidean<'_> {
    fn num_points(&self) -> usize {
        self.data.len()
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64> {
        let (a, b) = match (self.data.get(i), self.data.get(j)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(Error::oracle(i, j, "index out of range")),
        };
        let sq: f64 = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| {
                let d = f64::from(*x) - f64::from(*y);
                d * d
            })
            .sum();
        Ok(sq.sqrt())
    }
}

/// A dense, precomputed N x N distance matrix.
#[derive(Debug, Clone)]
pub struct Precomputed {
    n: usize,
    // Row-major.
    values: Vec<f64>,
}

impl Precomputed {
    /// Build from rows, validating shape, symmetry, and entry sanity.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut values = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::InvalidParameter {
                    name: "distances",
                    message: "matrix must be square",
                });
            }
            values.extend_from_slice(row);
        }
        Self::from_vec(n, values)
    }

    /// Build from a row-major buffer of length `n * n`.
    pub fn from_vec(n: usize, values: Vec<f64>) -> Result<Self> {
        if n.checked_mul(n) != Some(values.len()) {
            return Err(Error::InvalidParameter {
                name: "distances",
                message: "buffer length must be n * n",
            });
        }
        for i in 0..n {
            if values[i * n + i] != 0.0 {
                return Err(Error::InvalidParameter {
                    name: "distances",
                    message: "diagonal must be zero",
                });
            }
            for j in (i + 1)..n {
                let d = values[i * n + j];
                if d.is_nan() || d < 0.0 {
                    return Err(Error::InvalidParameter {
                        name: "distances",
                        message: "entries must be non-negative numbers",
                    });
                }
                if d != values[j * n + i] {
                    return Err(Error::InvalidParameter {
                        name: "distances",
                        message: "matrix must be symmetric",
                    });
                }
            }
        }
        Ok(Self { n, values })
    }

    /// Compute every pair once from a closure over indices `i < j`.
    pub fn from_fn(n: usize, f: impl Fn(usize, usize) -> f64) -> Result<Self> {
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = f(i, j);
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self::from_vec(n, values)
    }
}

impl DistanceOracle for Precomputed {
    fn num_points(&self) -> usize {
        self.n
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64> {
        if i >= self.n || j >= self.n {
            return Err(Error::oracle(i, j, "index out of range"));
        }
        Ok(self.values[i * self.n + j])
    }
}

/// Adapts an infallible closure into an oracle over `n` points.
#[derive(Clone)]
pub struct FnOracle<F> {
    n: usize,
    f: F,
}

impl<F> FnOracle<F>
where
    F: Fn(usize, usize) -> f64,
{
    /// `f(i, j)` is only ever called with `i, j < n`.
    pub fn new(n: usize, f: F) -> Self {
        Self { n, f }
    }
}

impl<F> std::fmt::Debug for FnOracle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnOracle").field("n", &self.n).finish()
    }
}

impl<F> DistanceOracle for FnOracle<F>
where
    F: Fn(usize, usize) -> f64,
{
    fn num_points(&self) -> usize {
        self.n
    }

    fn distance(&self, i: usize, j: usize) -> Result<f64> {
        if i >= self.n || j >= self.n {
            return Err(Error::oracle(i, j, "index out of range"));
        }
        Ok((self.f)(i, j))
    }
}
