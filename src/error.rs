use thiserror::Error;

/// Errors returned while loading points or preparing a clustering run.
#[derive(Debug, Error)]
pub enum Error {
    /// No line of the input yielded a valid point.
    #[error("no data found to cluster")]
    NoData,

    /// Requested cluster count is incompatible with the dataset.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_points} points")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of valid points in the dataset.
        n_points: usize,
    },

    /// Custom initial centroids do not match the cluster count.
    #[error("expected {expected} initial centroids, got {found}")]
    CentroidCountMismatch { expected: usize, found: usize },

    /// A custom centroid could not be read as two finite numbers.
    #[error("invalid centroid {input:?}: expected two floating-point numbers separated by whitespace")]
    InvalidCentroid { input: String },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        name: &'static str,
        message: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read input: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
