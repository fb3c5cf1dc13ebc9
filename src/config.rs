use crate::converge::ConvergenceCheck;
use crate::error::{Error, Result};
use crate::init::InitialCentroids;
use crate::update::MeanMode;
use log::warn;

/// Iteration budget used when none is given.
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;

/// Everything a clustering run needs besides the points themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters.
    pub k: usize,
    /// Upper bound on assign/update rounds. Hitting it is not an error.
    pub max_iterations: usize,
    pub init: InitialCentroids,
    pub mean_mode: MeanMode,
    pub convergence: ConvergenceCheck,
    /// Seed for random initialization; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl KMeansConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            init: InitialCentroids::Random,
            mean_mode: MeanMode::Exact,
            convergence: ConvergenceCheck::exact(),
            seed: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_init(mut self, init: InitialCentroids) -> Self {
        self.init = init;
        self
    }

    pub fn with_mean_mode(mut self, mean_mode: MeanMode) -> Self {
        self.mean_mode = mean_mode;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence = ConvergenceCheck::with_tolerance(tolerance);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration against a data set of `n_points` points.
    pub fn validate(&self, n_points: usize) -> Result<()> {
        if self.k == 0 || self.k > n_points {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_points,
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iterations",
                message: "must be at least 1",
            });
        }
        if let Some(eps) = self.convergence.tolerance {
            if !eps.is_finite() || eps < 0.0 {
                return Err(Error::InvalidParameter {
                    name: "tolerance",
                    message: "must be a finite, non-negative number",
                });
            }
        }
        if let InitialCentroids::Custom(centroids) = &self.init {
            if centroids.len() != self.k {
                return Err(Error::CentroidCountMismatch {
                    expected: self.k,
                    found: centroids.len(),
                });
            }
        }
        Ok(())
    }

    /// Lower `k` to `n_points` if it asks for more clusters than there are points.
    /// Returns `true` if `k` was changed.
    pub fn clamp_k(&mut self, n_points: usize) -> bool {
        if self.k > n_points && n_points > 0 {
            warn!(
                "Requested {} clusters but only {} points are available; using k = {}",
                self.k, n_points, n_points
            );
            self.k = n_points;
            return true;
        }
        false
    }
}
