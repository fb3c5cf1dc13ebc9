use crate::assign::assign;
use crate::cluster::{centroids, Cluster, ClusterSet};
use crate::config::KMeansConfig;
use crate::converge::ConvergenceCheck;
use crate::data::{DataSet, Point};
use crate::error::Result;
use crate::update::{update, MeanMode};
use log::{debug, info};
use rand::prelude::*;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No centroid moved in the last iteration.
    Converged,
    /// The iteration budget ran out first. The clustering is still usable.
    MaxIterationsReached,
}

/// Final state of a clustering run.
#[derive(Debug, Clone)]
pub struct KMeansResult {
    pub clusters: ClusterSet,
    /// Cluster index (0-based) of every input point, in input order.
    pub labels: Vec<usize>,
    /// Number of assign/update rounds performed.
    pub iterations: usize,
    pub termination: Termination,
}

impl KMeansResult {
    pub fn centroids(&self) -> Vec<Point> {
        centroids(&self.clusters)
    }

    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// One Lloyd round: clear members, assign every point, move the centroids.
/// Returns whether any centroid moved according to `check`.
pub fn step(
    data: &DataSet,
    clusters: &mut [Cluster],
    labels: &mut Vec<usize>,
    mean_mode: MeanMode,
    check: &ConvergenceCheck,
) -> bool {
    let previous = centroids(clusters);
    for cluster in clusters.iter_mut() {
        cluster.members.clear();
    }
    assign(data.points(), clusters, labels);
    update(clusters, mean_mode);
    check.changed(&centroids(clusters), &previous)
}

impl DataSet {
    /// Perform k-means clustering with the given configuration.
    ///
    /// Random initialization draws from `config.seed` if set, the thread RNG otherwise.
    pub fn kmeans(&self, config: &KMeansConfig) -> Result<KMeansResult> {
        match config.seed {
            Some(seed) => self.kmeans_with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => self.kmeans_with_rng(config, &mut thread_rng()),
        }
    }

    /// Same as [`DataSet::kmeans`] but with a caller supplied random number generator.
    pub fn kmeans_with_rng<R: Rng + ?Sized>(
        &self,
        config: &KMeansConfig,
        rng: &mut R,
    ) -> Result<KMeansResult> {
        config.validate(self.len())?;

        let mut clusters = config.init.clusters(config.k, self, rng)?;
        let mut labels = Vec::with_capacity(self.len());
        let mut termination = Termination::MaxIterationsReached;
        let mut iterations = 0;

        while iterations < config.max_iterations {
            iterations += 1;
            let changed = step(
                self,
                &mut clusters,
                &mut labels,
                config.mean_mode,
                &config.convergence,
            );
            debug!(
                "Finished iteration {} (cluster sizes {:?})",
                iterations,
                clusters.iter().map(Cluster::len).collect::<Vec<_>>()
            );
            if !changed {
                termination = Termination::Converged;
                break;
            }
        }

        match termination {
            Termination::Converged => info!("Converged after {} iterations", iterations),
            Termination::MaxIterationsReached => info!(
                "Stopped after {} iterations without converging",
                iterations
            ),
        }

        Ok(KMeansResult {
            clusters,
            labels,
            iterations,
            termination,
        })
    }
}
