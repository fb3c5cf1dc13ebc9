use crate::cluster::{Cluster, ClusterSet};
use crate::data::{DataSet, Point};
use crate::error::{Error, Result};
use log::info;
use rand::Rng;

/// How the starting centroids of a run are chosen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InitialCentroids {
    /// Pick `k` points of the data set uniformly at random, with replacement.
    #[default]
    Random,
    /// Use these points verbatim, one per cluster.
    Custom(Vec<Point>),
}

impl InitialCentroids {
    /// Parse custom centroids from `"x y"` strings.
    pub fn parse_custom<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        let centroids = pairs
            .iter()
            .map(|s| {
                Point::parse(s.as_ref()).map_err(|_| Error::InvalidCentroid {
                    input: s.as_ref().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::Custom(centroids))
    }

    /// Build the `k` starting clusters, each with an empty member list.
    pub fn clusters<R: Rng + ?Sized>(&self, k: usize, data: &DataSet, rng: &mut R) -> Result<ClusterSet> {
        match self {
            Self::Random => random_clusters(k, data, rng),
            Self::Custom(centroids) => custom_clusters(k, centroids),
        }
    }
}

/// Sample `k` centroids from `data`. The same point may be drawn more than once.
pub fn random_clusters<R: Rng + ?Sized>(k: usize, data: &DataSet, rng: &mut R) -> Result<ClusterSet> {
    if data.is_empty() {
        return Err(Error::NoData);
    }
    let clusters: ClusterSet = (0..k)
        .map(|_| Cluster::new(data.point(rng.gen_range(0..data.len()))))
        .collect();
    for (i, c) in clusters.iter().enumerate() {
        info!("Initial centroid {}: {}", i + 1, c.centroid);
    }
    Ok(clusters)
}

/// Wrap caller supplied centroids into clusters.
pub fn custom_clusters(k: usize, centroids: &[Point]) -> Result<ClusterSet> {
    if centroids.len() != k {
        return Err(Error::CentroidCountMismatch {
            expected: k,
            found: centroids.len(),
        });
    }
    Ok(centroids.iter().copied().map(Cluster::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn data() -> DataSet {
        DataSet::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_random_picks_existing_points() {
        let ds = data();
        let mut rng = StdRng::seed_from_u64(7);
        let clusters = random_clusters(3, &ds, &mut rng).unwrap();
        assert_eq!(clusters.len(), 3);
        let pts = ds.to_vec();
        for c in &clusters {
            assert!(pts.contains(&c.centroid));
            assert!(c.is_empty());
        }
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let ds = data();
        let a = random_clusters(2, &ds, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_clusters(2, &ds, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_verbatim() {
        let init = InitialCentroids::parse_custom(&["0 0", "10.5 -3"]).unwrap();
        let clusters = init
            .clusters(2, &data(), &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(clusters[0].centroid, Point::new(0.0, 0.0));
        assert_eq!(clusters[1].centroid, Point::new(10.5, -3.0));
    }

    #[test]
    fn test_custom_count_mismatch() {
        let err = custom_clusters(3, &[Point::new(0.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            Error::CentroidCountMismatch { expected: 3, found: 1 }
        ));
    }

    #[test]
    fn test_custom_parse_error() {
        let err = InitialCentroids::parse_custom(&["1.0 two"]).unwrap_err();
        assert!(matches!(err, Error::InvalidCentroid { .. }));
    }
}
