use crate::data::Point;

/// A centroid and the points currently assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub centroid: Point,
    pub members: Vec<Point>,
}

impl Cluster {
    pub fn new(centroid: Point) -> Self {
        Self {
            centroid,
            members: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Clusters in label order; the cluster at index `i` is written out as label `i + 1`.
pub type ClusterSet = Vec<Cluster>;

/// Centroids of `clusters`, in index order.
pub fn centroids(clusters: &[Cluster]) -> Vec<Point> {
    clusters.iter().map(|c| c.centroid).collect()
}
