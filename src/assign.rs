use crate::cluster::Cluster;
use crate::data::Point;

/// Index of the centroid nearest to `point`.
///
/// Ties go to the lowest index: a later centroid only wins if it is strictly closer.
pub fn nearest(point: &Point, clusters: &[Cluster]) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = f64::INFINITY;
    for (ci, cluster) in clusters.iter().enumerate() {
        let dist = point.distance(&cluster.centroid);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = ci;
        }
    }
    best_cluster
}

/// Append every point to the member list of its nearest cluster and record the
/// chosen cluster index per point in `labels`.
///
/// Member lists are expected to be empty on entry. Points keep their relative order
/// inside each cluster.
pub fn assign<I>(points: I, clusters: &mut [Cluster], labels: &mut Vec<usize>)
where
    I: IntoIterator<Item = Point>,
{
    labels.clear();
    for point in points {
        let c = nearest(&point, clusters);
        clusters[c].members.push(point);
        labels.push(c);
    }
}
