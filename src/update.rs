use crate::cluster::Cluster;
use crate::data::Point;

/// How a new centroid is derived from the mean of its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeanMode {
    /// Plain floating-point mean.
    #[default]
    Exact,
    /// Mean truncated toward zero to a whole number, as older releases of this
    /// tool stored it. Only useful to reproduce their output.
    Truncate,
}

impl MeanMode {
    #[inline]
    fn apply(self, mean: f64) -> f64 {
        match self {
            MeanMode::Exact => mean,
            MeanMode::Truncate => mean.trunc(),
        }
    }
}

/// Mean position of `points`, or `None` for an empty slice.
pub fn mean(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sum_x / n, sum_y / n))
}

/// Move every non-empty cluster's centroid to the mean of its members.
/// Clusters without members keep their centroid.
pub fn update(clusters: &mut [Cluster], mode: MeanMode) {
    for cluster in clusters.iter_mut() {
        if let Some(m) = mean(&cluster.members) {
            cluster.centroid = Point::new(mode.apply(m.x), mode.apply(m.y));
        }
    }
}
