use crate::data::Point;

/// Decides whether centroids moved between two iterations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConvergenceCheck {
    /// Largest per-coordinate shift still counted as "not moved".
    /// `None` means exact equality.
    pub tolerance: Option<f64>,
}

impl ConvergenceCheck {
    pub fn exact() -> Self {
        Self { tolerance: None }
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: Some(tolerance),
        }
    }

    /// `true` if any centroid differs from the one at the same index in `previous`.
    pub fn changed(&self, current: &[Point], previous: &[Point]) -> bool {
        if current.len() != previous.len() {
            return true;
        }
        current
            .iter()
            .zip(previous)
            .any(|(a, b)| self.moved(a, b))
    }

    #[inline]
    fn moved(&self, a: &Point, b: &Point) -> bool {
        match self.tolerance {
            None => a.x != b.x || a.y != b.y,
            Some(eps) => (a.x - b.x).abs() > eps || (a.y - b.y).abs() > eps,
        }
    }
}

/// Strict comparison: any bit of movement counts as a change.
pub fn changed(current: &[Point], previous: &[Point]) -> bool {
    ConvergenceCheck::exact().changed(current, previous)
}
