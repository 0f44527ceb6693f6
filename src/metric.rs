//! Euclidean distance and assignment cost.
//!
//! The objective this crate minimizes is the **total assignment cost**:
//!
//! ```text
//! cost(P, C) = Σ_{p ∈ P} min_{c ∈ C} ||p - c||
//! ```
//!
//! Sum of distances from each point to its nearest chosen center. Note the
//! distances are *not* squared: this is the k-median objective, not the
//! k-means WCSS.

use crate::error::{Error, Result};

/// Euclidean distance between two points.
///
/// Returns [`Error::DimensionMismatch`] when the points have different
/// dimensionality.
///
/// # Example
///
/// ```rust
/// use terminus::euclidean;
///
/// let d = euclidean(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert!((d - 5.0).abs() < 1e-6);
/// ```
pub fn euclidean(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    let sq: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum();
    Ok(sq.sqrt())
}

/// Total assignment cost of a candidate center set.
///
/// For each point, the distance to its nearest center; summed over all
/// points. O(N·K·D).
///
/// Returns [`Error::EmptyInput`] when `centers` is empty (the minimum over
/// nothing is undefined) and [`Error::DimensionMismatch`] when any point and
/// center disagree on dimensionality.
pub fn assignment_cost(points: &[Vec<f32>], centers: &[Vec<f32>]) -> Result<f32> {
    if centers.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut total = 0.0f32;
    for point in points {
        let mut nearest = f32::INFINITY;
        for center in centers {
            let d = euclidean(point, center)?;
            if d < nearest {
                nearest = d;
            }
        }
        total += nearest;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_basic() {
        let d = euclidean(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_euclidean_zero_distance() {
        let p = vec![1.5, -2.0, 0.25];
        assert_eq!(euclidean(&p, &p).unwrap(), 0.0);
    }

    #[test]
    fn test_euclidean_symmetric() {
        let a = [1.0, 2.0, 3.0];
        let b = [-4.0, 0.5, 2.0];
        assert_eq!(euclidean(&a, &b).unwrap(), euclidean(&b, &a).unwrap());
    }

    #[test]
    fn test_euclidean_dimension_mismatch() {
        let result = euclidean(&[0.0, 0.0, 0.0], &[1.0, 1.0]);
        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_assignment_cost_single_center() {
        // One center at origin: cost is the sum of norms.
        let points = vec![vec![3.0, 4.0], vec![0.0, 0.0], vec![6.0, 8.0]];
        let centers = vec![vec![0.0, 0.0]];
        let cost = assignment_cost(&points, &centers).unwrap();
        assert!((cost - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_assignment_cost_picks_nearest() {
        let points = vec![vec![0.0, 0.0], vec![10.0, 0.0], vec![9.0, 0.0]];
        let centers = vec![vec![0.0, 0.0], vec![10.0, 0.0]];
        // Point 2 assigns to the center at x=10 (distance 1), not x=0.
        let cost = assignment_cost(&points, &centers).unwrap();
        assert!((cost - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_assignment_cost_empty_centers() {
        let points = vec![vec![0.0, 0.0]];
        assert_eq!(assignment_cost(&points, &[]), Err(Error::EmptyInput));
    }

    #[test]
    fn test_assignment_cost_empty_points() {
        // No points to assign: cost is zero, not an error.
        let centers = vec![vec![0.0, 0.0]];
        assert_eq!(assignment_cost(&[], &centers).unwrap(), 0.0);
    }

    #[test]
    fn test_assignment_cost_dimension_mismatch() {
        let points = vec![vec![0.0, 0.0], vec![1.0, 1.0, 1.0]];
        let centers = vec![vec![0.0, 0.0]];
        assert!(matches!(
            assignment_cost(&points, &centers),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
