//! Point-generation collaborators.
//!
//! The solver never touches a random number stream itself; it takes a
//! finished `&[Vec<f32>]`. Anything that can produce one is a valid source,
//! and [`PointSource`] is the seam: inject a seeded source in tests, an
//! OS-seeded one in the driver.

use rand::prelude::*;

/// Trait for producers of point sets.
pub trait PointSource {
    /// Produce `n` points of dimensionality `dim`.
    ///
    /// Successive calls continue the same stream, so repeated rounds over
    /// one source see fresh points.
    fn points(&mut self, n: usize, dim: usize) -> Vec<Vec<f32>>;
}

/// Ratio-of-integers generator.
///
/// Each coordinate is `a / (b + 1)` with `a`, `b` drawn uniformly from
/// `1..1_000_000`. The distribution is heavily skewed toward small values
/// with a long tail above 1, which makes for visually interesting instances:
/// dense clumps near the origin plus far outliers.
#[derive(Debug)]
pub struct RatioSource {
    rng: StdRng,
}

impl RatioSource {
    /// Create a source seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the source for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    fn coordinate(&mut self) -> f32 {
        let a: u32 = self.rng.random_range(1..1_000_000);
        let b: u32 = self.rng.random_range(1..1_000_000);
        a as f32 / (b + 1) as f32
    }
}

impl Default for RatioSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSource for RatioSource {
    fn points(&mut self, n: usize, dim: usize) -> Vec<Vec<f32>> {
        (0..n)
            .map(|_| (0..dim).map(|_| self.coordinate()).collect())
            .collect()
    }
}

/// Uniform generator over `[0, 1)` per coordinate.
///
/// The workhorse for test fixtures: bounded, seedable, no tail.
#[derive(Debug)]
pub struct UniformSource {
    rng: StdRng,
}

impl UniformSource {
    /// Create a source seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the source for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSource for UniformSource {
    fn points(&mut self, n: usize, dim: usize) -> Vec<Vec<f32>> {
        (0..n)
            .map(|_| (0..dim).map(|_| self.rng.random::<f32>()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let pts = RatioSource::new().with_seed(42).points(10, 4);
        assert_eq!(pts.len(), 10);
        assert!(pts.iter().all(|p| p.len() == 4));
    }

    #[test]
    fn test_ratio_coordinates_positive_finite() {
        let pts = RatioSource::new().with_seed(5).points(200, 3);
        for p in &pts {
            for &x in p {
                assert!(x.is_finite());
                // Smallest possible value is 1 / 1_000_000.
                assert!(x > 0.0);
                // Largest is 999_999 / 2.
                assert!(x < 500_000.0);
            }
        }
    }

    #[test]
    fn test_uniform_coordinates_in_range() {
        let pts = UniformSource::new().with_seed(5).points(200, 2);
        for p in &pts {
            for &x in p {
                assert!((0.0..1.0).contains(&x));
            }
        }
    }

    #[test]
    fn test_same_seed_same_points() {
        let a = RatioSource::new().with_seed(123).points(20, 3);
        let b = RatioSource::new().with_seed(123).points(20, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_stream_advances_between_calls() {
        let mut source = UniformSource::new().with_seed(9);
        let first = source.points(5, 2);
        let second = source.points(5, 2);
        assert_ne!(first, second);
    }
}
