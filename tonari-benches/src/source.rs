//! Synthetic point clouds for benchmarking.
//!
//! Provides [`SyntheticPoints`], a seeded generator of planar points laid out
//! either uniformly over a square or in clusters around random centres.
//! Generation is reproducible for a given configuration.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use tonari_core::Point;

/// Errors that may occur during synthetic point generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// The requested point count was zero.
    #[error("point count must be greater than zero")]
    ZeroPoints,
    /// The square side was zero, negative, or not finite.
    #[error("extent must be finite and positive (got {got})")]
    InvalidExtent {
        /// The rejected extent.
        got: f64,
    },
    /// A clustered layout asked for zero clusters.
    #[error("cluster count must be greater than zero")]
    ZeroClusters,
    /// A clustered layout had a spread that was negative or not finite.
    #[error("cluster spread must be finite and non-negative (got {got})")]
    InvalidSpread {
        /// The rejected spread.
        got: f64,
    },
}

/// Spatial arrangement of generated points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudLayout {
    /// Points drawn uniformly from `[0, extent)²`.
    Uniform,
    /// Points scattered within `spread` of one of `clusters` centres drawn
    /// uniformly from `[0, extent)²`.
    Clustered {
        /// Number of cluster centres.
        clusters: usize,
        /// Largest per-axis offset from a centre.
        spread: f64,
    },
}

/// Configuration for synthetic point generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of points to generate.
    pub point_count: usize,
    /// Side of the square the points (or cluster centres) are drawn from.
    pub extent: f64,
    /// Arrangement of the points.
    pub layout: CloudLayout,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A seeded planar point cloud.
///
/// # Examples
///
/// ```
/// use tonari_benches::source::{CloudLayout, SyntheticConfig, SyntheticPoints};
///
/// let config = SyntheticConfig {
///     point_count: 10,
///     extent: 5.0,
///     layout: CloudLayout::Uniform,
///     seed: 42,
/// };
/// let cloud = SyntheticPoints::generate(&config).expect("valid config");
/// assert_eq!(cloud.len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticPoints {
    points: Vec<Point>,
}

impl SyntheticPoints {
    /// Generates points eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroPoints`] if `point_count` is zero,
    /// [`SyntheticError::InvalidExtent`] if `extent` is not finite and
    /// positive, and [`SyntheticError::ZeroClusters`] or
    /// [`SyntheticError::InvalidSpread`] for an unusable clustered layout.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.point_count == 0 {
            return Err(SyntheticError::ZeroPoints);
        }
        if !config.extent.is_finite() || config.extent <= 0.0 {
            return Err(SyntheticError::InvalidExtent { got: config.extent });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let points = match config.layout {
            CloudLayout::Uniform => (0..config.point_count)
                .map(|_| uniform_point(&mut rng, config.extent))
                .collect(),
            CloudLayout::Clustered { clusters, spread } => {
                clustered_points(&mut rng, config, clusters, spread)?
            }
        };
        Ok(Self { points })
    }

    /// Generated points in generation order.
    #[must_use]
    pub const fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Number of generated points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether no points were generated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn uniform_point(rng: &mut SmallRng, extent: f64) -> Point {
    Point::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent))
}

#[expect(
    clippy::float_arithmetic,
    reason = "cluster members are offset from their centre"
)]
fn clustered_points(
    rng: &mut SmallRng,
    config: &SyntheticConfig,
    clusters: usize,
    spread: f64,
) -> Result<Vec<Point>, SyntheticError> {
    if clusters == 0 {
        return Err(SyntheticError::ZeroClusters);
    }
    if !spread.is_finite() || spread < 0.0 {
        return Err(SyntheticError::InvalidSpread { got: spread });
    }

    let centres: Vec<Point> = (0..clusters)
        .map(|_| uniform_point(rng, config.extent))
        .collect();
    let mut points = Vec::with_capacity(config.point_count);
    for _ in 0..config.point_count {
        let Some(centre) = centres.choose(rng).copied() else {
            return Err(SyntheticError::ZeroClusters);
        };
        points.push(Point::new(
            centre.x() + rng.gen_range(-spread..=spread),
            centre.y() + rng.gen_range(-spread..=spread),
        ));
    }
    Ok(points)
}
