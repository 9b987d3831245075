//! Entry point for computing component sizes.
//!
//! Validates the input points, runs the grid-accelerated component builder,
//! and wraps forest invariant violations into [`TonariError`].

use tracing::{info, instrument, warn};

use crate::{
    Result,
    components::ComponentBuilder,
    error::TonariError,
    instance::Instance,
    point::Point,
    result::ComponentSizes,
};

/// Computes connected components under a fixed distance threshold.
///
/// # Examples
/// ```
/// use tonari_core::{ConnectivityBuilder, Point};
///
/// let connectivity = ConnectivityBuilder::new()
///     .with_threshold(0.5)
///     .build()
///     .expect("builder must succeed");
/// let sizes = connectivity
///     .component_sizes(&[Point::new(0.0, 0.0), Point::new(10.0, 10.0)])
///     .expect("run must succeed");
/// assert_eq!(sizes.as_slice(), &[1, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Connectivity {
    threshold: f64,
}

impl Connectivity {
    pub(crate) fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns the distance threshold configured for this instance.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Computes the component sizes of `points`, largest first.
    ///
    /// Points are identified by their position in the slice, so coincident
    /// points remain separate elements of the same component.
    ///
    /// # Errors
    /// Returns [`TonariError::NonFiniteCoordinate`] when any point has a NaN
    /// or infinite coordinate, [`TonariError::CoordinateOutOfRange`] when a
    /// point is too far out for the grid to assign it a cell, and
    /// [`TonariError::Forest`] if the forest reports an internal invariant
    /// violation.
    #[instrument(
        name = "core.component_sizes",
        err,
        skip(self, points),
        fields(points = points.len(), threshold = self.threshold),
    )]
    pub fn component_sizes(&self, points: &[Point]) -> Result<ComponentSizes> {
        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, point)| !point.is_finite())
        {
            warn!(index, point = %point, "rejecting non-finite point");
            return Err(TonariError::NonFiniteCoordinate {
                index,
                x: point.x(),
                y: point.y(),
            });
        }

        let sizes = ComponentBuilder::new(self.threshold, points).build()?;
        info!(
            components = sizes.component_count(),
            largest = sizes.largest().unwrap_or(0),
            "component search completed"
        );
        Ok(sizes)
    }

    /// Computes the component sizes of the points of `instance`.
    ///
    /// The threshold configured on `self` is used; the one declared by the
    /// instance is not consulted. Use [`Instance::connectivity`] to honour it.
    ///
    /// # Errors
    /// See [`Self::component_sizes`].
    pub fn run(&self, instance: &Instance) -> Result<ComponentSizes> {
        self.component_sizes(instance.points())
    }
}
