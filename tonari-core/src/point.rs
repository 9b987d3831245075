//! Planar points and their stable identities.
//!
//! Coordinates are never used as lookup keys: two input points with equal
//! coordinates are still distinct elements. Every structure in the crate is
//! indexed by [`PointId`], the position of the point in its input slice.

use core::fmt;

/// A point in the plane.
///
/// # Examples
/// ```
/// use tonari_core::Point;
///
/// let origin = Point::new(0.0, 0.0);
/// let other = Point::new(3.0, 4.0);
/// assert_eq!(origin.distance_to(&other), 5.0);
/// assert!(origin.is_within(&other, 5.0));
/// assert!(!origin.is_within(&other, 4.9));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns whether `other` lies within `threshold` of this point.
    ///
    /// This is the single connectivity predicate shared by the grid
    /// algorithm and the brute-force oracle, so both agree on boundary
    /// cases.
    #[must_use]
    pub fn is_within(&self, other: &Self, threshold: f64) -> bool {
        self.distance_to(other) <= threshold
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Stable identity of an ingested point.
///
/// # Examples
/// ```
/// use tonari_core::PointId;
///
/// let id = PointId::new(3);
/// assert_eq!(id.get(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(usize);

impl PointId {
    /// Creates an identifier from an input position.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(index: usize) -> Self { Self(index) }

    /// Returns the input position this identifier refers to.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
