//! Uniform square bucketing of the plane.
//!
//! Cells have side `threshold / sqrt(2)`, so a cell's diagonal equals the
//! threshold and any two points sharing a cell are within the threshold of
//! each other. With that side length, a point within the threshold of a
//! cell can only lie in the 20 cells covered by [`FIRST_RING`] and
//! [`SECOND_RING`]. In exact arithmetic the `(±2, ±2)` corners and anything
//! further out are strictly more than one threshold away. The `(±2, ±2)`
//! corners touch that bound with no margin, so when rounding in
//! `coordinate / side` pushes a point across a cell edge, a diagonal pair at
//! exactly the threshold can land in corner cells and go uncompared.
//!
//! Cell indices are limited to [`MAX_CELL_INDEX`] in magnitude. Beyond it
//! the quotient's rounding grows to a sizeable fraction of a cell and, past
//! the `i64` range, distinct cells would collapse into one key; such points
//! have no cell at all.

use std::collections::HashMap;
use std::f64::consts::SQRT_2;

use crate::point::{Point, PointId};

/// Offsets of the eight cells touching a cell.
pub const FIRST_RING: [(i64, i64); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
    (0, -1),
    (0, 1),
];

/// Offsets of the twelve cells one empty cell away that can still hold
/// points within the threshold.
pub const SECOND_RING: [(i64, i64); 12] = [
    (2, 0),
    (2, 1),
    (2, -1),
    (-2, 0),
    (-2, 1),
    (-2, -1),
    (0, 2),
    (1, 2),
    (-1, 2),
    (0, -2),
    (1, -2),
    (-1, -2),
];

/// Largest magnitude of a scaled coordinate that still maps to a cell.
///
/// At `2^42` the spacing of `f64` values is `2^-10`, so rounding the
/// quotient moves a point by at most a thousandth of a cell. Keys also stay
/// far enough from the `i64` limits that ring offsets never saturate.
pub const MAX_CELL_INDEX: f64 = 4_398_046_511_104.0;

/// Integer coordinates of a grid cell.
///
/// # Examples
/// ```
/// use tonari_core::CellKey;
///
/// let key = CellKey::new(-1, 4);
/// assert_eq!(key.offset(2, -1), CellKey::new(1, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    x: i64,
    y: i64,
}

impl CellKey {
    /// Creates a key from cell coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Horizontal cell coordinate.
    #[must_use]
    pub const fn x(&self) -> i64 {
        self.x
    }

    /// Vertical cell coordinate.
    #[must_use]
    pub const fn y(&self) -> i64 {
        self.y
    }

    /// Key of the cell displaced by `(dx, dy)`.
    ///
    /// Saturates at the `i64` range, which keys produced by [`SpatialGrid`]
    /// never approach.
    #[must_use]
    pub const fn offset(&self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Mapping from occupied cells to the points they hold.
///
/// Cells are reported in the order they first became occupied, and points
/// within a cell in insertion order.
///
/// # Examples
/// ```
/// use tonari_core::{CellKey, Point, PointId, SpatialGrid};
///
/// let mut grid = SpatialGrid::new(2.0_f64.sqrt());
/// let (cell, first) = grid
///     .insert(PointId::new(0), &Point::new(0.5, 0.5))
///     .expect("point lies within the grid");
/// assert_eq!(cell, CellKey::new(0, 0));
/// assert_eq!(first, PointId::new(0));
///
/// let (_, first) = grid
///     .insert(PointId::new(1), &Point::new(0.9, 0.1))
///     .expect("point lies within the grid");
/// assert_eq!(first, PointId::new(0));
/// assert_eq!(grid.points_in(cell), &[PointId::new(0), PointId::new(1)]);
///
/// assert!(grid.insert(PointId::new(2), &Point::new(1e20, 0.0)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    side: f64,
    cells: HashMap<CellKey, Vec<PointId>>,
    order: Vec<CellKey>,
}

impl SpatialGrid {
    /// Creates an empty grid for the given distance threshold.
    ///
    /// The threshold is expected to be finite and positive; callers validate
    /// it before constructing a grid.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            side: threshold / SQRT_2,
            cells: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Side length of every cell.
    #[must_use]
    pub const fn side(&self) -> f64 {
        self.side
    }

    /// Key of the cell containing `point`.
    ///
    /// Returns `None` when either scaled coordinate is not finite or exceeds
    /// [`MAX_CELL_INDEX`] in magnitude.
    #[must_use]
    pub fn cell_of(&self, point: &Point) -> Option<CellKey> {
        Some(CellKey::new(
            self.cell_index(point.x())?,
            self.cell_index(point.y())?,
        ))
    }

    fn cell_index(&self, coordinate: f64) -> Option<i64> {
        let scaled = (coordinate / self.side).floor();
        (-MAX_CELL_INDEX..=MAX_CELL_INDEX)
            .contains(&scaled)
            .then(|| scaled as i64)
    }

    /// Appends `id` to the cell containing `point`.
    ///
    /// Returns the cell key and the first point that entered the cell, which
    /// is `id` itself when the cell was empty, or `None` without touching the
    /// grid when `point` has no cell (see [`Self::cell_of`]).
    pub fn insert(&mut self, id: PointId, point: &Point) -> Option<(CellKey, PointId)> {
        let key = self.cell_of(point)?;
        let bucket = self.cells.entry(key).or_insert_with(|| {
            self.order.push(key);
            Vec::new()
        });
        bucket.push(id);
        let first = bucket.first().copied().unwrap_or(id);
        Some((key, first))
    }

    /// Points assigned to `key`, empty when the cell is unoccupied.
    #[must_use]
    pub fn points_in(&self, key: CellKey) -> &[PointId] {
        self.cells.get(&key).map_or(&[], Vec::as_slice)
    }

    /// Returns whether any point lies in `key`.
    #[must_use]
    pub fn is_occupied(&self, key: CellKey) -> bool {
        self.cells.contains_key(&key)
    }

    /// Occupied cells in first-occupancy order.
    pub fn cells(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.order.iter().copied()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.order.len()
    }

    /// Occupied cells that may hold points within the threshold of `key`.
    ///
    /// Yields first-ring neighbours before second-ring neighbours; empty
    /// cells are skipped.
    pub fn occupied_neighbours(&self, key: CellKey) -> impl Iterator<Item = CellKey> + '_ {
        FIRST_RING
            .iter()
            .chain(SECOND_RING.iter())
            .map(move |&(dx, dy)| key.offset(dx, dy))
            .filter(|neighbour| self.cells.contains_key(neighbour))
    }
}
