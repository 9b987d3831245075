//! Grid-accelerated connected-component construction.
//!
//! Ingestion buckets every point and merges it with the first point of its
//! cell. Linking then visits each occupied cell once and, for every occupied
//! neighbour not yet compared with it, merges the two cells on the first
//! qualifying cross-cell pair. One pair suffices: each cell is already a
//! single component, so connecting any member of each connects both cells in
//! full.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument, warn};

use crate::{
    Result,
    error::{ForestError, TonariError},
    forest::{DisjointForest, MergeOutcome},
    grid::{CellKey, SpatialGrid},
    point::{Point, PointId},
    result::ComponentSizes,
};

type ForestResult<T> = core::result::Result<T, ForestError>;

/// Owns the forest, the grid, and the registry of live component sizes for
/// a single point set.
pub(crate) struct ComponentBuilder<'a> {
    threshold: f64,
    points: &'a [Point],
    forest: DisjointForest,
    grid: SpatialGrid,
    registry: HashMap<usize, usize>,
    compared: HashSet<(CellKey, CellKey)>,
}

impl<'a> ComponentBuilder<'a> {
    /// Prepares a builder for `points`; `threshold` must already be validated.
    pub(crate) fn new(threshold: f64, points: &'a [Point]) -> Self {
        Self {
            threshold,
            points,
            forest: DisjointForest::with_capacity(points.len()),
            grid: SpatialGrid::new(threshold),
            registry: HashMap::with_capacity(points.len()),
            compared: HashSet::new(),
        }
    }

    /// Runs ingestion and linking, returning the sorted component sizes.
    pub(crate) fn build(mut self) -> Result<ComponentSizes> {
        self.ingest()?;
        self.link_cells()?;
        Ok(self.finish())
    }

    /// Buckets every point and merges it into its cell's component.
    ///
    /// Fails with [`TonariError::CoordinateOutOfRange`] on the first point the
    /// grid cannot key.
    #[instrument(name = "core.ingest", level = "debug", skip(self), fields(points = self.points.len()))]
    pub(crate) fn ingest(&mut self) -> Result<()> {
        for (index, point) in self.points.iter().enumerate() {
            let id = PointId::new(index);
            let Some((_, first)) = self.grid.insert(id, point) else {
                warn!(index, point = %point, "rejecting point outside the grid range");
                return Err(TonariError::CoordinateOutOfRange {
                    index,
                    x: point.x(),
                    y: point.y(),
                    threshold: self.threshold,
                });
            };
            let handle = self.forest.create_set(id)?;
            self.registry.insert(handle.index(), 1);
            if first != id {
                self.merge(first, id)?;
            }
        }
        debug!(
            cells = self.grid.cell_count(),
            components = self.registry.len(),
            "ingestion completed"
        );
        Ok(())
    }

    /// Merges components of neighbouring cells that hold a pair within the
    /// threshold.
    #[instrument(name = "core.link_cells", level = "debug", skip(self), fields(cells = self.grid.cell_count()))]
    pub(crate) fn link_cells(&mut self) -> ForestResult<()> {
        let cells: Vec<CellKey> = self.grid.cells().collect();
        let mut checks = 0_usize;
        let mut links = 0_usize;
        for cell in cells {
            let neighbours: Vec<CellKey> = self.grid.occupied_neighbours(cell).collect();
            for neighbour in neighbours {
                if self.compared.contains(&(cell, neighbour)) {
                    continue;
                }
                self.compared.insert((neighbour, cell));
                checks += 1;
                if let Some((left, right)) = self.first_linking_pair(cell, neighbour) {
                    self.merge(left, right)?;
                    links += 1;
                }
            }
        }
        debug!(
            checks,
            links,
            components = self.registry.len(),
            "cell linking completed"
        );
        Ok(())
    }

    /// Consumes the builder and emits the registry's sizes in descending order.
    pub(crate) fn finish(self) -> ComponentSizes {
        ComponentSizes::from_unsorted(self.registry.into_values().collect())
    }

    /// Merges the sets of `x` and `y`, keeping the size registry in step.
    pub(crate) fn merge(&mut self, x: PointId, y: PointId) -> ForestResult<MergeOutcome> {
        let outcome = self.forest.merge(x, y)?;
        if !outcome.is_noop() {
            self.registry.remove(&outcome.absorbed);
            if let Some(size) = self.forest.size_of(outcome.surviving) {
                self.registry.insert(outcome.surviving, size);
            }
        }
        Ok(outcome)
    }

    fn first_linking_pair(&self, cell: CellKey, neighbour: CellKey) -> Option<(PointId, PointId)> {
        let near = self.grid.points_in(cell);
        let far = self.grid.points_in(neighbour);
        near.iter().find_map(|&left| {
            let origin = self.point(left)?;
            far.iter()
                .copied()
                .find(|&right| {
                    self.point(right)
                        .is_some_and(|candidate| origin.is_within(candidate, self.threshold))
                })
                .map(|right| (left, right))
        })
    }

    fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.get())
    }
}
