//! Tonari core library.
//!
//! Computes the connected components of a planar point set under a fixed
//! distance threshold. Points are bucketed into square cells of side
//! `threshold / sqrt(2)` so that every point sharing a cell is connected
//! unconditionally; a disjoint-set forest then merges neighbouring cells
//! after at most one qualifying distance check per cell pair.
//!
//! # Examples
//! ```
//! use tonari_core::{ConnectivityBuilder, Point};
//!
//! let connectivity = ConnectivityBuilder::new()
//!     .with_threshold(2.0)
//!     .build()
//!     .expect("threshold is valid");
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(5.0, 5.0),
//!     Point::new(5.0, 6.0),
//! ];
//! let sizes = connectivity.component_sizes(&points).expect("points are finite");
//! assert_eq!(sizes.as_slice(), &[2, 2]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod components;
mod connectivity;
mod error;
mod forest;
mod grid;
mod instance;
#[cfg(any(test, feature = "oracle"))]
mod oracle;
mod point;
mod result;
#[cfg(test)]
mod test_utils;

#[cfg(any(test, feature = "oracle"))]
#[cfg_attr(docsrs, doc(cfg(feature = "oracle")))]
pub use crate::oracle::brute_force_component_sizes;
pub use crate::{
    builder::{ConnectivityBuilder, DEFAULT_THRESHOLD},
    connectivity::Connectivity,
    error::{
        ForestError, ForestErrorCode, InstanceError, InstanceErrorCode, Result, TonariError,
        TonariErrorCode,
    },
    forest::{DisjointForest, MergeOutcome, SetHandle},
    grid::{CellKey, FIRST_RING, MAX_CELL_INDEX, SECOND_RING, SpatialGrid},
    instance::Instance,
    point::{Point, PointId},
    result::ComponentSizes,
};
