//! Error types for the Tonari core library.
//!
//! Defines error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, io, num::ParseFloatError};

use thiserror::Error;

use crate::point::PointId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointForest`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// The point was never registered with `create_set`.
    #[error("point {id} has no set in the forest")]
    UnknownElement {
        /// Identity that failed the lookup.
        id: PointId,
    },
    /// The point already owns a set in the forest.
    #[error("point {id} already has a set in the forest")]
    DuplicateElement {
        /// Identity that was registered twice.
        id: PointId,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// The point was never registered with `create_set`.
        UnknownElement => UnknownElement { .. } => "FOREST_UNKNOWN_ELEMENT",
        /// The point already owns a set in the forest.
        DuplicateElement => DuplicateElement { .. } => "FOREST_DUPLICATE_ELEMENT",
    }
}

/// Error type produced when configuring or running [`crate::Connectivity`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TonariError {
    /// The distance threshold was zero, negative, or not finite.
    #[error("distance threshold must be finite and positive (got {got})")]
    InvalidThreshold {
        /// The rejected threshold.
        got: f64,
    },
    /// An input point had a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input.
        index: usize,
        /// Horizontal coordinate as supplied.
        x: f64,
        /// Vertical coordinate as supplied.
        y: f64,
    },
    /// An input point lies too far from the origin, relative to the
    /// threshold, to be assigned a grid cell.
    #[error(
        "point {index} at ({x}, {y}) is too far from the origin for threshold {threshold}"
    )]
    CoordinateOutOfRange {
        /// Position of the offending point in the input.
        index: usize,
        /// Horizontal coordinate as supplied.
        x: f64,
        /// Vertical coordinate as supplied.
        y: f64,
        /// Threshold the grid was sized for.
        threshold: f64,
    },
    /// The disjoint-set forest reported an internal invariant violation.
    #[error("disjoint-set forest invariant violated: {source}")]
    Forest {
        /// Underlying forest error.
        #[from]
        source: ForestError,
    },
}

define_error_codes! {
    /// Stable codes describing [`TonariError`] variants.
    enum TonariErrorCode for TonariError {
        /// The distance threshold was zero, negative, or not finite.
        InvalidThreshold => InvalidThreshold { .. } => "TONARI_INVALID_THRESHOLD",
        /// An input point had a NaN or infinite coordinate.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "TONARI_NON_FINITE_COORDINATE",
        /// An input point lies outside the range the grid can key.
        CoordinateOutOfRange => CoordinateOutOfRange { .. } => "TONARI_COORDINATE_OUT_OF_RANGE",
        /// The disjoint-set forest reported an internal invariant violation.
        ForestInvariant => Forest { .. } => "TONARI_FOREST_INVARIANT",
    }
}

impl TonariError {
    /// Retrieve the inner [`ForestErrorCode`] when the error originated in the forest.
    #[must_use]
    pub const fn forest_code(&self) -> Option<ForestErrorCode> {
        match self {
            Self::Forest { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Errors raised while parsing an instance file.
///
/// Line numbers are 1-based; the threshold always sits on line 1.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InstanceError {
    /// Reading from the underlying source failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line being read when the failure occurred.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input contained no threshold line.
    #[error("instance is empty; expected a distance threshold on line 1")]
    MissingThreshold,
    /// The threshold line was not a number.
    #[error("line 1: threshold `{raw}` is not a number: {source}")]
    InvalidThreshold {
        /// Raw threshold text.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// A point line did not contain exactly two fields.
    #[error("line {line}: expected 2 comma-separated coordinates, found {found}")]
    WrongFieldCount {
        /// Offending line.
        line: usize,
        /// Number of fields present.
        found: usize,
    },
    /// A coordinate field was not a number.
    #[error("line {line}: coordinate `{raw}` is not a number: {source}")]
    InvalidCoordinate {
        /// Offending line.
        line: usize,
        /// Raw coordinate text.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// A coordinate parsed to NaN or infinity.
    #[error("line {line}: coordinate `{raw}` is not finite")]
    NonFiniteCoordinate {
        /// Offending line.
        line: usize,
        /// Raw coordinate text.
        raw: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`InstanceError`] variants.
    enum InstanceErrorCode for InstanceError {
        /// Reading from the underlying source failed.
        Read => Read { .. } => "INSTANCE_READ",
        /// The input contained no threshold line.
        MissingThreshold => MissingThreshold => "INSTANCE_MISSING_THRESHOLD",
        /// The threshold line was not a number.
        InvalidThreshold => InvalidThreshold { .. } => "INSTANCE_INVALID_THRESHOLD",
        /// A point line did not contain exactly two fields.
        WrongFieldCount => WrongFieldCount { .. } => "INSTANCE_WRONG_FIELD_COUNT",
        /// A coordinate field was not a number.
        InvalidCoordinate => InvalidCoordinate { .. } => "INSTANCE_INVALID_COORDINATE",
        /// A coordinate parsed to NaN or infinity.
        NonFiniteCoordinate => NonFiniteCoordinate { .. } => "INSTANCE_NON_FINITE_COORDINATE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TonariError>;
