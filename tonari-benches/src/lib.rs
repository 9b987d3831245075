//! Benchmark support crate for tonari.
//!
//! Provides seeded synthetic point clouds and parameter types used by the
//! Criterion benchmarks that compare the grid algorithm with the
//! brute-force oracle.

pub mod error;
pub mod params;
pub mod source;
