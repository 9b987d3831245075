//! Benchmark setup error type.
//!
//! Lets setup functions propagate generation and configuration failures
//! with `?` instead of using `.expect()`.

use crate::source::SyntheticError;
use tonari_core::TonariError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic point generation failed.
    #[error("synthetic point generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The connectivity configuration was rejected.
    #[error("connectivity configuration failed: {0}")]
    Core(#[from] TonariError),
}
