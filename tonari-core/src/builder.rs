//! Builder utilities for configuring [`Connectivity`] instances.

use crate::{Result, connectivity::Connectivity, error::TonariError};

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD: f64 = 1.0;

/// Configures and constructs [`Connectivity`] instances.
///
/// # Examples
/// ```
/// use tonari_core::ConnectivityBuilder;
///
/// let connectivity = ConnectivityBuilder::new()
///     .with_threshold(0.5)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(connectivity.threshold(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct ConnectivityBuilder {
    threshold: f64,
}

impl Default for ConnectivityBuilder {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ConnectivityBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use tonari_core::{ConnectivityBuilder, DEFAULT_THRESHOLD};
    ///
    /// let builder = ConnectivityBuilder::new();
    /// assert_eq!(builder.threshold(), DEFAULT_THRESHOLD);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the distance threshold.
    ///
    /// # Examples
    /// ```
    /// use tonari_core::ConnectivityBuilder;
    ///
    /// let builder = ConnectivityBuilder::new().with_threshold(2.5);
    /// assert_eq!(builder.threshold(), 2.5);
    /// ```
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the configured distance threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Validates the configuration and constructs a [`Connectivity`] instance.
    ///
    /// # Errors
    /// Returns [`TonariError::InvalidThreshold`] when the threshold is not
    /// finite or not strictly positive.
    ///
    /// # Examples
    /// ```
    /// use tonari_core::{ConnectivityBuilder, TonariError};
    ///
    /// let err = ConnectivityBuilder::new()
    ///     .with_threshold(0.0)
    ///     .build()
    ///     .expect_err("zero threshold is rejected");
    /// assert!(matches!(err, TonariError::InvalidThreshold { .. }));
    /// ```
    pub fn build(self) -> Result<Connectivity> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(TonariError::InvalidThreshold {
                got: self.threshold,
            });
        }
        Ok(Connectivity::new(self.threshold))
    }
}
