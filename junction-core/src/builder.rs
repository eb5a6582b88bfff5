//! Builder utilities for configuring the cluster query engine.
//!
//! Limits are validated once, in [`ClusterEngineBuilder::build`], so the
//! engine itself only ever sees non-zero values.

use std::num::NonZeroUsize;

use crate::{ClusterError, Result, engine::ClusterEngine};

/// Attempt budget used when none is configured.
pub const DEFAULT_ATTEMPT_LIMIT: usize = 1000;

/// Number of largest components multiplied when none is configured.
pub const DEFAULT_TOP_COMPONENTS: usize = 3;

/// Configures and constructs [`ClusterEngine`] instances.
///
/// # Examples
/// ```
/// use junction_core::ClusterEngineBuilder;
///
/// let engine = ClusterEngineBuilder::new()
///     .with_attempt_limit(10)
///     .with_top_components(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(engine.attempt_limit().get(), 10);
/// assert_eq!(engine.top_components().get(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ClusterEngineBuilder {
    attempt_limit: usize,
    top_components: usize,
}

impl Default for ClusterEngineBuilder {
    fn default() -> Self {
        Self {
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
            top_components: DEFAULT_TOP_COMPONENTS,
        }
    }
}

impl ClusterEngineBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use junction_core::ClusterEngineBuilder;
    ///
    /// let builder = ClusterEngineBuilder::new();
    /// assert_eq!(builder.attempt_limit(), 1000);
    /// assert_eq!(builder.top_components(), 3);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how many edges a component product query may attempt.
    #[must_use]
    pub const fn with_attempt_limit(mut self, limit: usize) -> Self {
        self.attempt_limit = limit;
        self
    }

    /// Returns the configured attempt limit.
    #[must_use]
    pub const fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    /// Overrides how many of the largest components are multiplied.
    #[must_use]
    pub const fn with_top_components(mut self, count: usize) -> Self {
        self.top_components = count;
        self
    }

    /// Returns the configured number of multiplied components.
    #[must_use]
    pub const fn top_components(&self) -> usize {
        self.top_components
    }

    /// Validates the configuration and constructs a [`ClusterEngine`].
    ///
    /// # Errors
    /// - [`ClusterError::InvalidAttemptLimit`] when the attempt limit is zero.
    /// - [`ClusterError::InvalidTopComponents`] when the component count is
    ///   zero.
    ///
    /// # Examples
    /// ```
    /// use junction_core::{ClusterEngineBuilder, ClusterError};
    ///
    /// let err = ClusterEngineBuilder::new()
    ///     .with_attempt_limit(0)
    ///     .build()
    ///     .expect_err("zero attempts must be rejected");
    /// assert_eq!(err, ClusterError::InvalidAttemptLimit { got: 0 });
    /// ```
    pub fn build(self) -> Result<ClusterEngine> {
        let attempt_limit =
            NonZeroUsize::new(self.attempt_limit).ok_or(ClusterError::InvalidAttemptLimit {
                got: self.attempt_limit,
            })?;
        let top_components =
            NonZeroUsize::new(self.top_components).ok_or(ClusterError::InvalidTopComponents {
                got: self.top_components,
            })?;
        Ok(ClusterEngine::new(attempt_limit, top_components))
    }
}
