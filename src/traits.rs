//! Core traits for streaming estimators
//!
//! Both the compile-time selected [`StreamEstimator`](crate::statistics::StreamEstimator)
//! and the runtime selected [`DynEstimator`](crate::statistics::DynEstimator) implement
//! the base [`Estimator`] trait.

use core::fmt::Debug;

use crate::statistics::Selection;

/// Error when an observation is rejected by a checked append
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    /// The observation was NaN or infinite
    NonFinite(f64),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::NonFinite(value) => {
                write!(f, "non-finite observation: {}", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Check that an observation is finite before it reaches an accumulator
#[inline]
pub(crate) fn check_finite(value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFinite(value))
    }
}

/// Core trait for all running estimators
pub trait Estimator: Clone + Debug {
    /// Fold one observation into the estimator
    fn update(&mut self, item: &f64);

    /// Number of observations folded in so far
    fn count(&self) -> u64;

    /// Statistics maintained by this estimator
    fn selection(&self) -> Selection;

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Check if no observation has been folded in
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
