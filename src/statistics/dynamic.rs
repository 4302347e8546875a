//! Runtime selected running estimator

use core::fmt;

use super::moments::Moments;
use super::Selection;
use crate::math;
use crate::traits::{check_finite, Estimator, InputError};

/// Running estimator whose tracked statistics are chosen at construction
///
/// Shares its update rule with [`StreamEstimator`](super::StreamEstimator), so both
/// produce identical values for the same selection and input. The selection cannot
/// be checked at compile time here: asking for a statistic that was not selected is
/// a contract violation and panics.
///
/// # Example
///
/// ```
/// use seqstats::statistics::{DynEstimator, Selection};
///
/// let mut est = DynEstimator::new(Selection::MEAN | Selection::MAX);
/// est.append(3.0);
/// est.append(5.0);
///
/// assert_eq!(est.mean(), Some(4.0));
/// assert_eq!(est.max(), Some(5.0));
/// assert_eq!(est.to_string(), "(n = 2, avg = 4, max = 5)");
/// ```
///
/// ```should_panic
/// use seqstats::statistics::{DynEstimator, Selection};
///
/// let est = DynEstimator::new(Selection::MEAN);
/// est.variance();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynEstimator {
    selection: Selection,
    moments: Moments,
}

impl Default for DynEstimator {
    fn default() -> Self {
        Self::new(Selection::ALL)
    }
}

impl DynEstimator {
    /// Create an empty estimator tracking `selection`
    pub const fn new(selection: Selection) -> Self {
        Self {
            selection,
            moments: Moments::EMPTY,
        }
    }

    /// Create an estimator tracking `selection`, seeded with one observation
    pub fn with_initial(selection: Selection, value: f64) -> Self {
        let mut est = Self::new(selection);
        est.append(value);
        est
    }

    /// Fold one observation into every tracked statistic
    #[inline]
    pub fn append(&mut self, value: f64) {
        self.moments.push(value, self.selection);
    }

    /// Fold one observation in, rejecting NaN and infinities
    ///
    /// On error the estimator is left unchanged.
    pub fn try_append(&mut self, value: f64) -> Result<(), InputError> {
        let value = check_finite(value)?;
        self.append(value);
        Ok(())
    }

    /// Number of observations folded in
    pub fn len(&self) -> u64 {
        self.moments.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.moments.count == 0
    }

    /// Statistics tracked by this estimator
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[track_caller]
    fn require(&self, flag: Selection) {
        if !self.selection.contains(flag) {
            panic!(
                "{} is not tracked by this estimator (tracking: {})",
                flag, self.selection
            );
        }
    }

    /// Running mean, `None` before the first observation
    ///
    /// # Panics
    ///
    /// If the mean is not selected.
    #[track_caller]
    pub fn mean(&self) -> Option<f64> {
        self.require(Selection::MEAN);
        self.moments.mean()
    }

    /// Population variance, `None` with fewer than two observations
    ///
    /// # Panics
    ///
    /// If the variance is not selected.
    #[track_caller]
    pub fn variance(&self) -> Option<f64> {
        self.require(Selection::VARIANCE);
        self.moments.variance()
    }

    /// Sample variance (divisor n - 1)
    ///
    /// # Panics
    ///
    /// If the variance is not selected.
    #[track_caller]
    pub fn sample_variance(&self) -> Option<f64> {
        self.require(Selection::VARIANCE);
        self.moments.sample_variance()
    }

    /// Population standard deviation
    ///
    /// # Panics
    ///
    /// If the variance is not selected.
    #[track_caller]
    pub fn stddev(&self) -> Option<f64> {
        self.variance().map(math::sqrt)
    }

    /// Smallest observation, `None` before the first one
    ///
    /// # Panics
    ///
    /// If the minimum is not selected.
    #[track_caller]
    pub fn min(&self) -> Option<f64> {
        self.require(Selection::MIN);
        self.moments.min()
    }

    /// Largest observation, `None` before the first one
    ///
    /// # Panics
    ///
    /// If the maximum is not selected.
    #[track_caller]
    pub fn max(&self) -> Option<f64> {
        self.require(Selection::MAX);
        self.moments.max()
    }

    /// Spread between the largest and smallest observation
    ///
    /// # Panics
    ///
    /// If min and max are not both selected.
    #[track_caller]
    pub fn range(&self) -> Option<f64> {
        self.require(Selection::MIN | Selection::MAX);
        Some(self.moments.max()? - self.moments.min()?)
    }
}

impl Estimator for DynEstimator {
    fn update(&mut self, item: &f64) {
        self.append(*item);
    }

    fn count(&self) -> u64 {
        self.moments.count
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }
}

impl Extend<f64> for DynEstimator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl fmt::Display for DynEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.moments.fmt_selected(self.selection, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::{FullEstimator, MeanEstimator};

    #[test]
    fn test_default_tracks_everything() {
        let est = DynEstimator::default();

        assert_eq!(est.selection(), Selection::ALL);
        assert!(est.is_empty());
        assert_eq!(est.mean(), None);
        assert_eq!(est.variance(), None);
        assert_eq!(est.min(), None);
        assert_eq!(est.max(), None);
    }

    #[test]
    fn test_matches_stream_estimator() {
        let data = [1.145, 1.4, 1.919, 0.8, 1.0];

        let mut dyn_full = DynEstimator::new(Selection::ALL);
        dyn_full.extend(data);
        let full: FullEstimator = data.into_iter().collect();

        assert_eq!(dyn_full.len(), full.len());
        assert_eq!(dyn_full.mean(), full.mean());
        assert_eq!(dyn_full.variance(), full.variance());
        assert_eq!(dyn_full.min(), full.min());
        assert_eq!(dyn_full.max(), full.max());
        assert_eq!(dyn_full.to_string(), full.to_string());

        let mut dyn_mean = DynEstimator::new(Selection::MEAN);
        dyn_mean.extend(data);
        let mean: MeanEstimator = data.into_iter().collect();

        assert_eq!(dyn_mean.mean(), mean.mean());
        assert_eq!(dyn_mean.to_string(), mean.to_string());
    }

    #[test]
    fn test_with_initial() {
        let est = DynEstimator::with_initial(Selection::MIN | Selection::MAX, -3.0);

        assert_eq!(est.len(), 1);
        assert_eq!(est.min(), Some(-3.0));
        assert_eq!(est.max(), Some(-3.0));
        assert_eq!(est.range(), Some(0.0));
    }

    #[test]
    fn test_none_selection_counts() {
        let mut est = DynEstimator::new(Selection::NONE);
        est.extend([1.0, 2.0, 3.0]);

        assert_eq!(est.count(), 3);
        assert_eq!(est.to_string(), "(n = 3)");
    }

    #[test]
    fn test_try_append() {
        let mut est = DynEstimator::new(Selection::MEAN);

        assert!(est.try_append(f64::NEG_INFINITY).is_err());
        assert!(est.is_empty());
        assert!(est.try_append(2.0).is_ok());
        assert_eq!(est.mean(), Some(2.0));
    }

    #[test]
    #[should_panic(expected = "variance is not tracked by this estimator (tracking: mean)")]
    fn test_untracked_variance_panics() {
        let est = DynEstimator::with_initial(Selection::MEAN, 1.0);
        let _ = est.variance();
    }

    #[test]
    #[should_panic(expected = "min is not tracked")]
    fn test_untracked_min_panics_even_when_empty() {
        let est = DynEstimator::new(Selection::MAX);
        let _ = est.min();
    }

    #[test]
    #[should_panic(expected = "min|max is not tracked")]
    fn test_range_needs_both_extrema() {
        let est = DynEstimator::new(Selection::MAX);
        let _ = est.range();
    }
}
