//! Compile-time selected running estimator

use core::fmt;

use super::moments::Moments;
use super::Selection;
use crate::math;
use crate::traits::{check_finite, Estimator, InputError};

/// Running estimator whose tracked statistics are fixed by const generic flags
///
/// Each flag switches one accumulator on. Accessors only exist on instantiations
/// that track the statistic, so asking a mean-only estimator for its variance does
/// not compile. Untracked accumulators are never updated.
///
/// Mean and extrema are available after one observation, variance after two.
/// Unavailable statistics are `None`.
///
/// # Example
///
/// ```
/// use seqstats::statistics::FullEstimator;
///
/// let mut est = FullEstimator::new();
///
/// for value in [1.145, 1.4, 1.919, 0.8, 1.0] {
///     est.append(value);
/// }
///
/// assert_eq!(est.len(), 5);
/// assert!((est.mean().unwrap() - 1.2528).abs() < 1e-9);
/// assert!((est.variance().unwrap() - 0.14920936).abs() < 1e-9);
/// assert_eq!(est.min(), Some(0.8));
/// assert_eq!(est.max(), Some(1.919));
/// ```
///
/// Selecting fewer statistics removes their accessors:
///
/// ```compile_fail
/// use seqstats::statistics::MeanEstimator;
///
/// let est = MeanEstimator::with_initial(1.0);
/// let _ = est.variance();
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamEstimator<
    const MEAN: bool,
    const VARIANCE: bool,
    const MIN: bool,
    const MAX: bool,
> {
    moments: Moments,
}

/// Tracks mean, variance, min and max
pub type FullEstimator = StreamEstimator<true, true, true, true>;
/// Tracks mean and variance
pub type MeanVarianceEstimator = StreamEstimator<true, true, false, false>;
/// Tracks the mean only
pub type MeanEstimator = StreamEstimator<true, false, false, false>;
/// Tracks min and max
pub type MinMaxEstimator = StreamEstimator<false, false, true, true>;
/// Tracks the minimum only
pub type MinEstimator = StreamEstimator<false, false, true, false>;
/// Tracks the maximum only
pub type MaxEstimator = StreamEstimator<false, false, false, true>;
/// Tracks nothing but the count
pub type CountEstimator = StreamEstimator<false, false, false, false>;

impl<const MEAN: bool, const VARIANCE: bool, const MIN: bool, const MAX: bool> Default
    for StreamEstimator<MEAN, VARIANCE, MIN, MAX>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const MEAN: bool, const VARIANCE: bool, const MIN: bool, const MAX: bool>
    StreamEstimator<MEAN, VARIANCE, MIN, MAX>
{
    /// Statistics tracked by this instantiation
    pub const SELECTION: Selection = Selection::from_flags(MEAN, VARIANCE, MIN, MAX);

    /// Create an empty estimator
    pub const fn new() -> Self {
        Self {
            moments: Moments::EMPTY,
        }
    }

    /// Create an estimator seeded with one observation
    pub fn with_initial(value: f64) -> Self {
        let mut est = Self::new();
        est.append(value);
        est
    }

    /// Fold one observation into every tracked statistic
    ///
    /// Non-finite values are not checked: NaN or infinity flows into mean and
    /// variance, and NaN never wins a min/max comparison. Use
    /// [`try_append`](Self::try_append) to reject them instead.
    #[inline]
    pub fn append(&mut self, value: f64) {
        self.moments.push(value, Self::SELECTION);
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
        Self::SELECTION
    }
}

impl<const VARIANCE: bool, const MIN: bool, const MAX: bool>
    StreamEstimator<true, VARIANCE, MIN, MAX>
{
    /// Running mean, `None` before the first observation
    pub fn mean(&self) -> Option<f64> {
        self.moments.mean()
    }
}

impl<const MEAN: bool, const MIN: bool, const MAX: bool> StreamEstimator<MEAN, true, MIN, MAX> {
    /// Population variance (divisor n), `None` with fewer than two observations
    pub fn variance(&self) -> Option<f64> {
        self.moments.variance()
    }

    /// Sample variance (divisor n - 1), `None` with fewer than two observations
    pub fn sample_variance(&self) -> Option<f64> {
        self.moments.sample_variance()
    }

    /// Population standard deviation
    pub fn stddev(&self) -> Option<f64> {
        self.variance().map(math::sqrt)
    }
}

impl<const MEAN: bool, const VARIANCE: bool, const MAX: bool>
    StreamEstimator<MEAN, VARIANCE, true, MAX>
{
    /// Smallest observation, `None` before the first one
    pub fn min(&self) -> Option<f64> {
        self.moments.min()
    }
}

impl<const MEAN: bool, const VARIANCE: bool, const MIN: bool>
    StreamEstimator<MEAN, VARIANCE, MIN, true>
{
    /// Largest observation, `None` before the first one
    pub fn max(&self) -> Option<f64> {
        self.moments.max()
    }
}

impl<const MEAN: bool, const VARIANCE: bool> StreamEstimator<MEAN, VARIANCE, true, true> {
    /// Spread between the largest and smallest observation
    pub fn range(&self) -> Option<f64> {
        Some(self.moments.max()? - self.moments.min()?)
    }
}

impl<const MEAN: bool, const VARIANCE: bool, const MIN: bool, const MAX: bool> Estimator
    for StreamEstimator<MEAN, VARIANCE, MIN, MAX>
{
    fn update(&mut self, item: &f64) {
        self.append(*item);
    }

    fn count(&self) -> u64 {
        self.moments.count
    }

    fn selection(&self) -> Selection {
        Self::SELECTION
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }
}

impl<const MEAN: bool, const VARIANCE: bool, const MIN: bool, const MAX: bool> Extend<f64>
    for StreamEstimator<MEAN, VARIANCE, MIN, MAX>
{
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<const MEAN: bool, const VARIANCE: bool, const MIN: bool, const MAX: bool>
    FromIterator<f64> for StreamEstimator<MEAN, VARIANCE, MIN, MAX>
{
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut est = Self::new();
        est.extend(iter);
        est
    }
}

impl<const MEAN: bool, const VARIANCE: bool, const MIN: bool, const MAX: bool> fmt::Display
    for StreamEstimator<MEAN, VARIANCE, MIN, MAX>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.moments.fmt_selected(Self::SELECTION, f)
    }
}
