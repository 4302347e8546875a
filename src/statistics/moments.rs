//! Shared update kernel for the running estimators
//!
//! Mean and variance follow Welford's single-pass recurrence in its
//! population-variance form. Each new deviation is taken from the previous mean
//! rather than accumulated into raw sums, so intermediate terms stay on the scale of
//! the data no matter how long the stream is or how far it sits from zero.

use core::fmt;

use super::Selection;

/// Raw accumulator state
///
/// Fields outside the active selection keep their initial values. Accessors do the
/// availability checks; this type only stores and updates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Moments {
    /// Number of observations folded in
    pub(crate) count: u64,
    /// Running mean
    pub(crate) mean: f64,
    /// Running population variance
    pub(crate) variance: f64,
    /// Smallest observation
    pub(crate) min: f64,
    /// Largest observation
    pub(crate) max: f64,
}

impl Moments {
    pub(crate) const EMPTY: Moments = Moments {
        count: 0,
        mean: 0.0,
        variance: 0.0,
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Fold `value` in, touching only the accumulators in `selection`
    ///
    /// With a constant `selection` the untaken branches compile away.
    #[inline(always)]
    pub(crate) fn push(&mut self, value: f64, selection: Selection) {
        if selection.contains(Selection::MIN) && value < self.min {
            self.min = value;
        }
        if selection.contains(Selection::MAX) && value > self.max {
            self.max = value;
        }

        if selection.contains(Selection::VARIANCE) {
            let delta = value - self.mean;
            self.count += 1;
            let beta = 1.0 / self.count as f64;
            self.mean += beta * delta;
            // (1 - beta) is exactly 0 on the first observation, so the placeholder
            // variance never leaks into later steps.
            self.variance = (1.0 - beta) * (self.variance + beta * delta * delta);
        } else if selection.contains(Selection::MEAN) {
            let delta = value - self.mean;
            self.count += 1;
            let beta = 1.0 / self.count as f64;
            self.mean += beta * delta;
        } else {
            self.count += 1;
        }
    }

    #[inline]
    pub(crate) fn mean(&self) -> Option<f64> {
        (self.count >= 1).then_some(self.mean)
    }

    #[inline]
    pub(crate) fn variance(&self) -> Option<f64> {
        (self.count >= 2).then_some(self.variance)
    }

    /// Bessel-corrected variance, `variance * n / (n - 1)`
    #[inline]
    pub(crate) fn sample_variance(&self) -> Option<f64> {
        let n = self.count as f64;
        self.variance().map(|v| v * n / (n - 1.0))
    }

    #[inline]
    pub(crate) fn min(&self) -> Option<f64> {
        (self.count >= 1).then_some(self.min)
    }

    #[inline]
    pub(crate) fn max(&self) -> Option<f64> {
        (self.count >= 1).then_some(self.max)
    }

    /// Write `(n = .., avg = .., var = .., min = .., max = ..)` for the selected fields
    ///
    /// Unavailable statistics print as `NaN`. A precision set on `f` applies to every
    /// real-valued field.
    pub(crate) fn fmt_selected(
        &self,
        selection: Selection,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "(n = {}", self.count)?;
        let fields = [
            (Selection::MEAN, "avg", self.mean()),
            (Selection::VARIANCE, "var", self.variance()),
            (Selection::MIN, "min", self.min()),
            (Selection::MAX, "max", self.max()),
        ];
        for (flag, label, value) in fields {
            if !selection.contains(flag) {
                continue;
            }
            let value = value.unwrap_or(f64::NAN);
            match f.precision() {
                Some(p) => write!(f, ", {} = {:.*}", label, p, value)?,
                None => write!(f, ", {} = {}", label, value)?,
            }
        }
        f.write_str(")")
    }
}

impl Default for Moments {
    fn default() -> Self {
        Self::EMPTY
    }
}
