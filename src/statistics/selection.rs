//! Tracked-statistics selector
//!
//! A [`Selection`] names the subset of {mean, variance, min, max} an estimator
//! maintains. [`StreamEstimator`](super::StreamEstimator) derives one from its const
//! generic parameters; [`DynEstimator`](super::DynEstimator) takes one at construction.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Set of statistics tracked by an estimator
///
/// # Example
///
/// ```
/// use seqstats::statistics::Selection;
///
/// let sel = Selection::MEAN | Selection::MAX;
/// assert!(sel.contains(Selection::MEAN));
/// assert!(!sel.contains(Selection::VARIANCE));
/// assert_eq!(sel.to_string(), "mean|max");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection(u8);

impl Selection {
    /// Track nothing but the count
    pub const NONE: Selection = Selection(0);
    /// Running mean
    pub const MEAN: Selection = Selection(1 << 0);
    /// Running population variance
    pub const VARIANCE: Selection = Selection(1 << 1);
    /// Smallest observation
    pub const MIN: Selection = Selection(1 << 2);
    /// Largest observation
    pub const MAX: Selection = Selection(1 << 3);
    /// Every statistic
    pub const ALL: Selection = Selection(0b1111);

    const NAMES: [(Selection, &'static str); 4] = [
        (Selection::MEAN, "mean"),
        (Selection::VARIANCE, "variance"),
        (Selection::MIN, "min"),
        (Selection::MAX, "max"),
    ];

    /// Build a selection from one flag per statistic
    pub const fn from_flags(mean: bool, variance: bool, min: bool, max: bool) -> Self {
        Selection(
            (mean as u8) | ((variance as u8) << 1) | ((min as u8) << 2) | ((max as u8) << 3),
        )
    }

    /// Build a selection from raw bits, ignoring unknown bits
    pub const fn from_bits(bits: u8) -> Self {
        Selection(bits & Self::ALL.0)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether every statistic in `other` is also in `self`
    pub const fn contains(self, other: Selection) -> bool {
        self.0 & other.0 == other.0
    }

    /// Statistics in either selection
    pub const fn union(self, other: Selection) -> Self {
        Selection(self.0 | other.0)
    }

    /// Check if nothing beyond the count is tracked
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Selection {
    type Output = Selection;

    fn bitor(self, rhs: Selection) -> Selection {
        self.union(rhs)
    }
}

impl BitOrAssign for Selection {
    fn bitor_assign(&mut self, rhs: Selection) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
