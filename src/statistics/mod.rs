//! Running statistics over numeric streams
//!
//! Estimators in this module compute count, mean, population variance, min and
//! max in a single pass with constant memory, choosing which statistics to pay for.
//!
//! # Example
//!
//! ```
//! use seqstats::statistics::{FullEstimator, MeanEstimator};
//!
//! let mut stats = FullEstimator::new();
//! let mut mean_only = MeanEstimator::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.append(value);
//!     mean_only.append(value);
//! }
//!
//! println!("{}", stats);
//! assert_eq!(stats.variance(), Some(2.0));
//! assert_eq!(mean_only.mean(), stats.mean());
//! ```

mod dynamic;
mod estimator;
mod moments;
mod selection;

pub use dynamic::DynEstimator;
pub use estimator::{
    CountEstimator, FullEstimator, MaxEstimator, MeanEstimator, MeanVarianceEstimator,
    MinEstimator, MinMaxEstimator, StreamEstimator,
};
pub use selection::Selection;
