//! # Seqstats
//!
//! Constant-memory running statistics for Rust.
//!
//! Seqstats summarizes unbounded streams of numbers online: every observation is
//! folded in with O(1) work and nothing is retained, which makes it a fit for
//! telemetry aggregation, streaming analytics and sensor summarization.
//!
//! ## Features
//!
//! - **Numerically stable**: Welford's recurrence, recentred on the running mean,
//!   so long or large-offset streams do not lose precision to cancellation
//! - **Pay for what you use**: choose which of mean, variance, min and max to
//!   track; untracked accumulators cost nothing
//! - **Checked at compile time**: accessors exist only for tracked statistics
//! - **Explicit availability**: `None` until enough data has been seen
//! - **no_std**: no allocation, no dependencies beyond `libm`
//!
//! ## Quick Start
//!
//! ```rust
//! use seqstats::prelude::*;
//!
//! let mut latency = FullEstimator::new();
//! for ms in [12.0, 15.5, 9.8, 30.1] {
//!     latency.append(ms);
//! }
//! println!("latency: {:.2}", latency);
//!
//! // Only the maximum, nothing else is computed
//! let mut peak = MaxEstimator::new();
//! peak.append(3.0);
//! assert_eq!(peak.max(), Some(3.0));
//! ```
//!
//! ## Runtime Selection
//!
//! When the statistics to track are only known at runtime, use
//! [`DynEstimator`](statistics::DynEstimator):
//!
//! ```rust
//! use seqstats::statistics::{DynEstimator, Selection};
//!
//! let mut est = DynEstimator::new(Selection::MEAN | Selection::VARIANCE);
//! est.extend([1.0, 2.0, 3.0]);
//! assert_eq!(est.mean(), Some(2.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support (`std::error::Error`, std float math).
//!   Without it the crate is `no_std` and uses `libm`.

#![cfg_attr(not(feature = "std"), no_std)]

// Core traits always available
pub mod traits;

pub mod statistics;

mod math;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::statistics::{
        CountEstimator, DynEstimator, FullEstimator, MaxEstimator, MeanEstimator,
        MeanVarianceEstimator, MinEstimator, MinMaxEstimator, Selection, StreamEstimator,
    };
}

pub use statistics::{DynEstimator, FullEstimator, Selection, StreamEstimator};
pub use traits::{Estimator, InputError};
