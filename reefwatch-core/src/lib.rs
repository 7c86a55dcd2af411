//! Core habitat-suitability engine for ReefWatch
//!
//! Scores time-stamped water-quality readings against ecological tolerance
//! bands for reef habitats. Each reading is classified per parameter as
//! ideal, caution, or threatening and condensed into a 0–100 suitability
//! index with a human-readable rationale.
//!
//! ```
//! use reefwatch_core::{evaluate, Reading, ThresholdCatalog};
//!
//! let catalog = ThresholdCatalog::default();
//! let reading = Reading::from_features(
//!     "2024-03-01 08:00:00",
//!     "North Reef",
//!     [26.0, 35.0, 8.1, 6.5, 0.5, 0.05],
//! );
//!
//! let result = evaluate(&reading, &catalog);
//! assert!(result.is_suitable);
//! ```
//!
//! Forecasting of future readings lives in the companion `reefwatch-forecast`
//! crate; this crate only contributes the time-step estimation it needs for
//! labeling synthetic records.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod reading;
pub mod suitability;
pub mod thresholds;
pub mod timestep;

// Public API
pub use reading::{FeatureVector, ForecastedReading, Parameter, Reading, PARAMETER_COUNT};
pub use suitability::{evaluate, SuitabilityResult};
pub use thresholds::{Band, ThresholdBand, ThresholdCatalog};
pub use timestep::{estimate_step, TimeAxis};

/// Crate version, for embedding in exported analysis metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
