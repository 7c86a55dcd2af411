//! Iterative water-quality forecasting for ReefWatch
//!
//! Trains a small auto-associative regressor on a site's historical readings
//! and rolls it forward autoregressively to synthesize future readings.
//!
//! ```
//! use reefwatch_core::Reading;
//! use reefwatch_forecast::{forecast, train, ForecastConfig, TrainConfig};
//!
//! let history: Vec<Reading> = (0..6)
//!     .map(|i| Reading::from_features(
//!         format!("2024-03-{:02} 08:00:00", i + 1),
//!         "North Reef",
//!         [26.0 + i as f32 * 0.1, 35.0, 8.1, 6.5, 0.5, 0.05],
//!     ))
//!     .collect();
//!
//! // `None` means forecasting is unavailable for this dataset; the caller
//! // falls back to historical data only.
//! if let Some((model, params)) = train(&history, &TrainConfig::default()) {
//!     let forecasts = forecast(&model, &params, &history, &ForecastConfig::default());
//!     assert_eq!(forecasts.len(), 5);
//! }
//! ```
//!
//! A forecasting session is strictly sequential: training completes before
//! the first rollout step, and each rollout step consumes the previous one's
//! output. The fitted [`NormalizationParams`] are created by training, handed
//! to the caller, and live until the session ends; everything else allocated
//! during a step is released when the step returns.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod forecaster;
pub mod network;
pub mod normalize;
pub mod rng;
pub mod trainer;

// Public API
pub use errors::{ForecastError, ForecastResult};
pub use forecaster::{
    forecast, forecast_with_progress, ForecastConfig, DEFAULT_FORECAST_STEPS, DEFAULT_JITTER,
};
pub use normalize::NormalizationParams;
pub use trainer::{train, try_train, try_train_with_progress, ForecastModel, TrainConfig, MIN_TRAINING_RECORDS};

/// Crate version, for embedding in exported analysis metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
