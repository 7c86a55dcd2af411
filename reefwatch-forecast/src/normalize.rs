//! Min-max feature normalization
//!
//! The model trains and predicts in [0, 1] space; [`NormalizationParams`]
//! holds the per-feature minimum and maximum fitted once from the training
//! batch. The same params are used for every normalize/denormalize call in a
//! forecasting session and are never refit mid-rollout — two concurrent
//! sessions each own their own fitted copy.
//!
//! A small fixed epsilon in the divisor guards features that are constant
//! across the batch: instead of dividing by zero they normalize to 0 for
//! every record, and the epsilon is far too small to perceptibly distort
//! genuinely varying features. [`NormalizationParams::invert`] applies the
//! exact algebraic inverse with the same epsilon, so round-tripping a vector
//! reproduces it up to float error.

use reefwatch_core::{FeatureVector, Reading, PARAMETER_COUNT};

use crate::errors::{ForecastError, ForecastResult};

/// Divisor guard for zero-range features
pub const RANGE_EPSILON: f32 = 1e-6;

/// Per-feature min/max fitted from a training batch
///
/// Immutable after [`NormalizationParams::fit`]; pass by reference into
/// normalize/denormalize calls for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationParams {
    min: FeatureVector,
    max: FeatureVector,
}

impl NormalizationParams {
    /// Fit per-feature minima and maxima across a batch of readings
    pub fn fit(batch: &[Reading]) -> ForecastResult<Self> {
        if batch.is_empty() {
            return Err(ForecastError::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        let mut min = [f32::INFINITY; PARAMETER_COUNT];
        let mut max = [f32::NEG_INFINITY; PARAMETER_COUNT];

        for reading in batch {
            let features = reading.features();
            for i in 0..PARAMETER_COUNT {
                min[i] = min[i].min(features[i]);
                max[i] = max[i].max(features[i]);
            }
        }

        Ok(Self { min, max })
    }

    /// Scale a feature vector into [0, 1] space
    pub fn apply(&self, features: &FeatureVector) -> FeatureVector {
        let mut scaled = [0.0; PARAMETER_COUNT];
        for i in 0..PARAMETER_COUNT {
            scaled[i] = (features[i] - self.min[i]) / (self.max[i] - self.min[i] + RANGE_EPSILON);
        }
        scaled
    }

    /// Exact algebraic inverse of [`NormalizationParams::apply`]
    pub fn invert(&self, scaled: &FeatureVector) -> FeatureVector {
        let mut features = [0.0; PARAMETER_COUNT];
        for i in 0..PARAMETER_COUNT {
            features[i] = scaled[i] * (self.max[i] - self.min[i] + RANGE_EPSILON) + self.min[i];
        }
        features
    }

    /// Scale a whole batch, preserving order
    pub fn apply_batch(&self, batch: &[Reading]) -> Vec<FeatureVector> {
        batch.iter().map(|reading| self.apply(&reading.features())).collect()
    }

    /// Fitted per-feature minima
    pub fn min(&self) -> &FeatureVector {
        &self.min
    }

    /// Fitted per-feature maxima
    pub fn max(&self) -> &FeatureVector {
        &self.max
    }
}
