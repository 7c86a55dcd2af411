//! Model training for the forecasting session
//!
//! [`try_train`] normalizes the historical batch, fits the auto-associative
//! network over shuffled mini-batches for a fixed number of epochs, and hands
//! back the trained model together with the fitted [`NormalizationParams`].
//! The params are returned to the caller explicitly so they can be threaded
//! into the forecaster; concurrent sessions never share them.
//!
//! Failure policy follows the soft-degradation contract: [`train`] maps every
//! error to `None` with a warning, and callers treat `None` as "forecasting
//! unavailable for this dataset", falling back to historical data only.
//! Suitability scoring is independent and unaffected.

use reefwatch_core::{FeatureVector, Reading};

use crate::errors::{ForecastError, ForecastResult};
use crate::network::Network;
use crate::normalize::NormalizationParams;
use crate::rng::Rng;

/// Minimum history length worth fitting a trend to
pub const MIN_TRAINING_RECORDS: usize = 2;

/// Training hyperparameters, fixed per analysis run
#[derive(Debug, Clone, Copy)]
pub struct TrainConfig {
    /// Number of passes over the batch
    pub epochs: usize,
    /// Mini-batch size is `max(records / batch_divisor, 1)`
    pub batch_divisor: usize,
    /// SGD learning rate
    pub learning_rate: f32,
    /// Hidden layer width (kept below the 6 inputs for compression)
    pub hidden_units: usize,
    /// Seed for weight initialization and shuffling
    pub seed: u32,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 60,
            batch_divisor: 4,
            learning_rate: 0.5,
            hidden_units: 4,
            seed: 42,
        }
    }
}

/// Trained forecast model
///
/// Opaque wrapper over the fitted network; a pure function of its input once
/// training completes. Owned by the session that trained it and discarded at
/// run end.
#[derive(Debug, Clone)]
pub struct ForecastModel {
    network: Network,
}

impl ForecastModel {
    /// Run the model on a normalized feature vector
    pub fn predict(&self, normalized: &FeatureVector) -> FeatureVector {
        self.network.predict(normalized)
    }
}

/// Train a forecast model, reporting progress at the end of every epoch
///
/// The callback receives `(epoch, mean_loss)` and is for observability only;
/// it must not mutate forecasting state.
pub fn try_train_with_progress(
    history: &[Reading],
    config: &TrainConfig,
    mut progress: impl FnMut(usize, f32),
) -> ForecastResult<(ForecastModel, NormalizationParams)> {
    if history.len() < MIN_TRAINING_RECORDS {
        return Err(ForecastError::InsufficientData {
            required: MIN_TRAINING_RECORDS,
            available: history.len(),
        });
    }

    let params = NormalizationParams::fit(history)?;
    let samples = params.apply_batch(history);

    let mut rng = Rng::new(config.seed);
    let mut network = Network::new(config.hidden_units, &mut rng);

    let batch_size = (samples.len() / config.batch_divisor.max(1)).max(1);
    let mut order: Vec<usize> = (0..samples.len()).collect();

    for epoch in 0..config.epochs {
        // Fisher-Yates reshuffle of the sample order each epoch
        for i in (1..order.len()).rev() {
            let j = rng.next_range(i + 1);
            order.swap(i, j);
        }

        let mut epoch_loss = 0.0;
        for chunk in order.chunks(batch_size) {
            let batch: Vec<FeatureVector> = chunk.iter().map(|&index| samples[index]).collect();
            // Auto-associative objective: the targets are the inputs themselves
            epoch_loss += network.train_batch(&batch, &batch, config.learning_rate);
        }
        epoch_loss /= samples.len() as f32;

        if !epoch_loss.is_finite() {
            return Err(ForecastError::NumericFailure {
                reason: "non-finite training loss",
            });
        }

        log::debug!("epoch {epoch}: loss {epoch_loss:.6}");
        progress(epoch, epoch_loss);
    }

    Ok((ForecastModel { network }, params))
}

/// Train a forecast model without progress reporting
pub fn try_train(history: &[Reading], config: &TrainConfig) -> ForecastResult<(ForecastModel, NormalizationParams)> {
    try_train_with_progress(history, config, |_, _| {})
}

/// Soft-degrading entry point: `None` means no forecast for this dataset
pub fn train(history: &[Reading], config: &TrainConfig) -> Option<(ForecastModel, NormalizationParams)> {
    match try_train(history, config) {
        Ok(trained) => Some(trained),
        Err(err) => {
            log::warn!("forecast training skipped: {err}");
            None
        }
    }
}
