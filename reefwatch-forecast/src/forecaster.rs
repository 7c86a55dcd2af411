//! Autoregressive multi-step forecasting
//!
//! The rollout is an explicit bounded loop, not recursion: each iteration
//! seeds from the most recent record (the last historical reading first,
//! thereafter the previous synthetic one), normalizes it with the fixed
//! session [`NormalizationParams`], runs the model, denormalizes, jitters,
//! clamps, labels, and appends. Step `i + 1` therefore depends on step `i`
//! by construction, and the loop produces exactly `steps` records in
//! chronological order.
//!
//! Jitter is small independent noise per parameter, with amplitudes tuned to
//! each parameter's natural scale so forecast traces do not collapse into
//! mechanically identical steps. Setting every amplitude to zero makes the
//! rollout fully deterministic for a given model, params, and seed history.
//!
//! Physical clamps run after jitter: every parameter is floored at zero and
//! pH is additionally confined to a plausible chemical range for seawater.

use reefwatch_core::{FeatureVector, ForecastedReading, Parameter, Reading, TimeAxis, PARAMETER_COUNT};

use crate::normalize::NormalizationParams;
use crate::rng::Rng;
use crate::trainer::ForecastModel;

/// Forecast horizon used by the analysis run
pub const DEFAULT_FORECAST_STEPS: usize = 5;

/// Default jitter amplitudes, in physical units per parameter
///
/// Wider for temperature and dissolved oxygen, tight for pH and nitrate,
/// mirroring the parameters' numeric ranges.
pub const DEFAULT_JITTER: FeatureVector = [0.3, 0.2, 0.05, 0.25, 0.1, 0.02];

/// Lower pH clamp for synthetic readings
pub const PH_CLAMP_MIN: f32 = 6.5;

/// Upper pH clamp for synthetic readings
pub const PH_CLAMP_MAX: f32 = 9.0;

/// Forecast rollout configuration, fixed per analysis run
#[derive(Debug, Clone, Copy)]
pub struct ForecastConfig {
    /// Number of synthetic records to produce
    pub steps: usize,
    /// Jitter amplitude per parameter; all zeros disables jitter
    pub jitter: FeatureVector,
    /// Seed for the jitter generator
    pub seed: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_FORECAST_STEPS,
            jitter: DEFAULT_JITTER,
            seed: 42,
        }
    }
}

impl ForecastConfig {
    /// Configuration with jitter disabled, for deterministic output
    pub fn without_jitter() -> Self {
        Self {
            jitter: [0.0; PARAMETER_COUNT],
            ..Self::default()
        }
    }
}

/// Roll the trained model forward, reporting each record as it is produced
///
/// The callback receives `(step, record)` for observability only. Returns an
/// empty sequence (with a warning) when the seed history is empty.
pub fn forecast_with_progress(
    model: &ForecastModel,
    params: &NormalizationParams,
    history: &[Reading],
    config: &ForecastConfig,
    mut progress: impl FnMut(usize, &ForecastedReading),
) -> Vec<ForecastedReading> {
    let Some(last) = history.last() else {
        log::warn!("forecast skipped: empty seed history");
        return Vec::new();
    };

    let labels: Vec<&str> = history.iter().map(|reading| reading.time.as_str()).collect();
    let mut axis = TimeAxis::from_history(&labels);
    let mut rng = Rng::new(config.seed);

    let mut seed = last.features();
    let mut records = Vec::with_capacity(config.steps);

    for step in 0..config.steps {
        let normalized = params.apply(&seed);
        let predicted = model.predict(&normalized);
        let mut features = params.invert(&predicted);

        for i in 0..PARAMETER_COUNT {
            features[i] += rng.next_signed() * config.jitter[i];
        }
        clamp_physical(&mut features);

        let record = ForecastedReading::from_features(axis.next_label(), last.location.clone(), features);
        progress(step, &record);

        // Next step seeds from this one
        seed = features;
        records.push(record);
    }

    records
}

/// Roll the trained model forward for `config.steps` records
pub fn forecast(
    model: &ForecastModel,
    params: &NormalizationParams,
    history: &[Reading],
    config: &ForecastConfig,
) -> Vec<ForecastedReading> {
    forecast_with_progress(model, params, history, config, |_, _| {})
}

/// Clamp a synthetic feature vector to physically plausible values
fn clamp_physical(features: &mut FeatureVector) {
    for value in features.iter_mut() {
        *value = value.max(0.0);
    }
    let ph = Parameter::PhLevel.index();
    features[ph] = features[ph].clamp(PH_CLAMP_MIN, PH_CLAMP_MAX);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trainer::{try_train, TrainConfig};

    fn history() -> Vec<Reading> {
        (0..6)
            .map(|i| {
                let drift = i as f32 * 0.1;
                Reading::from_features(
                    format!("2024-03-{:02} 08:00:00", i + 1),
                    "North Reef",
                    [26.0 + drift, 35.0 - drift * 0.5, 8.1, 6.5, 0.5, 0.05],
                )
            })
            .collect()
    }

    fn trained() -> (ForecastModel, NormalizationParams, Vec<Reading>) {
        let records = history();
        let (model, params) = try_train(&records, &TrainConfig::default()).unwrap();
        (model, params, records)
    }

    #[test]
    fn test_produces_exactly_steps_records() {
        let (model, params, records) = trained();
        let forecasts = forecast(&model, &params, &records, &ForecastConfig::default());

        assert_eq!(forecasts.len(), DEFAULT_FORECAST_STEPS);
        for record in &forecasts {
            assert!(record.is_prediction);
            assert!(record.is_suitable.is_none());
            assert_eq!(record.location, "North Reef");
        }
    }

    #[test]
    fn test_timestamps_advance_strictly() {
        let (model, params, records) = trained();
        let forecasts = forecast(&model, &params, &records, &ForecastConfig::default());

        // Daily history, so labels continue day by day past 2024-03-06
        let labels: Vec<&str> = forecasts.iter().map(|r| r.time.as_str()).collect();
        assert_eq!(
            labels,
            [
                "2024-03-07 08:00:00",
                "2024-03-08 08:00:00",
                "2024-03-09 08:00:00",
                "2024-03-10 08:00:00",
                "2024-03-11 08:00:00",
            ]
        );
    }

    #[test]
    fn test_physical_clamps_hold() {
        let (model, params, records) = trained();
        let config = ForecastConfig {
            // Exaggerated jitter to push values toward the clamps
            jitter: [50.0, 50.0, 50.0, 50.0, 50.0, 50.0],
            ..ForecastConfig::default()
        };
        let forecasts = forecast(&model, &params, &records, &config);

        for record in &forecasts {
            for value in record.features() {
                assert!(value >= 0.0);
            }
            assert!((PH_CLAMP_MIN..=PH_CLAMP_MAX).contains(&record.ph_level));
        }
    }

    #[test]
    fn test_zero_jitter_is_bit_identical() {
        let (model, params, records) = trained();
        let config = ForecastConfig::without_jitter();

        let first = forecast(&model, &params, &records, &config);
        let second = forecast(&model, &params, &records, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_history_yields_empty_forecast() {
        let (model, params, _) = trained();
        let forecasts = forecast(&model, &params, &[], &ForecastConfig::default());
        assert!(forecasts.is_empty());
    }

    #[test]
    fn test_progress_sees_every_step_in_order() {
        let (model, params, records) = trained();

        let mut steps = Vec::new();
        forecast_with_progress(&model, &params, &records, &ForecastConfig::default(), |step, record| {
            assert!(record.is_prediction);
            steps.push(step);
        });

        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_each_step_seeds_from_previous() {
        let (model, params, records) = trained();
        let config = ForecastConfig::without_jitter();
        let forecasts = forecast(&model, &params, &records, &config);

        // Re-derive step 1 by hand from step 0's output
        let step0 = forecasts[0].features();
        let mut expected = params.invert(&model.predict(&params.apply(&step0)));
        super::clamp_physical(&mut expected);
        assert_eq!(forecasts[1].features(), expected);
    }
}
