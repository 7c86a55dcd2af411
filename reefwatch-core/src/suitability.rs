//! Habitat Suitability Scoring
//!
//! [`evaluate`] classifies one reading against the threshold catalog and
//! produces a [`SuitabilityResult`]: a discrete verdict, a continuous 0–100
//! index, a rationale listing the threatening violations, and softer caution
//! notes reported separately.
//!
//! The function is pure: no history dependency, no hidden state, fully
//! deterministic given its inputs. Numeric fields are assumed finite
//! (enforced at ingestion, see [`crate::reading::Reading::is_finite`]).
//!
//! ## Index computation
//!
//! The index starts at 100. For each parameter:
//! - threatening: subtract the parameter's full penalty;
//! - caution: subtract the full penalty scaled linearly by how far the value
//!   sits between the ideal edge (0) and the caution edge (1);
//! - ideal: subtract nothing.
//!
//! Penalties accumulate across all six parameters and the result is clamped
//! to [0, 100]. The verdict is unsuitable iff at least one parameter is
//! threatening; caution findings alone never flip it.

use serde::{Deserialize, Serialize};

use crate::reading::{Parameter, Reading, PARAMETER_COUNT};
use crate::thresholds::{Band, ThresholdCatalog};

/// Suitability verdict for one reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityResult {
    /// False iff at least one parameter is in the threatening region
    pub is_suitable: bool,
    /// Continuous suitability index in [0, 100]
    pub index: u8,
    /// Human-readable summary of the threatening violations, empty when none
    pub rationale: String,
    /// Softer findings for parameters in their caution bands
    pub caution_notes: Vec<String>,
    /// Per-parameter classification, in [`Parameter::ALL`] order
    pub bands: [Band; PARAMETER_COUNT],
}

impl SuitabilityResult {
    /// Classification of a single parameter
    pub fn band(&self, parameter: Parameter) -> Band {
        self.bands[parameter.index()]
    }

    /// True when the given parameter is not in its threatening region
    pub fn is_parameter_suitable(&self, parameter: Parameter) -> bool {
        self.band(parameter) != Band::Threatening
    }
}

/// Score one reading against the threshold catalog
pub fn evaluate(reading: &Reading, catalog: &ThresholdCatalog) -> SuitabilityResult {
    let mut bands = [Band::Ideal; PARAMETER_COUNT];
    let mut violations: Vec<String> = Vec::new();
    let mut caution_notes: Vec<String> = Vec::new();
    let mut index = 100.0_f32;

    for entry in catalog.entries() {
        let parameter = entry.parameter;
        let value = reading.value(parameter);
        let band = entry.band.classify(value);
        bands[parameter.index()] = band;

        match band {
            Band::Ideal => {}
            Band::Caution => {
                index -= entry.penalty * entry.band.caution_fraction(value);
                caution_notes.push(describe(parameter, value, "is outside the ideal range"));
            }
            Band::Threatening => {
                index -= entry.penalty;
                violations.push(describe(parameter, value, "is at a threatening level"));
            }
        }
    }

    SuitabilityResult {
        is_suitable: violations.is_empty(),
        index: index.clamp(0.0, 100.0).round() as u8,
        rationale: violations.join("; "),
        caution_notes,
        bands,
    }
}

fn describe(parameter: Parameter, value: f32, finding: &str) -> String {
    let unit = parameter.unit();
    if unit.is_empty() {
        format!("{} {} {}", parameter.label(), value, finding)
    } else {
        format!("{} {} {} {}", parameter.label(), value, unit, finding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading_with(features: [f32; PARAMETER_COUNT]) -> Reading {
        Reading::from_features("2024-03-01 08:00:00", "North Reef", features)
    }

    /// All-ideal baseline reading used by the single-parameter sweeps
    fn ideal_reading() -> Reading {
        reading_with([26.0, 35.0, 8.1, 6.5, 0.5, 0.05])
    }

    #[test]
    fn ideal_reading_scores_full_index() {
        let catalog = ThresholdCatalog::default();
        let result = evaluate(&ideal_reading(), &catalog);

        assert!(result.is_suitable);
        assert_eq!(result.index, 100);
        assert!(result.rationale.is_empty());
        assert!(result.caution_notes.is_empty());
    }

    #[test]
    fn unsuitable_iff_any_parameter_threatening() {
        let catalog = ThresholdCatalog::default();

        // Each case drives exactly one parameter into its threatening region
        let threatening_cases: [(Parameter, [f32; PARAMETER_COUNT]); 6] = [
            (Parameter::WaterTemperature, [23.9, 35.0, 8.1, 6.5, 0.5, 0.05]),
            (Parameter::Salinity, [26.0, 28.0, 8.1, 6.5, 0.5, 0.05]),
            (Parameter::PhLevel, [26.0, 35.0, 7.4, 6.5, 0.5, 0.05]),
            (Parameter::DissolvedOxygen, [26.0, 35.0, 8.1, 3.0, 0.5, 0.05]),
            (Parameter::Turbidity, [26.0, 35.0, 8.1, 6.5, 4.0, 0.05]),
            (Parameter::Nitrate, [26.0, 35.0, 8.1, 6.5, 0.5, 0.8]),
        ];

        for (parameter, features) in threatening_cases {
            let result = evaluate(&reading_with(features), &catalog);
            assert!(!result.is_suitable, "{:?} should be unsuitable", parameter);
            assert_eq!(result.band(parameter), Band::Threatening);
            assert!(!result.is_parameter_suitable(parameter));
            assert!(result.rationale.contains(parameter.label()));
        }
    }

    #[test]
    fn caution_does_not_flip_verdict() {
        let catalog = ThresholdCatalog::default();

        // Warm but not bleaching: 31 °C sits in the caution band
        let result = evaluate(&reading_with([31.0, 35.0, 8.1, 6.5, 0.5, 0.05]), &catalog);

        assert!(result.is_suitable);
        assert_eq!(result.band(Parameter::WaterTemperature), Band::Caution);
        assert!(result.rationale.is_empty());
        assert_eq!(result.caution_notes.len(), 1);
        assert!(result.index < 100);
    }

    #[test]
    fn temperature_boundary_case() {
        let catalog = ThresholdCatalog::default();

        // 24.0 °C is the ideal boundary: suitable
        let at_boundary = evaluate(&reading_with([24.0, 35.0, 8.1, 6.5, 0.5, 0.05]), &catalog);
        assert!(at_boundary.is_suitable);
        assert_eq!(at_boundary.band(Parameter::WaterTemperature), Band::Ideal);

        // 23.9 °C is already threatening: no cold-side caution band
        let below = evaluate(&reading_with([23.9, 35.0, 8.1, 6.5, 0.5, 0.05]), &catalog);
        assert!(!below.is_suitable);
    }

    #[test]
    fn index_non_increasing_as_parameter_degrades() {
        let catalog = ThresholdCatalog::default();

        // Each sweep degrades one parameter from ideal through caution into
        // threatening while holding the rest ideal: warmer temperature, lower
        // dissolved oxygen, higher nitrate
        let sweeps: [(Parameter, [f32; 7]); 3] = [
            (Parameter::WaterTemperature, [26.0, 30.0, 30.5, 31.0, 31.5, 32.0, 33.0]),
            (Parameter::DissolvedOxygen, [6.5, 6.0, 5.5, 5.0, 4.5, 4.0, 3.0]),
            (Parameter::Nitrate, [0.05, 0.1, 0.15, 0.2, 0.25, 0.3, 0.5]),
        ];

        for (parameter, values) in sweeps {
            let mut last_index = u8::MAX;
            for value in values {
                let mut features = ideal_reading().features();
                features[parameter.index()] = value;
                let result = evaluate(&reading_with(features), &catalog);
                assert!(
                    result.index <= last_index,
                    "index rose at {:?} = {value}",
                    parameter
                );
                last_index = result.index;
            }
        }
    }

    #[test]
    fn index_clamped_to_zero_under_stacked_penalties() {
        let catalog = ThresholdCatalog::default();

        // Everything threatening at once
        let result = evaluate(&reading_with([10.0, 10.0, 6.0, 1.0, 20.0, 5.0]), &catalog);

        assert!(!result.is_suitable);
        assert_eq!(result.index, 0);
        assert_eq!(result.caution_notes.len(), 0);
        // Rationale mentions every violated parameter
        for parameter in Parameter::ALL {
            assert!(result.rationale.contains(parameter.label()), "{:?}", parameter);
        }
    }

    #[test]
    fn caution_penalty_interpolates_between_edges() {
        let catalog = ThresholdCatalog::default();

        // Halfway across the warm caution band: half the temperature penalty
        let result = evaluate(&reading_with([31.0, 35.0, 8.1, 6.5, 0.5, 0.05]), &catalog);
        assert_eq!(result.index, 85); // 100 - 30 * 0.5

        // At the caution edge: the full penalty
        let at_edge = evaluate(&reading_with([32.0, 35.0, 8.1, 6.5, 0.5, 0.05]), &catalog);
        assert_eq!(at_edge.index, 70);
        assert!(at_edge.is_suitable); // still caution, not threatening
    }

    #[test]
    fn evaluation_is_deterministic() {
        let catalog = ThresholdCatalog::default();
        let reading = reading_with([31.0, 37.0, 7.7, 5.0, 2.0, 0.2]);

        let first = evaluate(&reading, &catalog);
        let second = evaluate(&reading, &catalog);
        assert_eq!(first, second);
    }
}
