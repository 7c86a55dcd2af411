//! Ecological Tolerance Bands for Reef Water Quality
//!
//! This module isolates every ecological constant used by the suitability
//! evaluator so the figures can be reviewed or replaced in one place. Each
//! parameter has an `ideal` band, a `caution` band containing it, and an
//! implicit `threatening` region outside caution.
//!
//! Band shapes are intentionally asymmetric where the underlying tolerance
//! model is asymmetric:
//!
//! - **Water temperature** has a caution band only on the warm side. Below
//!   the ideal minimum, conditions are immediately threatening (cold shock).
//! - **pH** and **dissolved oxygen** are penalized only on the low side;
//!   high values carry no penalty in this model.
//! - **Turbidity** and **nitrate** are lower-is-better with a caution band
//!   above the ideal maximum.
//!
//! The catalog is an immutable configuration value constructed once (via
//! [`Default`]) and passed explicitly into the evaluator, never read from
//! ambient global state.

use serde::{Deserialize, Serialize};

use crate::reading::{Parameter, PARAMETER_COUNT};

// ===== WATER TEMPERATURE (°C) =====

/// Lower bound of the ideal temperature band for reef-building corals.
///
/// Sustained water below this marks the onset of cold stress; there is no
/// cold-side caution band in this tolerance model, so cooler water is
/// classified as threatening outright.
pub const TEMP_IDEAL_MIN_C: f32 = 24.0;

/// Upper bound of the ideal temperature band.
///
/// Most reef corals tolerate up to ~30 °C before thermal stress accumulates.
pub const TEMP_IDEAL_MAX_C: f32 = 30.0;

/// Upper bound of the warm-side caution band.
///
/// Between the ideal maximum and this limit, bleaching risk grows with
/// exposure time. Above it, conditions are acutely threatening.
pub const TEMP_CAUTION_MAX_C: f32 = 32.0;

// ===== SALINITY (PSU) =====

/// Lower bound of the ideal salinity band (open-ocean reef conditions).
pub const SALINITY_IDEAL_MIN_PSU: f32 = 32.0;

/// Upper bound of the ideal salinity band.
pub const SALINITY_IDEAL_MAX_PSU: f32 = 36.0;

/// Lower bound of the caution band (freshwater influx, heavy rainfall).
pub const SALINITY_CAUTION_MIN_PSU: f32 = 30.0;

/// Upper bound of the caution band (evaporation, restricted circulation).
pub const SALINITY_CAUTION_MAX_PSU: f32 = 38.0;

// ===== pH =====

/// Lower bound of the ideal pH band.
///
/// Reef calcification slows measurably once seawater drops below ~7.8.
pub const PH_IDEAL_MIN: f32 = 7.8;

/// Lower bound of the pH caution band.
///
/// Below this, acidification actively dissolves carbonate structure. High pH
/// carries no penalty in this tolerance model.
pub const PH_CAUTION_MIN: f32 = 7.6;

// ===== DISSOLVED OXYGEN (mg/L) =====

/// Minimum dissolved oxygen for ideal conditions.
pub const DO_IDEAL_MIN_MG_L: f32 = 6.0;

/// Minimum dissolved oxygen before conditions become threatening (hypoxia).
pub const DO_CAUTION_MIN_MG_L: f32 = 4.0;

// ===== TURBIDITY (NTU) =====

/// Maximum turbidity for ideal conditions (clear water, full light).
pub const TURBIDITY_IDEAL_MAX_NTU: f32 = 1.0;

/// Maximum turbidity of the caution band (reduced light penetration).
pub const TURBIDITY_CAUTION_MAX_NTU: f32 = 3.0;

// ===== NITRATE (mg/L) =====

/// Maximum nitrate for ideal, oligotrophic reef water.
pub const NITRATE_IDEAL_MAX_MG_L: f32 = 0.1;

/// Maximum nitrate of the caution band (algal competition risk beyond it).
pub const NITRATE_CAUTION_MAX_MG_L: f32 = 0.3;

// ===== SUITABILITY INDEX PENALTIES =====
//
// Full penalty subtracted from the 100-point index when a parameter is
// threatening. Within the caution band the penalty scales linearly from 0 at
// the ideal edge to the full value at the caution edge.

/// Full index penalty for threatening water temperature.
pub const TEMP_PENALTY: f32 = 30.0;

/// Full index penalty for threatening salinity.
pub const SALINITY_PENALTY: f32 = 25.0;

/// Full index penalty for threatening pH.
pub const PH_PENALTY: f32 = 20.0;

/// Full index penalty for threatening dissolved oxygen.
pub const DO_PENALTY: f32 = 30.0;

/// Full index penalty for threatening turbidity.
pub const TURBIDITY_PENALTY: f32 = 15.0;

/// Full index penalty for threatening nitrate.
pub const NITRATE_PENALTY: f32 = 20.0;

/// Classification of a single value against one parameter's bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// Within the ideal interval
    Ideal,
    /// Outside ideal but within the caution interval
    Caution,
    /// Outside the caution interval
    Threatening,
}

/// Tolerance bands for one parameter
///
/// A `None` bound means the band is unbounded on that side, which is how
/// one-sided and asymmetric shapes are expressed. Invariant: the ideal
/// interval is contained in the caution interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdBand {
    /// Lower edge of the ideal interval, if bounded below
    pub ideal_min: Option<f32>,
    /// Upper edge of the ideal interval, if bounded above
    pub ideal_max: Option<f32>,
    /// Lower edge of the caution interval, if bounded below
    pub caution_min: Option<f32>,
    /// Upper edge of the caution interval, if bounded above
    pub caution_max: Option<f32>,
}

impl ThresholdBand {
    /// Classify a value into ideal, caution, or threatening
    pub fn classify(&self, value: f32) -> Band {
        if within(value, self.ideal_min, self.ideal_max) {
            Band::Ideal
        } else if within(value, self.caution_min, self.caution_max) {
            Band::Caution
        } else {
            Band::Threatening
        }
    }

    /// Fraction of the caution band crossed, from 0 at the ideal edge to 1
    /// at the caution edge
    ///
    /// Only meaningful for values classified [`Band::Caution`]; clamped to
    /// [0, 1] for anything else.
    pub fn caution_fraction(&self, value: f32) -> f32 {
        if let (Some(ideal), Some(caution)) = (self.ideal_min, self.caution_min) {
            if value < ideal && caution < ideal {
                return ((ideal - value) / (ideal - caution)).clamp(0.0, 1.0);
            }
        }
        if let (Some(ideal), Some(caution)) = (self.ideal_max, self.caution_max) {
            if value > ideal && caution > ideal {
                return ((value - ideal) / (caution - ideal)).clamp(0.0, 1.0);
            }
        }
        0.0
    }
}

fn within(value: f32, min: Option<f32>, max: Option<f32>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

/// Tolerance bands and index penalty for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterThreshold {
    /// The parameter these bands apply to
    pub parameter: Parameter,
    /// The tolerance bands
    pub band: ThresholdBand,
    /// Full index penalty when threatening
    pub penalty: f32,
}

/// The complete threshold catalog: bands for all six parameters
///
/// Construct once with [`ThresholdCatalog::default`] and pass by reference
/// into [`crate::suitability::evaluate`]. Two concurrent analysis runs can
/// share a catalog freely; it is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdCatalog {
    entries: [ParameterThreshold; PARAMETER_COUNT],
}

impl Default for ThresholdCatalog {
    fn default() -> Self {
        Self {
            entries: [
                ParameterThreshold {
                    parameter: Parameter::WaterTemperature,
                    band: ThresholdBand {
                        ideal_min: Some(TEMP_IDEAL_MIN_C),
                        ideal_max: Some(TEMP_IDEAL_MAX_C),
                        // No cold-side caution: below ideal is threatening
                        caution_min: Some(TEMP_IDEAL_MIN_C),
                        caution_max: Some(TEMP_CAUTION_MAX_C),
                    },
                    penalty: TEMP_PENALTY,
                },
                ParameterThreshold {
                    parameter: Parameter::Salinity,
                    band: ThresholdBand {
                        ideal_min: Some(SALINITY_IDEAL_MIN_PSU),
                        ideal_max: Some(SALINITY_IDEAL_MAX_PSU),
                        caution_min: Some(SALINITY_CAUTION_MIN_PSU),
                        caution_max: Some(SALINITY_CAUTION_MAX_PSU),
                    },
                    penalty: SALINITY_PENALTY,
                },
                ParameterThreshold {
                    parameter: Parameter::PhLevel,
                    band: ThresholdBand {
                        ideal_min: Some(PH_IDEAL_MIN),
                        ideal_max: None,
                        caution_min: Some(PH_CAUTION_MIN),
                        caution_max: None,
                    },
                    penalty: PH_PENALTY,
                },
                ParameterThreshold {
                    parameter: Parameter::DissolvedOxygen,
                    band: ThresholdBand {
                        ideal_min: Some(DO_IDEAL_MIN_MG_L),
                        ideal_max: None,
                        caution_min: Some(DO_CAUTION_MIN_MG_L),
                        caution_max: None,
                    },
                    penalty: DO_PENALTY,
                },
                ParameterThreshold {
                    parameter: Parameter::Turbidity,
                    band: ThresholdBand {
                        ideal_min: None,
                        ideal_max: Some(TURBIDITY_IDEAL_MAX_NTU),
                        caution_min: None,
                        caution_max: Some(TURBIDITY_CAUTION_MAX_NTU),
                    },
                    penalty: TURBIDITY_PENALTY,
                },
                ParameterThreshold {
                    parameter: Parameter::Nitrate,
                    band: ThresholdBand {
                        ideal_min: None,
                        ideal_max: Some(NITRATE_IDEAL_MAX_MG_L),
                        caution_min: None,
                        caution_max: Some(NITRATE_CAUTION_MAX_MG_L),
                    },
                    penalty: NITRATE_PENALTY,
                },
            ],
        }
    }
}

impl ThresholdCatalog {
    /// Bands and penalty for one parameter
    pub fn entry(&self, parameter: Parameter) -> &ParameterThreshold {
        &self.entries[parameter.index()]
    }

    /// Classify a value against one parameter's bands
    pub fn classify(&self, parameter: Parameter, value: f32) -> Band {
        self.entry(parameter).band.classify(value)
    }

    /// All entries in feature-vector order
    pub fn entries(&self) -> &[ParameterThreshold; PARAMETER_COUNT] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_parameter_in_order() {
        let catalog = ThresholdCatalog::default();
        for parameter in Parameter::ALL {
            assert_eq!(catalog.entry(parameter).parameter, parameter);
        }
    }

    #[test]
    fn ideal_contained_in_caution() {
        let catalog = ThresholdCatalog::default();
        for entry in catalog.entries() {
            let band = entry.band;
            if let (Some(ideal), Some(caution)) = (band.ideal_min, band.caution_min) {
                assert!(caution <= ideal, "{:?}", entry.parameter);
            }
            if let (Some(ideal), Some(caution)) = (band.ideal_max, band.caution_max) {
                assert!(caution >= ideal, "{:?}", entry.parameter);
            }
        }
    }

    #[test]
    fn temperature_has_no_cold_caution() {
        let catalog = ThresholdCatalog::default();

        // Just below the ideal minimum is threatening, not caution
        assert_eq!(catalog.classify(Parameter::WaterTemperature, 23.9), Band::Threatening);
        // The ideal boundary itself is ideal
        assert_eq!(catalog.classify(Parameter::WaterTemperature, 24.0), Band::Ideal);
        // Warm side does have a caution band
        assert_eq!(catalog.classify(Parameter::WaterTemperature, 31.0), Band::Caution);
        assert_eq!(catalog.classify(Parameter::WaterTemperature, 32.5), Band::Threatening);
    }

    #[test]
    fn ph_is_unbounded_above() {
        let catalog = ThresholdCatalog::default();

        assert_eq!(catalog.classify(Parameter::PhLevel, 8.1), Band::Ideal);
        assert_eq!(catalog.classify(Parameter::PhLevel, 7.7), Band::Caution);
        assert_eq!(catalog.classify(Parameter::PhLevel, 7.5), Band::Threatening);
        // Too-alkaline water is never flagged in this tolerance model
        assert_eq!(catalog.classify(Parameter::PhLevel, 9.5), Band::Ideal);
    }

    #[test]
    fn lower_is_better_parameters() {
        let catalog = ThresholdCatalog::default();

        assert_eq!(catalog.classify(Parameter::Turbidity, 0.5), Band::Ideal);
        assert_eq!(catalog.classify(Parameter::Turbidity, 2.0), Band::Caution);
        assert_eq!(catalog.classify(Parameter::Turbidity, 4.0), Band::Threatening);

        assert_eq!(catalog.classify(Parameter::Nitrate, 0.05), Band::Ideal);
        assert_eq!(catalog.classify(Parameter::Nitrate, 0.2), Band::Caution);
        assert_eq!(catalog.classify(Parameter::Nitrate, 0.5), Band::Threatening);
    }

    #[test]
    fn caution_fraction_is_linear() {
        let catalog = ThresholdCatalog::default();
        let band = catalog.entry(Parameter::WaterTemperature).band;

        // Halfway between ideal max (30) and caution max (32)
        let fraction = band.caution_fraction(31.0);
        assert!((fraction - 0.5).abs() < 1e-6);

        // At the caution edge, the full penalty applies
        assert!((band.caution_fraction(32.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn caution_fraction_on_lower_side() {
        let catalog = ThresholdCatalog::default();
        let band = catalog.entry(Parameter::DissolvedOxygen).band;

        // Halfway between ideal min (6.0) and caution min (4.0)
        let fraction = band.caution_fraction(5.0);
        assert!((fraction - 0.5).abs() < 1e-6);
    }
}
