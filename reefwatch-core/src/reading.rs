//! Sensor reading types for reef water-quality monitoring
//!
//! A [`Reading`] is one time-stamped sample of the six monitored parameters
//! at a site. Readings are parsed upstream (out of scope here) and are
//! immutable once constructed; both the suitability evaluator and the
//! forecasting pipeline consume them read-only.
//!
//! The six parameters have a fixed order, given by [`Parameter::ALL`], which
//! is also the layout of the feature vectors exchanged with the forecasting
//! crate.

use serde::{Deserialize, Serialize};

/// Number of monitored water-quality parameters
pub const PARAMETER_COUNT: usize = 6;

/// Fixed feature vector: one value per parameter, in [`Parameter::ALL`] order
pub type FeatureVector = [f32; PARAMETER_COUNT];

/// The monitored water-quality parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    /// Water temperature in °C
    WaterTemperature,
    /// Salinity in PSU (practical salinity units)
    Salinity,
    /// pH level (unitless)
    PhLevel,
    /// Dissolved oxygen in mg/L
    DissolvedOxygen,
    /// Turbidity in NTU
    Turbidity,
    /// Nitrate concentration in mg/L
    Nitrate,
}

impl Parameter {
    /// All parameters in feature-vector order
    pub const ALL: [Parameter; PARAMETER_COUNT] = [
        Parameter::WaterTemperature,
        Parameter::Salinity,
        Parameter::PhLevel,
        Parameter::DissolvedOxygen,
        Parameter::Turbidity,
        Parameter::Nitrate,
    ];

    /// Index of this parameter within a [`FeatureVector`]
    pub fn index(&self) -> usize {
        match self {
            Parameter::WaterTemperature => 0,
            Parameter::Salinity => 1,
            Parameter::PhLevel => 2,
            Parameter::DissolvedOxygen => 3,
            Parameter::Turbidity => 4,
            Parameter::Nitrate => 5,
        }
    }

    /// Human-readable name, used in rationales
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::WaterTemperature => "water temperature",
            Parameter::Salinity => "salinity",
            Parameter::PhLevel => "pH",
            Parameter::DissolvedOxygen => "dissolved oxygen",
            Parameter::Turbidity => "turbidity",
            Parameter::Nitrate => "nitrate",
        }
    }

    /// Measurement unit, empty for unitless parameters
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::WaterTemperature => "°C",
            Parameter::Salinity => "PSU",
            Parameter::PhLevel => "",
            Parameter::DissolvedOxygen => "mg/L",
            Parameter::Turbidity => "NTU",
            Parameter::Nitrate => "mg/L",
        }
    }
}

/// One time-stamped sample of all six parameters at a monitored site
///
/// The `time` field is the raw label from ingestion (timestamp string or
/// ordinal); it is interpreted only by the time-step estimator, which
/// tolerates unparseable labels. All six numeric fields are expected to be
/// finite before reaching the core; ingestion code can enforce that with
/// [`Reading::is_finite`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Timestamp label as parsed from the source data
    pub time: String,
    /// Monitoring site name
    pub location: String,
    /// Water temperature in °C
    pub water_temperature: f32,
    /// Salinity in PSU
    pub salinity: f32,
    /// pH level
    pub ph_level: f32,
    /// Dissolved oxygen in mg/L
    pub dissolved_oxygen: f32,
    /// Turbidity in NTU
    pub turbidity: f32,
    /// Nitrate in mg/L
    pub nitrate: f32,
}

impl Reading {
    /// Create a reading from a time label, site name, and feature vector
    pub fn from_features(time: impl Into<String>, location: impl Into<String>, features: FeatureVector) -> Self {
        Self {
            time: time.into(),
            location: location.into(),
            water_temperature: features[0],
            salinity: features[1],
            ph_level: features[2],
            dissolved_oxygen: features[3],
            turbidity: features[4],
            nitrate: features[5],
        }
    }

    /// Feature vector in [`Parameter::ALL`] order
    pub fn features(&self) -> FeatureVector {
        [
            self.water_temperature,
            self.salinity,
            self.ph_level,
            self.dissolved_oxygen,
            self.turbidity,
            self.nitrate,
        ]
    }

    /// Value of a single parameter
    pub fn value(&self, parameter: Parameter) -> f32 {
        self.features()[parameter.index()]
    }

    /// True when every numeric field is a finite number
    ///
    /// Ingestion code should reject readings that fail this check; the
    /// evaluator and normalizer assume finite inputs.
    pub fn is_finite(&self) -> bool {
        self.features().iter().all(|v| v.is_finite())
    }
}

/// A synthesized future reading produced by the autoregressive forecaster
///
/// Suitability is intentionally not computed for synthetic points, so
/// `is_suitable` is always `None` on construction; callers that want a score
/// can evaluate the embedded values themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastedReading {
    /// Synthesized timestamp label
    pub time: String,
    /// Monitoring site name, carried over from the seed history
    pub location: String,
    /// Water temperature in °C
    pub water_temperature: f32,
    /// Salinity in PSU
    pub salinity: f32,
    /// pH level
    pub ph_level: f32,
    /// Dissolved oxygen in mg/L
    pub dissolved_oxygen: f32,
    /// Turbidity in NTU
    pub turbidity: f32,
    /// Nitrate in mg/L
    pub nitrate: f32,
    /// Always true; distinguishes synthetic records in mixed sequences
    pub is_prediction: bool,
    /// Left unset for synthetic records
    pub is_suitable: Option<bool>,
}

impl ForecastedReading {
    /// Create a forecasted reading from a synthesized time label and features
    pub fn from_features(time: impl Into<String>, location: impl Into<String>, features: FeatureVector) -> Self {
        Self {
            time: time.into(),
            location: location.into(),
            water_temperature: features[0],
            salinity: features[1],
            ph_level: features[2],
            dissolved_oxygen: features[3],
            turbidity: features[4],
            nitrate: features[5],
            is_prediction: true,
            is_suitable: None,
        }
    }

    /// Feature vector in [`Parameter::ALL`] order
    pub fn features(&self) -> FeatureVector {
        [
            self.water_temperature,
            self.salinity,
            self.ph_level,
            self.dissolved_oxygen,
            self.turbidity,
            self.nitrate,
        ]
    }

    /// View the synthetic values as a [`Reading`], e.g. for re-scoring
    pub fn as_reading(&self) -> Reading {
        Reading::from_features(self.time.clone(), self.location.clone(), self.features())
    }
}
