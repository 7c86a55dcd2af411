//! Sampling-interval estimation for forecast time labels
//!
//! Forecast records need synthesized timestamps. The estimator derives the
//! typical sampling interval from the historical labels: parse consecutive
//! timestamps, take the pairwise positive differences, and average the ones
//! that are usable. Labels that fail to parse are skipped with a warning
//! rather than aborting the run; with fewer than two usable differences the
//! estimator falls back to a one-day default.
//!
//! [`TimeAxis`] packages the estimated step with the last known instant and
//! hands out strictly advancing labels, one per forecast step. When not a
//! single history label parses, it degrades to ordinal `<last> +N` labels so
//! the forecast sequence still carries a usable time axis.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Fallback sampling interval when history yields no usable differences
pub fn default_step() -> Duration {
    Duration::days(1)
}

/// Timestamp formats accepted from ingestion, tried in order
const TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Format used when writing synthesized labels
const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse one timestamp label, trying each accepted format
///
/// Date-only labels are accepted and pinned to midnight.
pub fn parse_time(label: &str) -> Option<NaiveDateTime> {
    let label = label.trim();
    for format in TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(label, format) {
            return Some(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(label, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
    }
    None
}

/// Estimate the typical sampling interval from historical time labels
///
/// Averages the positive differences between consecutive parseable labels.
/// Falls back to [`default_step`] when fewer than two usable differences
/// exist.
pub fn estimate_step(labels: &[&str]) -> Duration {
    let mut instants = Vec::with_capacity(labels.len());
    for label in labels {
        match parse_time(label) {
            Some(instant) => instants.push(instant),
            None => log::warn!("skipping unparseable timestamp {label:?}"),
        }
    }

    let mut total = Duration::zero();
    let mut count = 0i32;
    for pair in instants.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > Duration::zero() {
            total = total + gap;
            count += 1;
        }
    }

    if count < 2 {
        log::warn!(
            "only {count} usable timestamp gaps in {} records, using default step of 1 day",
            labels.len()
        );
        return default_step();
    }

    total / count
}

/// Time axis for synthesizing forecast labels
///
/// Built once per forecasting session from the seed history; each call to
/// [`TimeAxis::next_label`] advances by the estimated step and returns a
/// strictly later label.
#[derive(Debug, Clone)]
pub struct TimeAxis {
    step: Duration,
    cursor: Option<NaiveDateTime>,
    // Degraded mode: last raw label plus an ordinal counter
    last_label: String,
    ordinal: u32,
}

impl TimeAxis {
    /// Derive a time axis from historical labels
    ///
    /// The cursor starts at the last parseable label; if none parses, labels
    /// degrade to `<last> +N` ordinals.
    pub fn from_history(labels: &[&str]) -> Self {
        let step = estimate_step(labels);
        let cursor = labels.iter().rev().find_map(|label| parse_time(label));
        let last_label = labels.last().map(|label| label.to_string()).unwrap_or_default();

        if cursor.is_none() {
            log::warn!("no parseable timestamp in history, forecast labels will be ordinal");
        }

        Self {
            step,
            cursor,
            last_label,
            ordinal: 0,
        }
    }

    /// The estimated sampling interval
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Advance by one step and return the label for the next forecast record
    pub fn next_label(&mut self) -> String {
        match self.cursor {
            Some(instant) => {
                let next = instant + self.step;
                self.cursor = Some(next);
                next.format(OUTPUT_FORMAT).to_string()
            }
            None => {
                self.ordinal += 1;
                if self.last_label.is_empty() {
                    format!("t+{}", self.ordinal)
                } else {
                    format!("{} +{}", self.last_label, self.ordinal)
                }
            }
        }
    }
}
