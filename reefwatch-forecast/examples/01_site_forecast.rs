//! ReefWatch Site Forecast Example
//!
//! Walks one monitored site through the full analysis flow:
//! - score each historical reading against the ecological tolerance bands
//! - train the forecast model on the history
//! - roll the model forward five steps and print the synthetic readings
//!
//! ## Scenario: Warm-Season Drift at North Reef
//!
//! Two weeks of daily samples with a slow temperature climb toward the
//! caution band, so the printed suitability indices visibly decay while the
//! other parameters hold steady.

use reefwatch_core::{evaluate, Reading, ThresholdCatalog};
use reefwatch_forecast::{forecast_with_progress, try_train_with_progress, ForecastConfig, TrainConfig};

fn simulated_history() -> Vec<Reading> {
    (0..14)
        .map(|day| {
            // Slow warm-season drift plus a small diurnal wobble
            let temperature = 27.5 + day as f32 * 0.25 + if day % 2 == 0 { 0.1 } else { -0.1 };
            Reading::from_features(
                format!("2024-03-{:02} 08:00:00", day + 1),
                "North Reef",
                [temperature, 35.0, 8.1, 6.5, 0.5, 0.05],
            )
        })
        .collect()
}

fn main() {
    let catalog = ThresholdCatalog::default();
    let history = simulated_history();

    println!("=== Historical suitability ===");
    for reading in &history {
        let result = evaluate(reading, &catalog);
        let verdict = if result.is_suitable { "suitable" } else { "UNSUITABLE" };
        println!(
            "{}  {:4.1} °C  index {:3}  {}",
            reading.time, reading.water_temperature, result.index, verdict
        );
        for note in &result.caution_notes {
            println!("    caution: {note}");
        }
        if !result.rationale.is_empty() {
            println!("    {}", result.rationale);
        }
    }

    println!("\n=== Training ===");
    let trained = try_train_with_progress(&history, &TrainConfig::default(), |epoch, loss| {
        if epoch % 10 == 0 {
            println!("epoch {epoch:3}  loss {loss:.6}");
        }
    });

    let (model, params) = match trained {
        Ok(trained) => trained,
        Err(err) => {
            println!("forecast unavailable: {err}");
            return;
        }
    };

    println!("\n=== Five-day forecast ===");
    forecast_with_progress(&model, &params, &history, &ForecastConfig::default(), |_, record| {
        println!(
            "{}  T {:4.1} °C  S {:4.1}  pH {:3.1}  DO {:3.1}  turb {:3.1}  NO3 {:4.2}",
            record.time,
            record.water_temperature,
            record.salinity,
            record.ph_level,
            record.dissolved_oxygen,
            record.turbidity,
            record.nitrate,
        );
    });
}
