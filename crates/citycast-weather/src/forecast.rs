//! Daily forecast derivation from the 3-hourly sample series.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::types::{ForecastDay, ForecastSample};

/// Maximum number of days kept in a daily forecast.
pub const MAX_FORECAST_DAYS: usize = 5;

/// Pick one sample per calendar date, in input order.
///
/// The first sample seen for a date wins. Collection stops as soon as
/// `MAX_FORECAST_DAYS` distinct dates have been taken, so later samples are
/// ignored even when they start a new date.
pub fn reduce_forecast(samples: &[ForecastSample]) -> Vec<ForecastDay> {
    let mut seen = HashSet::with_capacity(MAX_FORECAST_DAYS);
    let mut days = Vec::with_capacity(MAX_FORECAST_DAYS);

    for sample in samples {
        if days.len() == MAX_FORECAST_DAYS {
            break;
        }
        let date = sample.date();
        if seen.insert(date) {
            days.push(ForecastDay {
                date,
                date_label: day_label(date),
                temperature_c: sample.temperature_c,
                condition_description: sample.condition_description.clone(),
                icon_id: sample.icon_id.clone(),
            });
        }
    }

    days
}

/// Short en-US date label, e.g. "Mon, Jan 15".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Long en-US date label, e.g. "Monday, January 15, 2024".
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
