//! Plain-text views of a session, one card per section.

use chrono::Local;
use citycast_weather::{long_date_label, CurrentConditions, ForecastDay};

use crate::controller::WeatherSession;
use crate::state::VisualState;

/// Whole-degree display value; halves round away from zero.
pub fn whole(value: f64) -> i64 {
    value.round() as i64
}

/// Render the full screen for the session's current state.
pub fn render_session(session: &WeatherSession) -> String {
    let state = session.state();
    let mut out = String::new();

    out.push_str(&format!("Background: {}\n", session.background_url()));

    match session.visual_state() {
        VisualState::Loading => out.push_str("\nLoading weather data...\n"),
        VisualState::Failed => {
            if let Some(message) = &state.error_message {
                out.push_str(&format!("\n! {message}\n"));
            }
        }
        VisualState::Displayed => {
            if let Some(current) = &state.current {
                out.push_str(&render_current(session, current));
            }
            if !state.forecast.is_empty() {
                out.push_str(&render_forecast(session, &state.forecast));
            }
        }
        VisualState::Idle => {}
    }

    let saved = state.favorites.names();
    if !saved.is_empty() {
        out.push_str("\nSaved Cities\n");
        for (i, name) in saved.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, name));
        }
    }

    out
}

fn render_current(session: &WeatherSession, current: &CurrentConditions) -> String {
    let save_label = if session.is_current_saved() {
        "★ Saved"
    } else {
        "☆ Save City"
    };
    let today = long_date_label(current.observed_at.with_timezone(&Local).date_naive());

    let mut out = String::new();
    out.push_str(&format!(
        "\n{}, {}    [{}]\n{}\n",
        current.city_name, current.country_code, save_label, today
    ));
    out.push_str(&format!(
        "  {}°C  {}  {}\n",
        whole(current.temperature_c),
        current.condition_description,
        session.icon_url(&current.icon_id)
    ));
    out.push_str(&format!("  Feels Like  {}°C\n", whole(current.feels_like_c)));
    out.push_str(&format!("  Humidity    {}%\n", current.humidity_pct));
    out.push_str(&format!("  Wind Speed  {} m/s\n", whole(current.wind_speed)));
    out.push_str(&format!("  Min Temp    {}°C\n", whole(current.min_c)));
    out.push_str(&format!("  Max Temp    {}°C\n", whole(current.max_c)));
    out
}

fn render_forecast(session: &WeatherSession, days: &[ForecastDay]) -> String {
    let mut out = String::from("\n5-Day Forecast\n");
    for day in days {
        out.push_str(&format!(
            "  {:<12} {:>4}°C  {}  {}\n",
            day.date_label,
            whole(day.temperature_c),
            day.condition_description,
            session.icon_url(&day.icon_id)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_rounds_half_away_from_zero() {
        assert_eq!(whole(12.5), 13);
        assert_eq!(whole(12.49), 12);
        assert_eq!(whole(-0.4), 0);
        assert_eq!(whole(-2.5), -3);
    }
}
