//! Weather data for CityCast
//!
//! Fetches current conditions and the 5-day/3-hour forecast from
//! OpenWeatherMap by city name, and derives the daily forecast and
//! display theme from them.

pub mod error_mapping;
pub mod forecast;
pub mod provider;
pub mod theme;
pub mod types;

pub use forecast::{day_label, long_date_label, reduce_forecast, MAX_FORECAST_DAYS};
pub use provider::WeatherProvider;
pub use theme::{background_url, icon_url, theme_key};
pub use types::*;
