//! Session view state and its transitions (idle/loading/failed/displayed).
//!
//! All mutation goes through the `on_*` methods so the visual state stays
//! consistent with the fetch results that produced it.

use citycast_core::AppError;
use citycast_weather::{
    reduce_forecast, theme_key, CurrentConditions, ForecastDay, ForecastSample, WeatherError,
};

use crate::favorites::Favorites;

/// Which single view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    #[default]
    Idle,
    Loading,
    Failed,
    Displayed,
}

/// Everything the front end renders.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub search_input: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub theme_key: Option<String>,
    pub current: Option<CurrentConditions>,
    pub forecast: Vec<ForecastDay>,
    pub favorites: Favorites,
}

impl SessionState {
    /// Active view. Loading wins over an error, an error over data.
    pub fn visual_state(&self) -> VisualState {
        if self.is_loading {
            VisualState::Loading
        } else if self.error_message.is_some() {
            VisualState::Failed
        } else if self.current.is_some() {
            VisualState::Displayed
        } else {
            VisualState::Idle
        }
    }

    /// Name of the city currently on screen, if any.
    pub fn displayed_city(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.city_name.as_str())
    }

    /// State after a lookup is issued.
    pub fn on_request_started(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// State after current conditions arrived. Loading continues until the forecast settles.
    pub fn on_current_loaded(&mut self, current: CurrentConditions) {
        self.theme_key = Some(theme_key(&current.condition_main));
        self.current = Some(current);
        self.error_message = None;
    }

    /// State after the current-conditions fetch failed.
    pub fn on_current_failed(&mut self, error: WeatherError) {
        self.error_message = Some(user_message(error).to_string());
        self.current = None;
        self.forecast.clear();
        self.is_loading = false;
    }

    /// State after the forecast settled; a failure leaves an empty forecast.
    pub fn on_forecast_settled(&mut self, samples: Option<&[ForecastSample]>) {
        self.forecast = samples.map(reduce_forecast).unwrap_or_default();
        self.is_loading = false;
    }
}

/// Display message for a failed lookup.
pub fn user_message(error: WeatherError) -> &'static str {
    AppError::from(error).user_message()
}
