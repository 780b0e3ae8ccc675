use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout of forecast samples (`dt_txt`), always UTC.
pub const FORECAST_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current weather conditions for a named city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city_name: String,
    pub country_code: String,
    pub observed_at: DateTime<Utc>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub min_c: f64,
    pub max_c: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    /// Primary condition label, e.g. "Clouds"
    pub condition_main: String,
    /// Human-readable condition, e.g. "broken clouds"
    pub condition_description: String,
    pub icon_id: String,
}

/// One provider prediction point (3-hour granularity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub condition_description: String,
    pub icon_id: String,
}

impl ForecastSample {
    /// Calendar date the sample belongs to
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// One entry of the daily forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Short display label, e.g. "Mon, Jan 15"
    pub date_label: String,
    pub temperature_c: f64,
    pub condition_description: String,
    pub icon_id: String,
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    NotFound(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("No API key configured")]
    MissingApiKey,
}

impl WeatherError {
    /// True when the provider reported that no location matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Wire format of the provider responses. Only the consumed fields are modelled.
pub(crate) mod wire {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub name: String,
        #[serde(default)]
        pub sys: Option<Sys>,
        #[serde(default)]
        pub weather: Vec<Condition>,
        pub main: Main,
        #[serde(default)]
        pub wind: Option<Wind>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Sys {
        #[serde(default)]
        pub country: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        #[serde(default)]
        pub main: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub icon: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct Main {
        pub temp: f64,
        pub feels_like: f64,
        pub temp_min: f64,
        pub temp_max: f64,
        pub humidity: u8,
    }

    #[derive(Debug, Deserialize)]
    pub struct Wind {
        pub speed: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        #[serde(default)]
        pub list: Vec<ForecastItem>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastItem {
        pub dt_txt: String,
        pub main: ForecastMain,
        #[serde(default)]
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ForecastMain {
        pub temp: f64,
    }
}

impl CurrentConditions {
    pub(crate) fn from_wire(
        resp: wire::CurrentResponse,
        observed_at: DateTime<Utc>,
    ) -> Result<Self, WeatherError> {
        let condition = resp
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Parse("response has no weather condition".into()))?;

        Ok(Self {
            city_name: resp.name,
            country_code: resp.sys.and_then(|s| s.country).unwrap_or_default(),
            observed_at,
            temperature_c: resp.main.temp,
            feels_like_c: resp.main.feels_like,
            min_c: resp.main.temp_min,
            max_c: resp.main.temp_max,
            humidity_pct: resp.main.humidity,
            wind_speed: resp.wind.map(|w| w.speed).unwrap_or(0.0),
            condition_main: condition.main,
            condition_description: condition.description,
            icon_id: condition.icon,
        })
    }
}

impl ForecastSample {
    /// Convert one wire item; `None` when the timestamp or condition is unusable.
    pub(crate) fn from_wire(item: wire::ForecastItem) -> Option<Self> {
        let timestamp = match NaiveDateTime::parse_from_str(&item.dt_txt, FORECAST_TIMESTAMP_FORMAT)
        {
            Ok(ts) => ts,
            Err(e) => {
                tracing::debug!("Skipping forecast sample {:?}: {}", item.dt_txt, e);
                return None;
            }
        };

        let Some(condition) = item.weather.into_iter().next() else {
            tracing::debug!("Skipping forecast sample {} without condition", item.dt_txt);
            return None;
        };

        Some(Self {
            timestamp,
            temperature_c: item.main.temp,
            condition_description: condition.description,
            icon_id: condition.icon,
        })
    }
}
