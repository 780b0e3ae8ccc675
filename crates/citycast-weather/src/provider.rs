//! OpenWeatherMap client: current conditions and 5-day/3-hour forecast by city name.

use chrono::Utc;
use citycast_core::WeatherConfig;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::theme;
use crate::types::{wire, CurrentConditions, ForecastSample, WeatherError};

/// Unit system sent with every request.
const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: String,
    icon_base_url: String,
    api_key: String,
}

impl WeatherProvider {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            icon_base_url: config.icon_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch current conditions for a city.
    #[instrument(skip(self), level = "info")]
    pub async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let resp: wire::CurrentResponse = self.get_json("weather", city).await?;
        CurrentConditions::from_wire(resp, Utc::now())
    }

    /// Fetch the 3-hourly forecast series for a city.
    ///
    /// Samples that cannot be interpreted are dropped rather than failing the call.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast_by_city(&self, city: &str) -> Result<Vec<ForecastSample>, WeatherError> {
        let resp: wire::ForecastResponse = self.get_json("forecast", city).await?;
        let total = resp.list.len();
        let samples: Vec<ForecastSample> = resp
            .list
            .into_iter()
            .filter_map(ForecastSample::from_wire)
            .collect();

        if samples.len() < total {
            tracing::debug!("Dropped {} of {} forecast samples", total - samples.len(), total);
        }
        Ok(samples)
    }

    /// Image URL for a condition icon id.
    pub fn icon_url(&self, icon_id: &str) -> String {
        theme::icon_url(&self.icon_base_url, icon_id)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        if self.api_key.trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("units", UNITS), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::NotFound(city.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WeatherError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
    }
}
