//! Weather backend: async fetching for one lookup.
//! Network work runs on the tokio runtime; results are sent back to the
//! session owner as messages.

use std::sync::Arc;

use citycast_weather::{CurrentConditions, ForecastSample, WeatherError, WeatherProvider};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

/// Messages sent from async operations back to the session owner.
#[derive(Debug)]
pub enum SessionMessage {
    /// Result of the current-conditions fetch
    CurrentDone {
        request_id: u64,
        city: String,
        result: Result<CurrentConditions, WeatherError>,
    },
    /// Result of the forecast fetch; only sent after a successful `CurrentDone`
    ForecastDone {
        request_id: u64,
        result: Result<Vec<ForecastSample>, WeatherError>,
    },
}

impl SessionMessage {
    pub fn request_id(&self) -> u64 {
        match self {
            Self::CurrentDone { request_id, .. } | Self::ForecastDone { request_id, .. } => {
                *request_id
            }
        }
    }
}

/// Fetch current conditions, then the forecast for the same city.
///
/// The forecast is only requested once current conditions succeeded.
pub fn request_fetch(
    runtime: &Handle,
    tx: &UnboundedSender<SessionMessage>,
    provider: Arc<WeatherProvider>,
    request_id: u64,
    city: String,
) {
    let tx = tx.clone();

    runtime.spawn(async move {
        let current = provider.current_by_city(&city).await;
        let succeeded = current.is_ok();

        let sent = tx.send(SessionMessage::CurrentDone {
            request_id,
            city: city.clone(),
            result: current,
        });
        if sent.is_err() {
            tracing::debug!("Session dropped before request {} completed", request_id);
            return;
        }
        if !succeeded {
            return;
        }

        let forecast = provider.forecast_by_city(&city).await;
        let _ = tx.send(SessionMessage::ForecastDone {
            request_id,
            result: forecast,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_request_id() {
        let msg = SessionMessage::ForecastDone {
            request_id: 7,
            result: Ok(Vec::new()),
        };
        assert_eq!(msg.request_id(), 7);

        let msg = SessionMessage::CurrentDone {
            request_id: 3,
            city: "Oslo".into(),
            result: Err(WeatherError::MissingApiKey),
        };
        assert_eq!(msg.request_id(), 3);
    }
}
