//! Maps provider errors to citycast_core::AppError; the session takes its
//! lookup messages from here.

use citycast_core::{AppError, NetworkError, ReqwestErrorExt};

use crate::types::WeatherError;

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::NotFound(city) => {
                AppError::Weather(citycast_core::WeatherError::CityNotFound(city))
            }
            WeatherError::Http { status, message } => {
                AppError::Network(NetworkError::ServerError { status, message })
            }
            WeatherError::Network(e) => AppError::Network(e.into_network_error()),
            WeatherError::Parse(msg) => AppError::Network(NetworkError::InvalidResponse(msg)),
            WeatherError::MissingApiKey => {
                AppError::Weather(citycast_core::WeatherError::MissingApiKey)
            }
        }
    }
}
