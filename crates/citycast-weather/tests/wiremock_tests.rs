//! Integration tests for WeatherProvider using wiremock.
//!
//! These tests verify the provider behavior against a mock OpenWeatherMap server.

use citycast_core::WeatherConfig;
use citycast_weather::{reduce_forecast, WeatherError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> WeatherProvider {
    WeatherProvider::new(&WeatherConfig::with_base_url(server.uri(), "test-key")).unwrap()
}

fn current_body() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -0.1257, "lat": 51.5085 },
        "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
        "main": {
            "temp": 12.34,
            "feels_like": 11.62,
            "temp_min": 10.98,
            "temp_max": 13.72,
            "pressure": 1012,
            "humidity": 81
        },
        "wind": { "speed": 4.63, "deg": 240 },
        "sys": { "country": "GB", "sunrise": 1705305842, "sunset": 1705336180 },
        "name": "London",
        "cod": 200
    })
}

fn forecast_item(dt_txt: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "dt": 0,
        "main": { "temp": temp, "humidity": 70 },
        "weather": [{ "main": "Rain", "description": "light rain", "icon": "10d" }],
        "dt_txt": dt_txt
    })
}

#[tokio::test]
async fn test_current_success_sends_metric_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;

    let current = provider_for(&server).current_by_city("London").await.unwrap();

    assert_eq!(current.city_name, "London");
    assert_eq!(current.country_code, "GB");
    assert_eq!(current.condition_main, "Clouds");
    assert_eq!(current.condition_description, "broken clouds");
    assert_eq!(current.humidity_pct, 81);
    assert!((current.temperature_c - 12.34).abs() < 1e-9);
    assert!((current.max_c - 13.72).abs() < 1e-9);
}

#[tokio::test]
async fn test_current_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .current_by_city("Atlantis")
        .await
        .unwrap_err();

    assert!(err.is_not_found(), "expected not found, got {err:?}");
}

#[tokio::test]
async fn test_current_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = provider_for(&server).current_by_city("London").await.unwrap_err();

    match err {
        WeatherError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_current_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = provider_for(&server).current_by_city("London").await.unwrap_err();

    assert!(matches!(err, WeatherError::Parse(_)));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Reserve a port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider =
        WeatherProvider::new(&WeatherConfig::with_base_url(format!("http://{addr}"), "test-key"))
            .unwrap();

    let err = provider.current_by_city("London").await.unwrap_err();
    assert!(matches!(err, WeatherError::Network(_)));
}

#[tokio::test]
async fn test_forecast_samples_parsed_and_reduced() {
    let server = MockServer::start().await;

    let list: Vec<serde_json::Value> = vec![
        forecast_item("2024-01-15 12:00:00", 1.0),
        forecast_item("2024-01-15 15:00:00", 1.5),
        forecast_item("not a timestamp", 9.9),
        forecast_item("2024-01-16 00:00:00", 2.0),
        forecast_item("2024-01-17 00:00:00", 3.0),
        forecast_item("2024-01-18 00:00:00", 4.0),
        forecast_item("2024-01-19 00:00:00", 5.0),
        forecast_item("2024-01-20 00:00:00", 6.0),
    ];

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "cod": "200", "cnt": list.len(), "list": list })),
        )
        .mount(&server)
        .await;

    let samples = provider_for(&server).forecast_by_city("London").await.unwrap();
    assert_eq!(samples.len(), 7, "malformed timestamp should be skipped");

    let days = reduce_forecast(&samples);
    assert_eq!(days.len(), 5);
    assert_eq!(days[0].date_label, "Mon, Jan 15");
    assert_eq!(days[0].temperature_c, 1.0);
    assert_eq!(days[4].date_label, "Fri, Jan 19");
}

#[tokio::test]
async fn test_forecast_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "list": [] })))
        .mount(&server)
        .await;

    let samples = provider_for(&server).forecast_by_city("London").await.unwrap();
    assert!(samples.is_empty());
    assert!(reduce_forecast(&samples).is_empty());
}
