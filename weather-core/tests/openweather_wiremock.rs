//! OpenWeather provider and full fetch cycle against a mock HTTP server.

use weather_core::{
    FETCH_FAILED_MESSAGE, FetchError, OpenWeatherProvider, WeatherPanel, WeatherProvider,
    WeatherView,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const WEATHER_PATH: &str = "/data/2.5/weather";

fn paris_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.3488, "lat": 48.8534 },
        "weather": [
            { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
        ],
        "base": "stations",
        "main": {
            "temp": 20.4,
            "feels_like": 19.8,
            "temp_min": 18.9,
            "temp_max": 21.7,
            "pressure": 1021,
            "humidity": 48
        },
        "visibility": 10000,
        "wind": { "speed": 3.6, "deg": 250 },
        "clouds": { "all": 0 },
        "dt": 1718200000,
        "sys": { "country": "FR", "sunrise": 1718164000, "sunset": 1718222000 },
        "timezone": 7200,
        "id": 2988507,
        "name": "Paris",
        "cod": 200
    })
}

fn test_provider(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::with_base_url(Some("TEST_KEY".to_string()), server.uri())
}

async fn mount_weather(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Provider
// ============================================================================

#[tokio::test]
async fn sends_city_key_and_metric_units() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_response()))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_provider(&server).current_weather("Paris").await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn maps_every_response_field() {
    let server = MockServer::start().await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(paris_response())).await;

    let rec = test_provider(&server).current_weather("Paris").await.unwrap();

    assert_eq!(rec.location_name, "Paris");
    assert_eq!(rec.country, "FR");
    assert!((rec.temperature_c - 20.4).abs() < f64::EPSILON);
    assert!((rec.feels_like_c - 19.8).abs() < f64::EPSILON);
    assert_eq!(rec.humidity_pct, 48);
    assert_eq!(rec.pressure_hpa, 1021);
    assert!((rec.wind_speed_mps - 3.6).abs() < f64::EPSILON);
    assert_eq!(rec.visibility_m, 10_000);
    assert_eq!(rec.condition, "Clear");
    assert_eq!(rec.description, "clear sky");
}

#[tokio::test]
async fn not_found_is_a_status_error() {
    let server = MockServer::start().await;
    mount_weather(
        &server,
        ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })),
    )
    .await;

    let err = test_provider(&server).current_weather("Nowhereville").await.unwrap_err();

    match err {
        FetchError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("city not found"));
        }
        other => panic!("Expected status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let err = test_provider(&server).current_weather("Paris").await.unwrap_err();
    assert!(matches!(err, FetchError::Parse { .. }), "got: {err:?}");
}

#[tokio::test]
async fn missing_field_is_a_parse_error() {
    let server = MockServer::start().await;
    let mut body = paris_response();
    body.as_object_mut().unwrap().remove("main");
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(body)).await;

    let err = test_provider(&server).current_weather("Paris").await.unwrap_err();
    assert!(matches!(err, FetchError::Parse { .. }), "got: {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    // Nothing listens on the discard port.
    let provider = OpenWeatherProvider::with_base_url(
        Some("TEST_KEY".to_string()),
        "http://127.0.0.1:9".to_string(),
    );

    let err = provider.current_weather("Paris").await.unwrap_err();
    assert!(matches!(err, FetchError::Request { .. }), "got: {err:?}");
}

// ============================================================================
// Full cycle
// ============================================================================

#[tokio::test]
async fn successful_search_renders_rounded_temperature() {
    let server = MockServer::start().await;
    mount_weather(&server, ResponseTemplate::new(200).set_body_json(paris_response())).await;

    let provider = test_provider(&server);
    let mut view = WeatherView::new("Vancouver");
    view.set_search_input("Paris");
    assert!(view.search(&provider).await);

    let state = view.state();
    assert!(!state.is_loading);
    assert!(state.error_message.is_none());
    assert_eq!(state.current_city, "Paris");

    let panel = WeatherPanel::from_state(state);
    let card = panel.card.as_ref().unwrap();
    assert_eq!(card.temperature, "20°C");
    assert_eq!(card.visibility, "10.0 km");
}

#[tokio::test]
async fn failed_search_renders_error_and_placeholder() {
    let server = MockServer::start().await;
    mount_weather(&server, ResponseTemplate::new(404)).await;

    let provider = test_provider(&server);
    let mut view = WeatherView::new("Vancouver");
    view.set_search_input("Nowhereville");
    view.search(&provider).await;

    let state = view.state();
    assert_eq!(state.error_message.as_deref(), Some(FETCH_FAILED_MESSAGE));

    let rec = state.weather.as_ref().unwrap();
    assert_eq!(rec.location_name, "Nowhereville");
    assert!((rec.temperature_c - 12.0).abs() < f64::EPSILON);
    assert_eq!(rec.humidity_pct, 75);

    let text = WeatherPanel::from_state(state).to_string();
    assert!(text.contains(FETCH_FAILED_MESSAGE));
    assert!(text.contains("12°C"));
}

#[tokio::test]
async fn blank_search_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_response()))
        .expect(0)
        .mount(&server)
        .await;

    let provider = test_provider(&server);
    let mut view = WeatherView::new("Vancouver");
    view.set_search_input("   ");

    assert!(!view.search(&provider).await);
    assert_eq!(view.state().current_city, "Vancouver");
}
