//! Integration tests for the OpenWeather client and service using wiremock.

use std::sync::Arc;

use weather_core::{
    Coordinate, LocationQuery, ProviderConfig, ProviderError, WeatherError, WeatherProvider,
    WeatherService, provider::openweather::OpenWeatherProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.3488, "lat": 48.8534 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "base": "stations",
        "main": {
            "temp": 24.3, "feels_like": 24.1, "temp_min": 22.9, "temp_max": 25.6,
            "pressure": 1018, "humidity": 48
        },
        "visibility": 10000,
        "wind": { "speed": 3.6, "deg": 40 },
        "clouds": { "all": 0 },
        "dt": 1718000000,
        "sys": { "type": 2, "id": 2041230, "country": "FR", "sunrise": 1717991000, "sunset": 1718049000 },
        "timezone": 7200,
        "id": 2988507,
        "name": "Paris",
        "cod": 200
    })
}

fn service_for(server: &MockServer, api_key: Option<&str>) -> WeatherService {
    let cfg = ProviderConfig {
        api_key: api_key.map(str::to_string),
        base_url: server.uri(),
        timeout_secs: Some(5),
    };
    WeatherService::from_config(&cfg).unwrap()
}

const PARIS: Coordinate = Coordinate { lat: 48.8534, lon: 2.3488 };

#[tokio::test]
async fn test_name_lookup_sends_expected_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let record = service_for(&mock_server, Some("KEY")).weather_by_location("Paris").await.unwrap();

    assert_eq!(record.location, "Paris");
    assert_eq!(record.temperature, 24);
    assert_eq!(record.feels_like, 24);
    assert_eq!(record.condition, "Clear");
    assert_eq!(record.description, "clear sky");
    assert_eq!(record.humidity, 48);
    assert_eq!(record.pressure, 1018);
    assert_eq!(record.visibility, Some(10.0));
    assert_eq!(record.wind_speed, 13.0);
    assert_eq!(record.wind_direction, 40);
    assert_eq!(record.wind_direction_text, "NE");
}

#[tokio::test]
async fn test_coordinate_lookup_sends_lat_lon() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "48.8534"))
        .and(query_param("lon", "2.3488"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server, Some("KEY"));

    let record = service.weather_by_coordinates(PARIS).await.unwrap();
    assert_eq!(record.location, "Paris");

    let city = service.city_by_coordinates(PARIS).await.unwrap();
    assert_eq!(city.location, "Paris");
    assert_eq!(city.country, "FR");
    assert_eq!(city.coordinates, PARIS);
}

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server, None);

    assert_eq!(service.weather_by_location("Paris").await.unwrap_err(), WeatherError::Configuration);
    assert_eq!(service.weather_by_coordinates(PARIS).await.unwrap_err(), WeatherError::Configuration);
    assert_eq!(service.city_by_coordinates(PARIS).await.unwrap_err(), WeatherError::Configuration);
}

#[tokio::test]
async fn test_unknown_city_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let err = service_for(&mock_server, Some("KEY"))
        .weather_by_location("Nowhereville")
        .await
        .unwrap_err();

    assert_eq!(err, WeatherError::NotFound("Location \"Nowhereville\" not found".into()));
}

#[tokio::test]
async fn test_bad_coordinates_map_to_invalid_coordinates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "cod": "400",
            "message": "wrong latitude"
        })))
        .mount(&mock_server)
        .await;

    let err = service_for(&mock_server, Some("KEY")).city_by_coordinates(PARIS).await.unwrap_err();
    assert_eq!(err, WeatherError::InvalidCoordinates);
}

#[tokio::test]
async fn test_rejected_key_maps_to_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })))
        .mount(&mock_server)
        .await;

    let err = service_for(&mock_server, Some("WRONG"))
        .weather_by_coordinates(PARIS)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 401);
    assert!(err.to_string().contains("Invalid API key. Please see"), "{err}");
    assert!(err.to_string().contains("verify your API key"), "{err}");
}

#[tokio::test]
async fn test_server_error_without_json_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = service_for(&mock_server, Some("KEY")).weather_by_location("Paris").await.unwrap_err();
    assert_eq!(
        err,
        WeatherError::Upstream {
            status: Some(502),
            message: "Failed to fetch weather data".into()
        }
    );
}

#[tokio::test]
async fn test_provider_reports_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "cod": 429,
            "message": "Your account is temporary blocked"
        })))
        .mount(&mock_server)
        .await;

    let provider = OpenWeatherProvider::new(&mock_server.uri(), None).unwrap();
    let err = provider
        .current_weather(&LocationQuery::Name("Paris".into()), "KEY")
        .await
        .unwrap_err();

    match err {
        ProviderError::Status { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message.as_deref(), Some("Your account is temporary blocked"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "Paris" })))
        .mount(&mock_server)
        .await;

    let provider: Arc<dyn WeatherProvider> =
        Arc::new(OpenWeatherProvider::new(&mock_server.uri(), None).unwrap());
    let err = provider
        .current_weather(&LocationQuery::Coordinates(PARIS), "KEY")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_unreachable_upstream_is_upstream_error() {
    let cfg = ProviderConfig {
        api_key: Some("KEY".into()),
        // Port 9 (discard) on loopback is not listening in test environments.
        base_url: "http://127.0.0.1:9".into(),
        timeout_secs: Some(2),
    };
    let service = WeatherService::from_config(&cfg).unwrap();

    let err = service.weather_by_location("Paris").await.unwrap_err();
    assert_eq!(err, WeatherError::Upstream { status: None, message: "Failed to fetch weather data".into() });
}
