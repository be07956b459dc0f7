use cep_weather::adapters::http::build_client;
use cep_weather::core::{LocationResolver, WeatherResolver};
use cep_weather::utils::error::ErrorKind;
use cep_weather::{GatewayError, ViaCepClient, WeatherApiClient};
use httpmock::prelude::*;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

fn viacep(server: &MockServer) -> ViaCepClient {
    ViaCepClient::new(build_client(Duration::from_secs(2)).unwrap(), &server.base_url())
}

fn weather_api(server: &MockServer, timeout: Duration) -> WeatherApiClient {
    WeatherApiClient::new(build_client(timeout).unwrap(), &server.base_url(), "test-key")
}

#[tokio::test]
async fn test_viacep_resolves_location() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/ws/80010000/json/");
        then.status(200).json_body(serde_json::json!({
            "cep": "80010-000",
            "logradouro": "Praça Tiradentes",
            "localidade": "Curitiba",
            "uf": "PR"
        }));
    });

    let location = assert_ok!(viacep(&server).resolve("80010-000").await);

    assert_eq!(location.city, "Curitiba");
    assert_eq!(location.region, "PR");
    assert_eq!(location.raw_code, "80010-000");
    mock.assert();
}

#[tokio::test]
async fn test_viacep_legacy_string_error_flag() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ws/99999999/json/");
        then.status(200).json_body(serde_json::json!({"erro": "true"}));
    });

    let err = assert_err!(viacep(&server).resolve("99999999").await);
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_viacep_non_success_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ws/01001000/json/");
        then.status(503).body("Service Unavailable");
    });

    let err = assert_err!(viacep(&server).resolve("01001000").await);
    match err {
        GatewayError::UpstreamError { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_viacep_rejects_bad_format_before_calling() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let err = assert_err!(viacep(&server).resolve("0100-100").await);
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    mock.assert_hits(0);
}

#[tokio::test]
async fn test_weather_api_reads_celsius() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/current.json")
            .query_param("key", "test-key")
            .query_param("q", "Curitiba,PR")
            .query_param("aqi", "no");
        then.status(200).json_body(serde_json::json!({
            "location": {"name": "Curitiba"},
            "current": {"temp_c": 17.5, "condition": {"text": "Cloudy"}}
        }));
    });

    let reading = assert_ok!(
        weather_api(&server, Duration::from_secs(2))
            .resolve("Curitiba", "PR")
            .await
    );

    assert_eq!(reading.celsius, 17.5);
    mock.assert();
}

#[tokio::test]
async fn test_weather_api_error_keeps_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/current.json");
        then.status(400)
            .body(r#"{"error":{"code":1006,"message":"No matching location found."}}"#);
    });

    let err = assert_err!(
        weather_api(&server, Duration::from_secs(2))
            .resolve("Nowhere", "XX")
            .await
    );
    match err {
        GatewayError::UpstreamError { status, body, .. } => {
            assert_eq!(status, 400);
            assert!(body.contains("No matching location found."));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_weather_api_timeout_is_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/current.json");
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(serde_json::json!({"current": {"temp_c": 20.0}}));
    });

    let err = assert_err!(
        weather_api(&server, Duration::from_millis(200))
            .resolve("Curitiba", "PR")
            .await
    );
    assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
}

#[tokio::test]
async fn test_weather_api_malformed_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/current.json");
        then.status(200).body("not json");
    });

    let err = assert_err!(
        weather_api(&server, Duration::from_secs(2))
            .resolve("Curitiba", "PR")
            .await
    );
    assert_eq!(err.kind(), ErrorKind::MalformedUpstreamPayload);
}
