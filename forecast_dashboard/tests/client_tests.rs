use forecast_core::{ForecastPoint, ForecastReport, UrgencyStatus, NOT_FOUND_MESSAGE};
use forecast_dashboard::{DashboardError, ForecastClient};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_report() -> ForecastReport {
    let start = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let forecast = (0..7)
        .map(|i| ForecastPoint {
            ds: start + chrono::Duration::days(i),
            yhat: 10.0,
            yhat_lower: 8.0,
            yhat_upper: 12.0,
        })
        .collect();
    ForecastReport {
        product_id: "BB0001".to_string(),
        product_name: "Espresso Beans".to_string(),
        forecast,
        average_sales: 10.0,
        total_sales: 70,
        reorder_point: 12,
        start_date: start,
        end_date: start + chrono::Duration::days(6),
        status: UrgencyStatus::Critical,
    }
}

#[tokio::test]
async fn test_get_forecast_success() {
    let server = MockServer::start().await;
    let report = sample_report();

    Mock::given(method("GET"))
        .and(path("/forecast/prophet"))
        .and(query_param("product_id", "BB0001"))
        .and(query_param("days", "7"))
        .and(query_param("current_stock", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&report))
        .expect(1)
        .mount(&server)
        .await;

    let client = ForecastClient::new(format!("{}/", server.uri())).unwrap();
    let fetched = client.get_forecast("BB0001", 7, 5).await.unwrap();

    assert_eq!(fetched, report);
}

#[tokio::test]
async fn test_not_found_payload_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast/prophet"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": NOT_FOUND_MESSAGE })))
        .mount(&server)
        .await;

    let client = ForecastClient::new(server.uri()).unwrap();
    let err = client.get_forecast("NOPE", 30, 0).await.unwrap_err();

    match err {
        DashboardError::Api(message) => assert_eq!(message, NOT_FOUND_MESSAGE),
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_field_wins_even_with_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast/prophet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": NOT_FOUND_MESSAGE })))
        .mount(&server)
        .await;

    let client = ForecastClient::new(server.uri()).unwrap();
    let err = client.get_forecast("BB0001", 30, 0).await.unwrap_err();
    assert!(matches!(err, DashboardError::Api(_)));
}

#[tokio::test]
async fn test_non_json_failure_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = ForecastClient::new(server.uri()).unwrap();
    let err = client.get_forecast("BB0001", 30, 0).await.unwrap_err();

    match err {
        DashboardError::Api(message) => assert!(message.contains("502")),
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ForecastClient::new(uri).unwrap();
    let err = client.get_forecast("BB0001", 30, 0).await.unwrap_err();
    assert!(matches!(err, DashboardError::Transport(_)));
}
