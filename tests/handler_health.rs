mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;

use travel_planner::api::handlers::health_handler;

#[tokio::test]
async fn test_health_reports_healthy() {
    let app = common::create_test_app();
    let router = Router::new()
        .route("/health", get(health_handler))
        .with_state(app.state.clone());
    let server = TestServer::new(router).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json["version"].is_string());
}
