mod common;

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};

use travel_planner::api::handlers::{destination_get_handler, destination_list_handler};
use travel_planner::api::middleware::auth;
use travel_planner::api::routes::admin_routes;
use travel_planner::domain::entities::{BudgetLevel, TravelCategory};

/// Router mirroring the production layout: public reads plus the
/// token-guarded admin nest.
fn catalog_server(app: &common::TestApp) -> TestServer {
    let admin = admin_routes().route_layer(middleware::from_fn_with_state(
        app.state.clone(),
        auth::layer,
    ));

    let router = Router::new()
        .route("/api/destinations", get(destination_list_handler))
        .route("/api/destinations/{id}", get(destination_get_handler))
        .nest("/api/admin", admin)
        .with_state(app.state.clone());

    TestServer::new(router).unwrap()
}

fn destination_payload() -> Value {
    json!({
        "name": "Kyoto",
        "country": "Japan",
        "city": "Kyoto",
        "category": "culture",
        "budget_level": "high",
        "budget_min": "2000",
        "budget_max": "6000",
        "objectives_supported": ["leisure", "honeymoon"]
    })
}

#[tokio::test]
async fn test_admin_create_requires_token() {
    let app = common::create_test_app();
    let server = catalog_server(&app);

    let response = server
        .post("/api/admin/destinations")
        .json(&destination_payload())
        .await;

    response.assert_status_unauthorized();

    // The catalog is untouched.
    let list = server.get("/api/destinations").await.json::<Value>();
    assert_eq!(list["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_admin_create_rejects_wrong_token() {
    let app = common::create_test_app();
    let server = catalog_server(&app);

    let response = server
        .post("/api/admin/destinations")
        .authorization_bearer("not-the-token")
        .json(&destination_payload())
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_admin_create_destination() {
    let app = common::create_test_app();
    let server = catalog_server(&app);

    let response = server
        .post("/api/admin/destinations")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&destination_payload())
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Kyoto");
    assert_eq!(json["category"], "culture");
    assert_eq!(json["is_active"], true);

    let fetched = server
        .get(&format!("/api/destinations/{}", json["id"]))
        .await;
    fetched.assert_status_ok();
}

#[tokio::test]
async fn test_admin_create_validates_payload() {
    let app = common::create_test_app();
    let server = catalog_server(&app);

    let response = server
        .post("/api/admin/destinations")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({
            "name": "",
            "country": "Japan",
            "city": "Kyoto",
            "category": "culture",
            "budget_level": "high"
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_admin_patch_toggles_activity() {
    let app = common::create_test_app();
    let destination =
        common::seed_destination(&app, "Rome", TravelCategory::Historical, BudgetLevel::Medium, true)
            .await;

    let server = catalog_server(&app);

    let response = server
        .patch(&format!("/api/admin/destinations/{}", destination.id))
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "is_active": false }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["is_active"], false);

    // Deactivated destinations disappear from the active listing.
    let active = server
        .get("/api/destinations")
        .add_query_param("active_only", true)
        .await
        .json::<Value>();
    assert_eq!(active["items"].as_array().unwrap().len(), 0);

    let all = server.get("/api/destinations").await.json::<Value>();
    assert_eq!(all["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_admin_patch_clears_budget_bound() {
    let app = common::create_test_app();
    let destination =
        common::seed_destination(&app, "Rome", TravelCategory::Historical, BudgetLevel::Medium, true)
            .await;

    let server = catalog_server(&app);

    let response = server
        .patch(&format!("/api/admin/destinations/{}", destination.id))
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({ "budget_min": null }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert!(json["budget_min"].is_null());
    // An absent field stays untouched.
    assert!(!json["budget_max"].is_null());
}

#[tokio::test]
async fn test_admin_delete_destination() {
    let app = common::create_test_app();
    let destination =
        common::seed_destination(&app, "Rome", TravelCategory::Historical, BudgetLevel::Medium, true)
            .await;

    let server = catalog_server(&app);

    let response = server
        .delete(&format!("/api/admin/destinations/{}", destination.id))
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let missing = server
        .get(&format!("/api/destinations/{}", destination.id))
        .await;
    missing.assert_status_not_found();

    let again = server
        .delete(&format!("/api/admin/destinations/{}", destination.id))
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .await;
    again.assert_status_not_found();
}

#[tokio::test]
async fn test_admin_hotel_requires_existing_destination() {
    let app = common::create_test_app();
    let server = catalog_server(&app);

    let response = server
        .post("/api/admin/hotels")
        .authorization_bearer(common::TEST_ADMIN_TOKEN)
        .json(&json!({
            "destination_id": 999,
            "name": "Nowhere Inn",
            "stars": 3,
            "price_per_night": "80",
            "budget_category": "medium"
        }))
        .await;

    response.assert_status_bad_request();
}
