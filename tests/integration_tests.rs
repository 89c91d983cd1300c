// Integration tests for Homie Match

use actix_web::{http::StatusCode, test, web, App};
use homie_match::core::{DashboardSummary, Matcher};
use homie_match::models::{ClientStatus, FindMatchesResponse, LoginResponse, PropertyListResponse, Recommendation};
use homie_match::routes::{configure_routes, AppState};
use homie_match::services::{Catalog, ConfiguredIdentityProvider, SessionManager};
use serde_json::json;
use std::sync::Arc;

const SEED: &str = r#"{
    "clients": [
        {
            "id": "c1",
            "name": "Sarah Johnson",
            "email": "sarah@example.com",
            "status": "pending",
            "createdAt": "2024-01-15",
            "budgetRange": { "min": 400000, "max": 600000 },
            "preferences": { "bedrooms": 3, "bathrooms": 2, "location": "Austin", "propertyType": "House" }
        },
        {
            "id": "c2",
            "name": "Michael Chen",
            "email": "m.chen@example.com",
            "status": "closed",
            "createdAt": "2024-01-10",
            "budgetRange": { "min": 300000, "max": 450000 }
        }
    ],
    "properties": [
        { "id": "p1", "address": "1234 Oak Street", "city": "Austin", "state": "TX", "price": 500000, "bedrooms": 3, "bathrooms": 2, "propertyType": "House" },
        { "id": "p2", "address": "567 Pine Avenue", "city": "Austin", "state": "TX", "price": 650000, "bedrooms": 3, "bathrooms": 2, "propertyType": "House" },
        { "id": "p3", "address": "890 Elm Court", "city": "Dallas", "state": "TX", "price": 1000000, "bedrooms": 2, "bathrooms": 1, "propertyType": "Condo" },
        { "id": "p4", "address": "42 Brushy Creek Rd", "city": "Round Rock", "state": "TX", "price": 420000, "bedrooms": 4, "bathrooms": 3, "propertyType": "Townhouse" }
    ]
}"#;

fn create_state() -> AppState {
    AppState {
        catalog: Arc::new(Catalog::from_json(SEED).unwrap()),
        identity: Arc::new(ConfiguredIdentityProvider::new("agent", "s3cret")),
        sessions: Arc::new(SessionManager::new("integration-secret", 3600)),
        matcher: Matcher::default(),
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({ "username": "agent", "password": "s3cret" }))
            .to_request();
        let resp: LoginResponse = test::call_and_read_body_json($app, req).await;
        resp.token
    }};
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_find_matches_against_catalog() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "budgetRange": { "min": 400000, "max": 600000 },
            "preferences": { "bedrooms": 3, "bathrooms": 2, "location": "Austin", "propertyType": "House" }
        }))
        .to_request();

    let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.total_candidates, 4);
    let scores: Vec<(&str, u8)> = resp
        .matches
        .iter()
        .map(|m| (m.property.id.as_str(), m.match_score))
        .collect();
    assert_eq!(scores, vec![("p1", 100), ("p2", 90), ("p4", 71)]);
}

#[actix_web::test]
async fn test_find_matches_with_inline_catalog() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "budgetRange": { "min": 200000, "max": 300000 },
            "preferences": { "bedrooms": 2 },
            "properties": [
                { "id": "x1", "address": "1 Lake Rd", "city": "Waco", "price": 250000, "bedrooms": 2, "bathrooms": 1, "propertyType": "House" }
            ]
        }))
        .to_request();

    let resp: FindMatchesResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.total_candidates, 1);
    // 40 + 20 + 7 + 7 + 5
    assert_eq!(resp.matches[0].match_score, 79);
    assert_eq!(resp.matches[0].property.id, "x1");
}

#[actix_web::test]
async fn test_find_matches_rejects_inverted_budget() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({ "budgetRange": { "min": 600000, "max": 400000 } }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_property_search() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/properties?q=austin&maxPrice=600000")
        .to_request();

    let resp: PropertyListResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.total_results, 1);
    assert_eq!(resp.properties[0].id, "p1");
    assert_eq!(resp.property_types, vec!["House", "Condo", "Townhouse"]);
    assert_eq!(resp.bedroom_options, vec![2, 3, 4]);
}

#[actix_web::test]
async fn test_unknown_property_is_404() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/properties/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_clients_require_session() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/clients").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/v1/clients")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_bad_login_is_rejected() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "username": "agent", "password": "guess" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_client_search_with_session() {
    let app = init_app!();
    let token = login!(&app);

    let req = test::TestRequest::get()
        .uri("/api/v1/clients?status=closed")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_results"], 1);
    assert_eq!(body["clients"][0]["id"], "c2");
}

#[actix_web::test]
async fn test_recommendation_end_to_end() {
    let app = init_app!();
    let token = login!(&app);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "clientId": "c1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let report: Recommendation = test::read_body_json(resp).await;
    assert_eq!(report.client_id, "c1");
    assert_eq!(report.client_name, "Sarah Johnson");
    let ids: Vec<&str> = report.properties.iter().map(|p| p.property.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p4"]);
}

#[actix_web::test]
async fn test_recommendation_with_hand_picked_properties() {
    let app = init_app!();
    let token = login!(&app);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "clientId": "c1", "propertyIds": ["p3", "p1"] }))
        .to_request();
    let report: Recommendation = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = report.properties.iter().map(|p| p.property.id.as_str()).collect();
    assert_eq!(ids, vec!["p3", "p1"]);

    let req = test::TestRequest::post()
        .uri("/api/v1/recommendations")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(json!({ "clientId": "c1", "propertyIds": ["p404"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_property_detail() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/properties/p1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "p1");
    assert_eq!(body["city"], "Austin");
    assert_eq!(body["propertyType"], "House");
}

#[actix_web::test]
async fn test_current_session_returns_agent() {
    let app = init_app!();
    let token = login!(&app);

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/session")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["username"], "agent");

    let req = test::TestRequest::get().uri("/api/v1/auth/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_client_detail() {
    let app = init_app!();
    let token = login!(&app);

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/c1")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "c1");
    assert_eq!(body["name"], "Sarah Johnson");

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/nope")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_client_matches() {
    let app = init_app!();
    let token = login!(&app);

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/c1/matches")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp: FindMatchesResponse = test::read_body_json(resp).await;
    assert_eq!(resp.total_candidates, 4);
    let scores: Vec<(&str, u8)> = resp
        .matches
        .iter()
        .map(|m| (m.property.id.as_str(), m.match_score))
        .collect();
    assert_eq!(scores, vec![("p1", 100), ("p2", 90), ("p4", 71)]);

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/nope/matches")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/v1/clients/c1/matches").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_analytics_summary() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/analytics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = login!(&app);
    let req = test::TestRequest::get()
        .uri("/api/v1/analytics")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let summary: DashboardSummary = test::call_and_read_body_json(&app, req).await;

    assert_eq!(summary.total_clients, 2);
    assert_eq!(summary.total_properties, 4);

    let statuses: Vec<(ClientStatus, usize)> =
        summary.clients_by_status.iter().map(|s| (s.status, s.count)).collect();
    assert_eq!(
        statuses,
        vec![
            (ClientStatus::Pending, 1),
            (ClientStatus::Recommended, 0),
            (ClientStatus::InProgress, 0),
            (ClientStatus::Closed, 1),
        ]
    );

    let ranges: Vec<(&str, usize)> =
        summary.price_ranges.iter().map(|r| (r.range.as_str(), r.count)).collect();
    assert_eq!(
        ranges,
        vec![("<400K", 0), ("400-600K", 2), ("600-800K", 1), ("800K-1M", 0), ("1M+", 1)]
    );

    assert_eq!(summary.total_listing_value, 2_570_000.0);
    assert_eq!(summary.average_price, Some(642_500.0));
    // c1 surfaces 100, 90 and 71; nothing clears the threshold for c2
    assert_eq!(summary.average_match_score, Some(87));
}
