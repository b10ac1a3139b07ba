//! Artisan roster and status history over HTTP.

mod common;

use axum::http::{Method, StatusCode};
use chrono::Utc;
use common::{response_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn lists_seeded_artisans() {
    let app = TestApp::new().await;
    let response = app.request(Method::GET, "/api/artisans", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let artisans = body["data"].as_array().expect("artisan list");
    assert_eq!(artisans.len(), 2);
    assert_eq!(artisans[0]["id"], "ART001");
    assert_eq!(artisans[1]["status"], "On Break");
}

#[tokio::test]
async fn status_update_rolls_history() {
    let app = TestApp::new().await;
    let today = Utc::now().date_naive().to_string();

    let response = app
        .request(
            Method::PUT,
            "/api/artisans/ART001/status",
            Some(json!({"status": "On Leave", "notes": "Family function"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let artisan = &body["data"];
    assert_eq!(artisan["status"], "On Leave");

    let history = artisan["statusHistory"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["endDate"], today.as_str());
    assert_eq!(history[1]["status"], "On Leave");
    assert_eq!(history[1]["startDate"], today.as_str());
    assert_eq!(history[1]["notes"], "Family function");
    assert!(history[1].get("endDate").is_none());
}

#[tokio::test]
async fn toggling_twice_keeps_every_entry() {
    let app = TestApp::new().await;
    for status in ["Active", "On Break"] {
        let response = app
            .request(
                Method::PUT,
                "/api/artisans/ART002/status",
                Some(json!({ "status": status })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.request(Method::GET, "/api/artisans/ART002", None).await;
    let body = response_json(response).await;
    let history = body["data"]["statusHistory"].as_array().unwrap();
    assert_eq!(history.len(), 4);
    let open: Vec<_> = history
        .iter()
        .filter(|entry| entry.get("endDate").is_none())
        .collect();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0]["status"], "On Break");
}

#[tokio::test]
async fn unknown_artisan_is_not_found() {
    let app = TestApp::new().await;
    let response = app
        .request(
            Method::PUT,
            "/api/artisans/ART999/status",
            Some(json!({"status": "Active"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.request(Method::GET, "/api/artisans/ART999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let app = TestApp::new().await;
    let response = app
        .request(
            Method::PUT,
            "/api/artisans/ART001/status",
            Some(json!({"status": "Retired"})),
        )
        .await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn new_artisan_form_is_acknowledged() {
    let app = TestApp::new().await;
    let form = json!({
        "name": "Suresh Patel",
        "phone": "+91 98765 11111",
        "address": "Zaveri Bazaar, Mumbai",
        "specialization": "Stone Setting",
        "experience": "8 years",
        "idProof": "Aadhar",
        "idNumber": "1234 5678 9012",
        "bankAccount": "001122334455",
        "ifscCode": "SBIN0001234",
        "emergencyContact": "+91 98765 22222",
        "joiningDate": "2024-03-01",
        "skills": ["Stone Setting", "Polishing"]
    });

    let response = app.request(Method::POST, "/api/artisans", Some(form)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["data"]["redirect_to"], "/artisans");

    let response = app.request(Method::GET, "/api/artisans", None).await;
    let body = response_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2, "form is not stored");
}

#[tokio::test]
async fn incomplete_artisan_form_is_bad_request() {
    let app = TestApp::new().await;
    let response = app
        .request(Method::POST, "/api/artisans", Some(json!({"name": "Suresh"})))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
