//! End-to-end tests of the REST API over the seeded in-memory store.
//!
//! Requests go through the real router, bearer middleware and JWT signer;
//! only persistence and password hashing are swapped for test doubles.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use spk_karir::adapters::auth::{JwtAuth, MockPasswordHasher};
use spk_karir::adapters::http::{api_router, AppState};
use spk_karir::adapters::memory::InMemoryStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn seeded_app() -> Router {
    let jwt = Arc::new(JwtAuth::new(
        "integration-secret",
        "spk-karir",
        chrono::Duration::hours(1),
    ));
    let state = AppState::in_memory(
        Arc::new(InMemoryStore::new()),
        jwt.clone(),
        jwt,
        Arc::new(MockPasswordHasher),
    );
    state.seed_handler().handle().await.unwrap();
    api_router(state)
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn login(app: &Router, login_id: &str, password: &str) -> String {
    let (status, body) = call(
        app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "login_id": login_id, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["access_token"].as_str().unwrap().to_string()
}

/// Criterion ids by code, from the admin's list.
async fn kriteria_ids(app: &Router, token: &str) -> Vec<(String, i64)> {
    let (status, body) = call(app, Method::GET, "/kriteria", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| {
            (
                k["kode"].as_str().unwrap().to_string(),
                k["id"].as_i64().unwrap(),
            )
        })
        .collect()
}

fn id_of(ids: &[(String, i64)], kode: &str) -> i64 {
    ids.iter().find(|(k, _)| k == kode).unwrap().1
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn login_returns_token_and_me_resolves_it() {
    let app = seeded_app().await;
    let token = login(&app, "admin", "password123").await;

    let (status, body) = call(&app, Method::GET, "/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "admin");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = seeded_app().await;
    let (status, body) = call(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "login_id": "admin", "password": "salah" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["msg"].is_string());
}

#[tokio::test]
async fn protected_route_requires_token() {
    let app = seeded_app().await;
    let (status, _) = call(&app, Method::GET, "/kriteria", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn forged_token_is_rejected() {
    let app = seeded_app().await;
    let (status, _) = call(&app, Method::GET, "/kriteria", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Criteria
// =============================================================================

#[tokio::test]
async fn admin_creates_criterion_and_duplicate_code_conflicts() {
    let app = seeded_app().await;
    let token = login(&app, "admin", "password123").await;
    let body = json!({
        "kode": "C9",
        "nama": "Minat Seni",
        "pertanyaan": "Saya tertarik pada bidang seni dan desain",
        "tipe_input": "likert"
    });

    let (status, created) =
        call(&app, Method::POST, "/kriteria", Some(&token), Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["msg"], "Kriteria berhasil ditambahkan");
    assert_eq!(created["data"]["kode"], "C9");

    let mut duplicate = body;
    duplicate["kode"] = json!("C1");
    let (status, err) = call(&app, Method::POST, "/kriteria", Some(&token), Some(duplicate)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["msg"], "Kode kriteria sudah digunakan");
}

#[tokio::test]
async fn student_cannot_manage_criteria() {
    let app = seeded_app().await;
    let token = login(&app, "siswa10", "123456").await;
    let (status, _) = call(
        &app,
        Method::POST,
        "/kriteria",
        Some(&token),
        Some(json!({ "kode": "C9", "nama": "X", "tipe_input": "likert" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn criteria_list_is_sorted_by_code() {
    let app = seeded_app().await;
    let token = login(&app, "gurubk", "password123").await;
    let codes: Vec<String> = kriteria_ids(&app, &token)
        .await
        .into_iter()
        .map(|(kode, _)| kode)
        .collect();
    assert_eq!(codes, vec!["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8"]);
}

// =============================================================================
// BWM
// =============================================================================

#[tokio::test]
async fn expert_submission_before_reference_is_rejected() {
    let app = seeded_app().await;
    let token = login(&app, "gurubk", "password123").await;
    let (status, err) = call(
        &app,
        Method::POST,
        "/bwm/save",
        Some(&token),
        Some(json!({ "best_to_others": {}, "others_to_worst": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["msg"].as_str().unwrap().contains("Admin belum menetapkan"));
}

#[tokio::test]
async fn consistent_submission_produces_normalized_weights() {
    let app = seeded_app().await;
    let admin = login(&app, "admin", "password123").await;
    let ids = kriteria_ids(&app, &admin).await;
    let best = id_of(&ids, "C1");
    let worst = id_of(&ids, "C8");

    let (status, saved) = call(
        &app,
        Method::POST,
        "/bwm/admin/setting",
        Some(&admin),
        Some(json!({ "best_id": best, "worst_id": worst })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["best_id"], best);

    // a_Bj * a_jW = a_BW for every j keeps the comparisons fully consistent
    let mut best_to_others = serde_json::Map::new();
    let mut others_to_worst = serde_json::Map::new();
    for (_, id) in &ids {
        let (bo, ow) = if *id == best {
            (1, 4)
        } else if *id == worst {
            (4, 1)
        } else {
            (2, 2)
        };
        best_to_others.insert(id.to_string(), json!(bo));
        others_to_worst.insert(id.to_string(), json!(ow));
    }

    let pakar = login(&app, "gurubk", "password123").await;
    let (status, result) = call(
        &app,
        Method::POST,
        "/bwm/save",
        Some(&pakar),
        Some(json!({
            "best_to_others": best_to_others,
            "others_to_worst": others_to_worst
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "submission failed: {}", result);
    assert_eq!(result["konsisten"], true);

    let bobot = result["bobot"].as_object().unwrap();
    assert_eq!(bobot.len(), ids.len());
    let total: f64 = bobot.values().map(|w| w.as_f64().unwrap()).sum();
    // each weight is rounded to 4 places, so the sum drifts by at most half a unit per weight
    assert!((total - 1.0).abs() <= bobot.len() as f64 * 5e-5);
    assert!(bobot["C1"].as_f64().unwrap() > bobot["C8"].as_f64().unwrap());

    let (status, weights) = call(&app, Method::GET, "/bwm/weights", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(weights["pakar_count"], 1);
}

#[tokio::test]
async fn incomplete_submission_is_rejected() {
    let app = seeded_app().await;
    let admin = login(&app, "admin", "password123").await;
    let ids = kriteria_ids(&app, &admin).await;
    let best = id_of(&ids, "C1");
    let worst = id_of(&ids, "C8");
    call(
        &app,
        Method::POST,
        "/bwm/admin/setting",
        Some(&admin),
        Some(json!({ "best_id": best, "worst_id": worst })),
    )
    .await;

    let pakar = login(&app, "gurubk", "password123").await;
    let (status, _) = call(
        &app,
        Method::POST,
        "/bwm/save",
        Some(&pakar),
        Some(json!({
            "best_to_others": { best.to_string(): 1, worst.to_string(): 4 },
            "others_to_worst": { best.to_string(): 4, worst.to_string(): 1 }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn student_cannot_open_expert_input() {
    let app = seeded_app().await;
    let token = login(&app, "siswa10", "123456").await;
    let (status, _) = call(&app, Method::GET, "/bwm/input-context", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Questionnaire
// =============================================================================

#[tokio::test]
async fn student_form_hides_static_criteria() {
    let app = seeded_app().await;
    let token = login(&app, "siswa10", "123456").await;
    let (status, form) = call(&app, Method::GET, "/siswa/form", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let codes: Vec<&str> = form["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["kode"].as_str().unwrap())
        .collect();
    assert!(!codes.is_empty());
    assert!(!codes.contains(&"C6"));
}

#[tokio::test]
async fn empty_answers_are_rejected() {
    let app = seeded_app().await;
    let token = login(&app, "siswa10", "123456").await;
    let (status, err) = call(
        &app,
        Method::POST,
        "/siswa/save",
        Some(&token),
        Some(json!({ "values": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["msg"], "Tidak ada data yang dikirim");
}

#[tokio::test]
async fn saved_answers_yield_a_recommendation() {
    let app = seeded_app().await;
    let admin = login(&app, "admin", "password123").await;
    let ids = kriteria_ids(&app, &admin).await;

    let token = login(&app, "siswa10", "123456").await;
    let (status, form) = call(&app, Method::GET, "/siswa/form", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let mut values = serde_json::Map::new();
    for field in form["data"].as_array().unwrap() {
        let answer = match field["tipe_input"].as_str().unwrap() {
            "number" => 85,
            _ => 4,
        };
        values.insert(field["id"].as_i64().unwrap().to_string(), json!(answer));
    }
    let (status, saved) = call(
        &app,
        Method::POST,
        "/siswa/save",
        Some(&token),
        Some(json!({ "values": values })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "save failed: {}", saved);
    assert_eq!(saved["msg"], "Data berhasil disimpan!");

    let (status, result) = call(&app, Method::GET, "/moora/result", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK, "result failed: {}", result);
    let keputusan = result["hasil"]["keputusan"].as_str().unwrap();
    assert!(["Melanjutkan Studi", "Bekerja", "Berwirausaha"].contains(&keputusan));
    assert!(result["hasil"]["skor"].is_object());
    assert!(ids.len() >= result["hasil"]["riwayat_jawaban"].as_array().unwrap().len());
}

#[tokio::test]
async fn result_before_answering_is_not_found() {
    let app = seeded_app().await;
    let token = login(&app, "siswa12", "123456").await;
    let (status, _) = call(&app, Method::GET, "/moora/result", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Periods
// =============================================================================

#[tokio::test]
async fn backward_activation_switches_without_promotion() {
    let app = seeded_app().await;
    let token = login(&app, "admin", "password123").await;

    let (status, list) = call(&app, Method::GET, "/periode", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let periodes = list["periodes"].as_array().unwrap();
    assert_eq!(periodes.len(), 3);
    let active = periodes.iter().find(|p| p["is_active"] == true).unwrap();
    assert_eq!(active["nama_periode"], "2025/2026 Ganjil");
    let earlier = periodes
        .iter()
        .find(|p| p["nama_periode"] == "2024/2025 Genap")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let (status, preview) = call(
        &app,
        Method::GET,
        &format!("/periode/{}/activation-preview", earlier),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(preview["direction"], "backward");
    assert_eq!(preview["promotes"], false);

    let (status, outcome) = call(
        &app,
        Method::POST,
        &format!("/periode/{}/activate", earlier),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["direction"], "backward");
    assert_eq!(outcome["promoted"], 0);

    let (_, list) = call(&app, Method::GET, "/periode", Some(&token), None).await;
    let active: Vec<&Value> = list["periodes"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["is_active"] == true)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["id"], earlier);
}

#[tokio::test]
async fn expert_cannot_activate_periods() {
    let app = seeded_app().await;
    let token = login(&app, "kaprodi", "password123").await;
    let (status, _) = call(&app, Method::POST, "/periode/1/activate", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn status_is_public() {
    let app = seeded_app().await;
    let (status, body) = call(&app, Method::GET, "/api/status", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
