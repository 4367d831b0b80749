//! The typed client against a live server on an ephemeral port.

use std::sync::Arc;
use std::time::Duration;

use spk_karir::adapters::auth::{JwtAuth, MockPasswordHasher};
use spk_karir::adapters::client::{ApiClient, ClientConfig, ClientError, SearchGate};
use spk_karir::adapters::http::{api_router, AppState};
use spk_karir::adapters::memory::InMemoryStore;
use spk_karir::domain::foundation::Role;
use spk_karir::domain::kriteria::{
    Atribut, JalurSet, Kategori, KriteriaDraft, PenanggungJawab, SumberNilai, TipeInputKind,
};
use spk_karir::domain::periode::ActivationDirection;

async fn spawn_server() -> String {
    let jwt = Arc::new(JwtAuth::new(
        "client-secret",
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

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_router(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(ClientConfig::new(base_url).with_timeout(Duration::from_secs(5))).unwrap()
}

fn likert(kode: &str) -> KriteriaDraft {
    KriteriaDraft {
        kode: kode.to_string(),
        nama: "Minat Seni".to_string(),
        pertanyaan: Some("Saya menikmati kegiatan seni".to_string()),
        tipe_input: TipeInputKind::Likert,
        opsi_pilihan: None,
        atribut: Atribut::Benefit,
        kategori: Kategori::Kuesioner,
        sumber_nilai: SumberNilai::InputSiswa,
        tampil_di_siswa: true,
        penanggung_jawab: PenanggungJawab::Umum,
        skala_maks: 5.0,
        target_jalur: JalurSet::ALL,
        jalur_reverse: JalurSet::default(),
    }
}

#[tokio::test]
async fn login_starts_session_and_logout_ends_it() {
    let base = spawn_server().await;
    let api = client(&base);

    let user = api.login("admin", "password123").await.unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(api.session().is_active());
    assert_eq!(api.me().await.unwrap().username, "admin");

    api.logout();
    assert!(!api.session().is_active());
}

#[tokio::test]
async fn wrong_credentials_keep_session_closed() {
    let base = spawn_server().await;
    let api = client(&base);

    let err = api.login("admin", "salah").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(!api.session().is_active());
}

#[tokio::test]
async fn rejected_token_expires_the_session() {
    let base = spawn_server().await;
    let api = client(&base);
    let user = api.login("gurubk", "password123").await.unwrap();

    api.session().begin("tampered", user);
    let err = api.list_kriteria().await.unwrap_err();
    assert!(matches!(err, ClientError::SessionExpired));
    assert!(!api.session().is_active());
}

#[tokio::test]
async fn backend_message_is_surfaced() {
    let base = spawn_server().await;
    let api = client(&base);
    api.login("admin", "password123").await.unwrap();

    let created = api.create_kriteria(likert("C9")).await.unwrap();
    assert_eq!(created.kode, "C9");

    let err = api.create_kriteria(likert("C9")).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.user_message(), "Kode kriteria sudah digunakan");
}

#[tokio::test]
async fn period_preview_matches_activation() {
    let base = spawn_server().await;
    let api = client(&base);
    api.login("admin", "password123").await.unwrap();

    let rows = api.list_periode().await.unwrap();
    let target = rows
        .iter()
        .find(|row| !row.periode.is_active)
        .unwrap()
        .periode
        .clone();

    let preview = api.activation_preview(target.id).await.unwrap();
    assert_eq!(preview.direction, ActivationDirection::Backward);
    assert!(!preview.promotes);

    let outcome = api.activate_periode(target.id).await.unwrap();
    assert_eq!(outcome.direction, ActivationDirection::Backward);
}

#[tokio::test]
async fn only_the_latest_search_is_shown() {
    let base = spawn_server().await;
    let api = client(&base);
    api.login("admin", "password123").await.unwrap();
    let gate = SearchGate::new(Duration::from_millis(50));

    let (first, second) = tokio::join!(
        api.search_alumni(&gate, "an", 1),
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            api.search_alumni(&gate, "and", 1).await
        }
    );
    assert!(first.unwrap().is_none());
    assert!(second.unwrap().is_some());
}
