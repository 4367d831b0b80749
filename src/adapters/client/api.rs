//! Typed client for the REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ClientConfig::new("http://localhost:8080")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = ApiClient::new(config)?;
//! client.login("admin", "password").await?;
//! ```
//!
//! # Errors
//!
//! Inputs the domain can check are validated before any request is sent.
//! A 401 on an authenticated call clears the session. Nothing is retried.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::domain::bwm::{BwmReference, ComparisonSet};
use crate::domain::foundation::{HasilId, KriteriaId, PeriodeId};
use crate::domain::kriteria::KriteriaDraft;
use crate::domain::rekomendasi::FormField;
use crate::domain::sekolah::Alumni;
use crate::domain::users::User;

use super::dto::{
    ActivationPreviewView, ActivationView, AnswersBody, BwmSettingView, ComparisonBody, DataView,
    ErrorBody, FormView, InputContextView, KriteriaPayload, KriteriaView, ListView, LoginBody,
    LoginView, MessageView, PagedView, PeriodeListView, PeriodeRow, ResultView, SavedSettingView,
    SettingBody, StatusView, SubmissionView, WeightsView,
};
use super::error::ClientError;
use super::search::SearchGate;
use super::session::SessionStore;

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. "http://localhost:8080".
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Whether a 401 means "session expired" or "wrong credentials".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Auth {
    Session,
    Login,
}

pub struct ApiClient {
    config: ClientConfig,
    client: Client,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Self::with_session(config, Arc::new(SessionStore::new()))
    }

    /// Shares an existing session store, e.g. between screens.
    pub fn with_session(
        config: ClientConfig,
        session: Arc<SessionStore>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            client,
            session,
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        auth: Auth,
    ) -> Result<T, ClientError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed");
            ClientError::transport(e)
        })?;
        let response = self.handle_response_status(response, auth).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::warn!(error = %e, "unreadable response body");
            ClientError::transport(e)
        })
    }

    async fn handle_response_status(
        &self,
        response: Response,
        auth: Auth,
    ) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 401 && auth == Auth::Session {
            if self.session.end() {
                tracing::info!("session rejected by server, signed out");
            }
            return Err(ClientError::SessionExpired);
        }

        let body = response.text().await.unwrap_or_default();
        let msg = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.msg)
            .unwrap_or_else(|| format!("Terjadi kesalahan pada server ({})", status.as_u16()));
        Err(ClientError::Backend {
            status: status.as_u16(),
            msg,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.request(Method::GET, path), Auth::Session)
            .await
    }

    // ────────────────────────────────────────────────────────────────────────
    // Auth
    // ────────────────────────────────────────────────────────────────────────

    /// Signs in with email, username or NISN and starts a session.
    pub async fn login(&self, login_id: &str, password: &str) -> Result<User, ClientError> {
        if login_id.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Login ID dan password wajib diisi".to_string(),
            ));
        }
        let builder = self
            .client
            .post(self.url("/auth/login"))
            .json(&LoginBody { login_id, password });
        let view: LoginView = self.send(builder, Auth::Login).await?;
        self.session.begin(view.access_token, view.user.clone());
        Ok(view.user)
    }

    pub async fn me(&self) -> Result<User, ClientError> {
        self.get("/auth/me").await
    }

    /// Tokens are stateless, so signing out only drops the local session.
    pub fn logout(&self) {
        self.session.end();
    }

    pub async fn status(&self) -> Result<StatusView, ClientError> {
        self.get("/api/status").await
    }

    // ────────────────────────────────────────────────────────────────────────
    // Criteria
    // ────────────────────────────────────────────────────────────────────────

    pub async fn list_kriteria(&self) -> Result<Vec<KriteriaView>, ClientError> {
        let list: ListView<KriteriaView> = self.get("/kriteria").await?;
        Ok(list.data)
    }

    pub async fn create_kriteria(&self, draft: KriteriaDraft) -> Result<KriteriaView, ClientError> {
        let payload = KriteriaPayload::from(draft.validate()?);
        let builder = self.request(Method::POST, "/kriteria").json(&payload);
        let view: DataView<KriteriaView> = self.send(builder, Auth::Session).await?;
        Ok(view.data)
    }

    pub async fn update_kriteria(
        &self,
        id: KriteriaId,
        draft: KriteriaDraft,
    ) -> Result<KriteriaView, ClientError> {
        let payload = KriteriaPayload::from(draft.validate()?);
        let builder = self
            .request(Method::PUT, &format!("/kriteria/{}", id))
            .json(&payload);
        let view: DataView<KriteriaView> = self.send(builder, Auth::Session).await?;
        Ok(view.data)
    }

    pub async fn delete_kriteria(&self, id: KriteriaId) -> Result<String, ClientError> {
        let builder = self.request(Method::DELETE, &format!("/kriteria/{}", id));
        let view: MessageView = self.send(builder, Auth::Session).await?;
        Ok(view.msg)
    }

    // ────────────────────────────────────────────────────────────────────────
    // BWM
    // ────────────────────────────────────────────────────────────────────────

    pub async fn bwm_setting(&self) -> Result<BwmSettingView, ClientError> {
        self.get("/bwm/admin/setting").await
    }

    /// Locks the reference pair. Best and worst must differ.
    pub async fn save_bwm_setting(
        &self,
        best_id: KriteriaId,
        worst_id: KriteriaId,
    ) -> Result<SavedSettingView, ClientError> {
        let reference = BwmReference::new(best_id, worst_id)?;
        let builder = self
            .request(Method::POST, "/bwm/admin/setting")
            .json(&SettingBody {
                best_id: reference.best(),
                worst_id: reference.worst(),
            });
        self.send(builder, Auth::Session).await
    }

    pub async fn input_context(&self) -> Result<InputContextView, ClientError> {
        self.get("/bwm/input-context").await
    }

    /// Submits the expert's comparisons once every cell of `set` is filled
    /// in for the reference and criteria in `context`.
    pub async fn submit_comparisons(
        &self,
        context: &InputContextView,
        set: &ComparisonSet,
    ) -> Result<SubmissionView, ClientError> {
        context.check(set)?;
        let builder = self
            .request(Method::POST, "/bwm/save")
            .json(&ComparisonBody::from(set));
        self.send(builder, Auth::Session).await
    }

    pub async fn weights(&self) -> Result<WeightsView, ClientError> {
        self.get("/bwm/weights").await
    }

    // ────────────────────────────────────────────────────────────────────────
    // Student
    // ────────────────────────────────────────────────────────────────────────

    pub async fn form(&self) -> Result<Vec<FormField>, ClientError> {
        let form: FormView = self.get("/siswa/form").await?;
        Ok(form.data)
    }

    pub async fn save_answers(
        &self,
        values: &BTreeMap<KriteriaId, f64>,
    ) -> Result<String, ClientError> {
        if values.is_empty() {
            return Err(ClientError::Validation(
                "Isi minimal satu jawaban".to_string(),
            ));
        }
        let builder = self
            .request(Method::POST, "/siswa/save")
            .json(&AnswersBody { values });
        let view: MessageView = self.send(builder, Auth::Session).await?;
        Ok(view.msg)
    }

    /// The student's latest result, or a specific one by id.
    pub async fn result(&self, id: Option<HasilId>) -> Result<ResultView, ClientError> {
        let mut builder = self.request(Method::GET, "/moora/result");
        if let Some(id) = id {
            builder = builder.query(&[("id", id.value())]);
        }
        self.send(builder, Auth::Session).await
    }

    // ────────────────────────────────────────────────────────────────────────
    // Periods
    // ────────────────────────────────────────────────────────────────────────

    pub async fn list_periode(&self) -> Result<Vec<PeriodeRow>, ClientError> {
        let view: PeriodeListView = self.get("/periode").await?;
        Ok(view.periodes)
    }

    pub async fn activation_preview(
        &self,
        id: PeriodeId,
    ) -> Result<ActivationPreviewView, ClientError> {
        self.get(&format!("/periode/{}/activation-preview", id))
            .await
    }

    pub async fn activate_periode(&self, id: PeriodeId) -> Result<ActivationView, ClientError> {
        let builder = self.request(Method::POST, &format!("/periode/{}/activate", id));
        self.send(builder, Auth::Session).await
    }

    // ────────────────────────────────────────────────────────────────────────
    // Alumni
    // ────────────────────────────────────────────────────────────────────────

    pub async fn alumni_page(
        &self,
        search: &str,
        page: u32,
    ) -> Result<PagedView<Alumni>, ClientError> {
        let builder = self
            .request(Method::GET, "/alumni")
            .query(&[("search", search.trim().to_string()), ("page", page.to_string())]);
        self.send(builder, Auth::Session).await
    }

    /// Debounced alumni search. `Ok(None)` means a newer search took over
    /// and this result should not be shown.
    pub async fn search_alumni(
        &self,
        gate: &SearchGate,
        search: &str,
        page: u32,
    ) -> Result<Option<PagedView<Alumni>>, ClientError> {
        gate.run(|| self.alumni_page(search, page))
            .await
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kriteria::{
        Atribut, JalurSet, Kategori, OpsiPilihan, PenanggungJawab, SumberNilai, TipeInputKind,
    };

    /// Nothing listens here; any request that goes out fails as transport.
    fn offline_client() -> ApiClient {
        ApiClient::new(ClientConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_millis(200)))
            .unwrap()
    }

    fn draft() -> KriteriaDraft {
        KriteriaDraft {
            kode: "C4".to_string(),
            nama: "Minat".to_string(),
            pertanyaan: None,
            tipe_input: TipeInputKind::Select,
            opsi_pilihan: Some(vec![OpsiPilihan::new(9, "Sangat tinggi")]),
            atribut: Atribut::Benefit,
            kategori: Kategori::Kuesioner,
            sumber_nilai: SumberNilai::InputSiswa,
            tampil_di_siswa: true,
            penanggung_jawab: PenanggungJawab::Gurubk,
            skala_maks: 5.0,
            target_jalur: JalurSet::ALL,
            jalur_reverse: JalurSet::EMPTY,
        }
    }

    #[tokio::test]
    async fn invalid_criterion_is_rejected_before_sending() {
        let err = offline_client().create_kriteria(draft()).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn same_best_and_worst_is_rejected_before_sending() {
        let k = KriteriaId::new(1);
        let err = offline_client().save_bwm_setting(k, k).await.unwrap_err();
        assert_eq!(
            err,
            ClientError::Validation("Kriteria terbaik dan terburuk tidak boleh sama".to_string())
        );
    }

    #[tokio::test]
    async fn blank_login_is_rejected_before_sending() {
        let err = offline_client().login("  ", "secret").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let err = offline_client().status().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.url("/kriteria"), "http://localhost:8080/kriteria");
    }
}
