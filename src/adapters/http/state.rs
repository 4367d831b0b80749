//! Shared application state for every route group.
//!
//! Cloned per request; every dependency is an `Arc`. Handlers are built on
//! demand from the ports they need.

use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::memory::InMemoryStore;
use crate::adapters::postgres::{
    PostgresAlumniRepository, PostgresBwmRepository, PostgresHasilRepository,
    PostgresJurusanRepository, PostgresKriteriaRepository, PostgresNilaiSiswaRepository,
    PostgresPeriodeRepository, PostgresSettingsRepository, PostgresUserRepository,
};
use crate::application::handlers::auth::{CurrentUserHandler, LoginHandler};
use crate::application::handlers::bwm::{
    BwmOptions, GetBwmSettingHandler, GetInputContextHandler, GetWeightsHandler,
    SaveBwmSettingHandler, SubmitComparisonsHandler,
};
use crate::application::handlers::dashboard::GetDashboardStatsHandler;
use crate::application::handlers::kriteria::{
    CreateKriteriaHandler, DeleteKriteriaHandler, ListKriteriaHandler, UpdateKriteriaHandler,
};
use crate::application::handlers::monitoring::{ListMonitoringHandler, SaveCatatanHandler};
use crate::application::handlers::periode::{
    ActivatePeriodeHandler, CreatePeriodeHandler, DeletePeriodeHandler, ListPeriodeHandler,
    PreviewActivationHandler, UpdatePeriodeHandler,
};
use crate::application::handlers::promotion::{ExecutePromotionHandler, PromotionSummaryHandler};
use crate::application::handlers::rekomendasi::{
    GetFormHandler, GetResultHandler, SaveAnswersHandler,
};
use crate::application::handlers::sekolah::{
    CreateAlumniHandler, CreateJurusanHandler, DeleteAlumniHandler, DeleteJurusanHandler,
    GetSettingsHandler, GetStaticValuesHandler, ListJurusanHandler, SaveStaticValuesHandler,
    SearchAlumniHandler, UpdateAlumniHandler, UpdateJurusanHandler, UpdateSettingsHandler,
};
use crate::application::handlers::seed::SeedDemoDataHandler;
use crate::application::handlers::simulation::{
    SimulateBwmHandler, SimulateIntegratedHandler, SimulateMooraHandler,
};
use crate::application::handlers::users::{
    CreatePakarHandler, CreateSiswaHandler, DeletePakarHandler, DeleteSiswaHandler,
    ListPakarHandler, ListSiswaHandler, UpdatePakarHandler, UpdateSiswaHandler,
};
use crate::config::DecisionConfig;
use crate::domain::foundation::PageRequest;
use crate::ports::{
    AlumniRepository, BwmRepository, HasilRepository, JurusanRepository, KriteriaRepository,
    NilaiSiswaRepository, PasswordHasher, PeriodeRepository, SessionValidator,
    SettingsRepository, TokenIssuer, UserRepository,
};

/// Dependencies shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub kriteria: Arc<dyn KriteriaRepository>,
    pub bwm: Arc<dyn BwmRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub periode: Arc<dyn PeriodeRepository>,
    pub users: Arc<dyn UserRepository>,
    pub jurusan: Arc<dyn JurusanRepository>,
    pub alumni: Arc<dyn AlumniRepository>,
    pub nilai: Arc<dyn NilaiSiswaRepository>,
    pub hasil: Arc<dyn HasilRepository>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub bwm_options: BwmOptions,
    pub alumni_limit: u32,
    pub page_size: u32,
}

impl AppState {
    /// State where every repository is the same in-memory store.
    pub fn in_memory(
        store: Arc<InMemoryStore>,
        session_validator: Arc<dyn SessionValidator>,
        token_issuer: Arc<dyn TokenIssuer>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let defaults = DecisionConfig::default();
        Self {
            kriteria: store.clone(),
            bwm: store.clone(),
            settings: store.clone(),
            periode: store.clone(),
            users: store.clone(),
            jurusan: store.clone(),
            alumni: store.clone(),
            nilai: store.clone(),
            hasil: store,
            session_validator,
            token_issuer,
            password_hasher,
            bwm_options: BwmOptions::default(),
            alumni_limit: defaults.alumni_limit,
            page_size: defaults.page_size,
        }
    }

    /// State backed by Postgres repositories sharing one pool.
    pub fn postgres(
        pool: PgPool,
        session_validator: Arc<dyn SessionValidator>,
        token_issuer: Arc<dyn TokenIssuer>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let defaults = DecisionConfig::default();
        Self {
            kriteria: Arc::new(PostgresKriteriaRepository::new(pool.clone())),
            bwm: Arc::new(PostgresBwmRepository::new(pool.clone())),
            settings: Arc::new(PostgresSettingsRepository::new(pool.clone())),
            periode: Arc::new(PostgresPeriodeRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            jurusan: Arc::new(PostgresJurusanRepository::new(pool.clone())),
            alumni: Arc::new(PostgresAlumniRepository::new(pool.clone())),
            nilai: Arc::new(PostgresNilaiSiswaRepository::new(pool.clone())),
            hasil: Arc::new(PostgresHasilRepository::new(pool)),
            session_validator,
            token_issuer,
            password_hasher,
            bwm_options: BwmOptions::default(),
            alumni_limit: defaults.alumni_limit,
            page_size: defaults.page_size,
        }
    }

    /// Applies the decision section of the configuration.
    pub fn with_decision(mut self, decision: &DecisionConfig) -> Self {
        self.bwm_options = BwmOptions {
            method: decision.method(),
            consistency_threshold: decision.consistency_threshold,
            reject_inconsistent: decision.reject_inconsistent,
        };
        self.alumni_limit = decision.alumni_limit;
        self.page_size = decision.page_size;
        self
    }

    pub fn page(&self, page: Option<u32>) -> PageRequest {
        PageRequest::new(page, self.page_size)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Auth
    // ════════════════════════════════════════════════════════════════════════════

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.users.clone(),
            self.password_hasher.clone(),
            self.token_issuer.clone(),
        )
    }

    pub fn current_user_handler(&self) -> CurrentUserHandler {
        CurrentUserHandler::new(self.users.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Kriteria & BWM
    // ════════════════════════════════════════════════════════════════════════════

    pub fn list_kriteria_handler(&self) -> ListKriteriaHandler {
        ListKriteriaHandler::new(self.kriteria.clone())
    }

    pub fn create_kriteria_handler(&self) -> CreateKriteriaHandler {
        CreateKriteriaHandler::new(self.kriteria.clone())
    }

    pub fn update_kriteria_handler(&self) -> UpdateKriteriaHandler {
        UpdateKriteriaHandler::new(self.kriteria.clone())
    }

    pub fn delete_kriteria_handler(&self) -> DeleteKriteriaHandler {
        DeleteKriteriaHandler::new(self.kriteria.clone())
    }

    pub fn get_bwm_setting_handler(&self) -> GetBwmSettingHandler {
        GetBwmSettingHandler::new(self.kriteria.clone(), self.settings.clone())
    }

    pub fn save_bwm_setting_handler(&self) -> SaveBwmSettingHandler {
        SaveBwmSettingHandler::new(self.kriteria.clone(), self.settings.clone())
    }

    pub fn input_context_handler(&self) -> GetInputContextHandler {
        GetInputContextHandler::new(self.kriteria.clone(), self.settings.clone(), self.bwm.clone())
    }

    pub fn submit_comparisons_handler(&self) -> SubmitComparisonsHandler {
        SubmitComparisonsHandler::new(
            self.kriteria.clone(),
            self.settings.clone(),
            self.bwm.clone(),
            self.bwm_options,
        )
    }

    pub fn get_weights_handler(&self) -> GetWeightsHandler {
        GetWeightsHandler::new(self.kriteria.clone(), self.bwm.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rekomendasi, monitoring & dashboard
    // ════════════════════════════════════════════════════════════════════════════

    pub fn get_form_handler(&self) -> GetFormHandler {
        GetFormHandler::new(self.kriteria.clone(), self.nilai.clone())
    }

    pub fn save_answers_handler(&self) -> SaveAnswersHandler {
        SaveAnswersHandler::new(self.kriteria.clone(), self.nilai.clone())
    }

    pub fn get_result_handler(&self) -> GetResultHandler {
        GetResultHandler::new(
            self.kriteria.clone(),
            self.bwm.clone(),
            self.nilai.clone(),
            self.hasil.clone(),
            self.periode.clone(),
            self.users.clone(),
            self.jurusan.clone(),
            self.alumni.clone(),
            self.alumni_limit,
        )
    }

    pub fn list_monitoring_handler(&self) -> ListMonitoringHandler {
        ListMonitoringHandler::new(self.users.clone(), self.hasil.clone(), self.periode.clone())
    }

    pub fn save_catatan_handler(&self) -> SaveCatatanHandler {
        SaveCatatanHandler::new(self.hasil.clone())
    }

    pub fn dashboard_stats_handler(&self) -> GetDashboardStatsHandler {
        GetDashboardStatsHandler::new(
            self.users.clone(),
            self.hasil.clone(),
            self.periode.clone(),
            self.jurusan.clone(),
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Periode & promotion
    // ════════════════════════════════════════════════════════════════════════════

    pub fn list_periode_handler(&self) -> ListPeriodeHandler {
        ListPeriodeHandler::new(self.periode.clone())
    }

    pub fn create_periode_handler(&self) -> CreatePeriodeHandler {
        CreatePeriodeHandler::new(self.periode.clone())
    }

    pub fn update_periode_handler(&self) -> UpdatePeriodeHandler {
        UpdatePeriodeHandler::new(self.periode.clone())
    }

    pub fn delete_periode_handler(&self) -> DeletePeriodeHandler {
        DeletePeriodeHandler::new(self.periode.clone())
    }

    pub fn preview_activation_handler(&self) -> PreviewActivationHandler {
        PreviewActivationHandler::new(self.periode.clone())
    }

    pub fn activate_periode_handler(&self) -> ActivatePeriodeHandler {
        ActivatePeriodeHandler::new(self.periode.clone())
    }

    pub fn promotion_summary_handler(&self) -> PromotionSummaryHandler {
        PromotionSummaryHandler::new(self.users.clone())
    }

    pub fn execute_promotion_handler(&self) -> ExecutePromotionHandler {
        ExecutePromotionHandler::new(self.users.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Sekolah
    // ════════════════════════════════════════════════════════════════════════════

    pub fn get_settings_handler(&self) -> GetSettingsHandler {
        GetSettingsHandler::new(self.settings.clone())
    }

    pub fn update_settings_handler(&self) -> UpdateSettingsHandler {
        UpdateSettingsHandler::new(self.settings.clone())
    }

    pub fn list_jurusan_handler(&self) -> ListJurusanHandler {
        ListJurusanHandler::new(self.jurusan.clone())
    }

    pub fn create_jurusan_handler(&self) -> CreateJurusanHandler {
        CreateJurusanHandler::new(self.jurusan.clone())
    }

    pub fn update_jurusan_handler(&self) -> UpdateJurusanHandler {
        UpdateJurusanHandler::new(self.jurusan.clone())
    }

    pub fn delete_jurusan_handler(&self) -> DeleteJurusanHandler {
        DeleteJurusanHandler::new(self.jurusan.clone())
    }

    pub fn get_static_values_handler(&self) -> GetStaticValuesHandler {
        GetStaticValuesHandler::new(self.jurusan.clone(), self.kriteria.clone())
    }

    pub fn save_static_values_handler(&self) -> SaveStaticValuesHandler {
        SaveStaticValuesHandler::new(self.jurusan.clone(), self.kriteria.clone())
    }

    pub fn search_alumni_handler(&self) -> SearchAlumniHandler {
        SearchAlumniHandler::new(self.alumni.clone())
    }

    pub fn create_alumni_handler(&self) -> CreateAlumniHandler {
        CreateAlumniHandler::new(self.alumni.clone())
    }

    pub fn update_alumni_handler(&self) -> UpdateAlumniHandler {
        UpdateAlumniHandler::new(self.alumni.clone())
    }

    pub fn delete_alumni_handler(&self) -> DeleteAlumniHandler {
        DeleteAlumniHandler::new(self.alumni.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Users
    // ════════════════════════════════════════════════════════════════════════════

    pub fn list_siswa_handler(&self) -> ListSiswaHandler {
        ListSiswaHandler::new(self.users.clone())
    }

    pub fn create_siswa_handler(&self) -> CreateSiswaHandler {
        CreateSiswaHandler::new(
            self.users.clone(),
            self.periode.clone(),
            self.password_hasher.clone(),
        )
    }

    pub fn update_siswa_handler(&self) -> UpdateSiswaHandler {
        UpdateSiswaHandler::new(
            self.users.clone(),
            self.periode.clone(),
            self.password_hasher.clone(),
        )
    }

    pub fn delete_siswa_handler(&self) -> DeleteSiswaHandler {
        DeleteSiswaHandler::new(self.users.clone())
    }

    pub fn list_pakar_handler(&self) -> ListPakarHandler {
        ListPakarHandler::new(self.users.clone())
    }

    pub fn create_pakar_handler(&self) -> CreatePakarHandler {
        CreatePakarHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn update_pakar_handler(&self) -> UpdatePakarHandler {
        UpdatePakarHandler::new(self.users.clone(), self.password_hasher.clone())
    }

    pub fn delete_pakar_handler(&self) -> DeletePakarHandler {
        DeletePakarHandler::new(self.users.clone())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Simulation
    // ════════════════════════════════════════════════════════════════════════════

    pub fn simulate_bwm_handler(&self) -> SimulateBwmHandler {
        SimulateBwmHandler::new(self.bwm_options)
    }

    pub fn simulate_moora_handler(&self) -> SimulateMooraHandler {
        SimulateMooraHandler::new(self.kriteria.clone(), self.bwm.clone())
    }

    pub fn simulate_integrated_handler(&self) -> SimulateIntegratedHandler {
        SimulateIntegratedHandler::new(self.bwm_options)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Seeding
    // ════════════════════════════════════════════════════════════════════════════

    pub fn seed_handler(&self) -> SeedDemoDataHandler {
        SeedDemoDataHandler::new(
            self.jurusan.clone(),
            self.kriteria.clone(),
            self.users.clone(),
            self.periode.clone(),
            self.settings.clone(),
            self.password_hasher.clone(),
        )
    }
}
