//! ExecutePromotionHandler - moves every student up one grade.
//!
//! Grade 12 students become alumni records; the repository applies the
//! whole batch atomically.

use chrono::Datelike;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::periode::PromotionReport;
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutePromotionCommand {
    /// Graduation year recorded on new alumni; defaults to this year.
    pub batch: Option<i32>,
}

pub struct ExecutePromotionHandler {
    users: Arc<dyn UserRepository>,
}

impl ExecutePromotionHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: ExecutePromotionCommand) -> Result<PromotionReport, DomainError> {
        let batch = cmd.batch.unwrap_or_else(|| chrono::Utc::now().year());
        let report = self.users.promote_grades(batch).await?;
        tracing::info!(
            batch,
            lulus = report.lulus,
            naik_ke_12 = report.naik_ke_12,
            naik_ke_11 = report.naik_ke_11,
            "grade promotion executed"
        );
        Ok(report)
    }
}
