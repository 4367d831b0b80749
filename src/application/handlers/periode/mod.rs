//! Academic period handlers.

mod activate_periode;
mod create_periode;
mod delete_periode;
mod list_periode;
mod preview_activation;
mod update_periode;

pub use activate_periode::{ActivatePeriodeCommand, ActivatePeriodeHandler, ActivationOutcome};
pub use create_periode::{CreatePeriodeCommand, CreatePeriodeHandler};
pub use delete_periode::{DeletePeriodeCommand, DeletePeriodeHandler};
pub use list_periode::ListPeriodeHandler;
pub use preview_activation::{ActivationPreview, PreviewActivationHandler, PreviewActivationQuery};
pub use update_periode::{UpdatePeriodeCommand, UpdatePeriodeHandler};

use crate::domain::foundation::{DomainError, PeriodeId};
use crate::domain::periode::Periode;
use crate::ports::PeriodeRepository;

pub(crate) async fn find_periode(
    repo: &dyn PeriodeRepository,
    id: PeriodeId,
) -> Result<Periode, DomainError> {
    repo.find(id)
        .await?
        .ok_or_else(|| DomainError::not_found("Periode tidak ditemukan"))
}
