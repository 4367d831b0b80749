//! Typed API client used by the screens.
//!
//! - `api` - request methods over `reqwest`
//! - `session` - the signed-in session
//! - `search` - debounced search with stale-response suppression
//! - `render` - display helpers

mod api;
mod dto;
mod error;
mod render;
mod search;
mod session;

pub use api::{ApiClient, ClientConfig};
pub use dto::{
    ActivationPreviewView, ActivationView, AlumniBriefView, BwmSettingView, HasilView,
    InputContextView, KriteriaPayload, KriteriaView, PagedView, PeriodeRow, ResultView,
    SavedSettingView, StatusView, SubmissionView, WeightsView,
};
pub use error::{ClientError, SESSION_EXPIRED_MESSAGE, TRANSPORT_MESSAGE};
pub use render::{activation_confirmation, score_bars, show_pagination, ScoreBar};
pub use search::{SearchGate, SearchTicket, DEFAULT_DEBOUNCE};
pub use session::{Session, SessionStore};
