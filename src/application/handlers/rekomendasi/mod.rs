//! Student questionnaire and recommendation result handlers.

mod get_form;
mod get_result;
mod save_answers;

pub use get_form::{GetFormHandler, GetFormQuery};
pub use get_result::{GetResultHandler, GetResultQuery, ResultView};
pub use save_answers::{SaveAnswersCommand, SaveAnswersHandler};
