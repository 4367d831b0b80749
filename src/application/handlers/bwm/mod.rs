//! Best-Worst Method handlers: the locked reference, expert submissions and
//! aggregated weights.

mod get_setting;
mod get_weights;
mod input_context;
mod save_setting;
mod submit_comparisons;

pub use get_setting::{BwmSettingView, GetBwmSettingHandler};
pub use get_weights::{AggregatedWeights, GetWeightsHandler};
pub use input_context::{GetInputContextHandler, GetInputContextQuery, InputContext};
pub use save_setting::{SaveBwmSettingCommand, SaveBwmSettingHandler};
pub use submit_comparisons::{
    BwmOptions, SubmissionResult, SubmitComparisonsCommand, SubmitComparisonsHandler,
};
