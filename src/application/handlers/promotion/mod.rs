//! School-wide grade promotion.

mod execute_promotion;
mod promotion_summary;

pub use execute_promotion::{ExecutePromotionCommand, ExecutePromotionHandler};
pub use promotion_summary::PromotionSummaryHandler;
