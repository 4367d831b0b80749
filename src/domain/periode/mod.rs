//! Periode - academic terms, class history and grade promotion.

mod activation;
mod kelas;
mod promotion;

pub use kelas::{KelasLevel, RiwayatKelas, StatusAkhir};
pub use activation::{ActivationDirection, Periode};
pub use promotion::{
    PeriodPromotion, PromotionReport, PromotionSummary, GRADUATE_DEFAULT_MAJOR, GRADUATE_STATUS,
};
