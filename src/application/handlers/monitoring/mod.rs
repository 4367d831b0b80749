//! Counsellor monitoring of student progress.

mod list_monitoring;
mod save_catatan;

pub use list_monitoring::{
    ListMonitoringHandler, ListMonitoringQuery, MonitoringRow, STATUS_BELUM, STATUS_SUDAH,
};
pub use save_catatan::{SaveCatatanCommand, SaveCatatanHandler};
