//! Role-dependent dashboard statistics.

mod get_stats;

pub use get_stats::{
    DashboardStats, DecisionCounts, Distribution, GetDashboardStatsHandler, HistoryEntry,
    RecentResult, SiswaDashboard, StaffDashboard, RECENT_LIMIT,
};
