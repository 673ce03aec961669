//! Maintenance model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maintenance lifecycle status
///
/// New records start out `Scheduled`; the core exposes no transition
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceStatus::Scheduled => "Scheduled",
            MaintenanceStatus::Completed => "Completed",
            MaintenanceStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

/// One scheduled service event in a tool's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub maintenance_type: String,
    /// Opaque date string, stored as given
    pub scheduled_date: String,
    pub status: MaintenanceStatus,
    pub created_at: DateTime<Utc>,
}
