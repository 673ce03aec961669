//! Tool model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::maintenance::MaintenanceRecord;

/// Registered physical asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Short opaque token, unique within the registry, immutable
    pub id: String,
    pub name: String,
    pub category: String,
    /// Manufacturer serial, unique across tools at registration time
    pub serial_number: String,
    /// Opaque date string, stored as given
    pub purchase_date: String,
    pub condition: String,
    /// Unset at registration
    pub location: Option<String>,
    /// Append-only, insertion order preserved
    pub maintenance_history: Vec<MaintenanceRecord>,
    /// Accumulated externally via the registry's add_usage_hours operation
    pub total_usage_hours: f64,
    pub registered_at: DateTime<Utc>,
}

/// Create tool request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTool {
    pub name: String,
    pub category: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub condition: String,
}
