//! Checkout (usage) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One checkout event in the usage ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Weak reference: must exist at creation time, not re-validated later
    pub tool_id: String,
    pub user: String,
    /// Opaque datetime strings, stored as given
    pub checkout_time: String,
    pub expected_return_time: String,
    /// Unset until a return is recorded
    pub return_time: Option<String>,
    pub logged_at: DateTime<Utc>,
}

/// Create usage request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUsage {
    pub user: String,
    pub checkout_time: String,
    pub expected_return_time: String,
}
