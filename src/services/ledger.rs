//! Usage ledger service

use chrono::Utc;
use tracing::info;

use crate::{
    error::AppResult,
    models::usage::{CreateUsage, UsageRecord},
    repository::Repository,
};

#[derive(Clone)]
pub struct LedgerService {
    repository: Repository,
}

impl LedgerService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Log a checkout against a registered tool
    pub fn record(&self, identifier: &str, data: &CreateUsage) -> AppResult<UsageRecord> {
        let tool_id = self.repository.tools.resolve(identifier)?;
        let record = UsageRecord {
            tool_id: tool_id.clone(),
            user: data.user.clone(),
            checkout_time: data.checkout_time.clone(),
            expected_return_time: data.expected_return_time.clone(),
            return_time: None,
            logged_at: Utc::now(),
        };
        let record = self.repository.usage.append(record)?;
        info!(tool_id = %tool_id, user = %record.user, "usage recorded");
        Ok(record)
    }

    /// Close the oldest open checkout for a tool
    ///
    /// Returns `None` when the tool has nothing checked out.
    pub fn record_return(
        &self,
        identifier: &str,
        return_time: &str,
    ) -> AppResult<Option<UsageRecord>> {
        let tool_id = self.repository.tools.resolve(identifier)?;
        let closed = self.repository.usage.close_oldest_open(&tool_id, return_time)?;
        if let Some(ref record) = closed {
            info!(tool_id = %tool_id, user = %record.user, "usage closed");
        }
        Ok(closed)
    }

    /// Snapshot of the whole usage log
    pub fn list(&self) -> AppResult<Vec<UsageRecord>> {
        self.repository.usage.list()
    }
}
