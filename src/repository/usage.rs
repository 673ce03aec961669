//! Usage repository: the append-only checkout log

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{error::AppResult, models::usage::UsageRecord};

#[derive(Clone, Default)]
pub struct UsageRepository {
    log: Arc<Mutex<Vec<UsageRecord>>>,
}

impl UsageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one checkout record
    pub fn append(&self, record: UsageRecord) -> AppResult<UsageRecord> {
        self.log.lock().push(record.clone());
        Ok(record)
    }

    /// Snapshot of the whole log in append order
    pub fn list(&self) -> AppResult<Vec<UsageRecord>> {
        Ok(self.log.lock().clone())
    }

    /// Close the oldest open record for a tool
    ///
    /// Returns `None` when the tool has no open checkout.
    pub fn close_oldest_open(
        &self,
        tool_id: &str,
        return_time: &str,
    ) -> AppResult<Option<UsageRecord>> {
        let mut log = self.log.lock();
        for record in log.iter_mut() {
            if record.tool_id == tool_id && record.return_time.is_none() {
                record.return_time = Some(return_time.to_string());
                return Ok(Some(record.clone()));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn checkout(tool_id: &str, user: &str) -> UsageRecord {
        UsageRecord {
            tool_id: tool_id.to_string(),
            user: user.to_string(),
            checkout_time: "2024-12-10 09:00".to_string(),
            expected_return_time: "2024-12-10 17:00".to_string(),
            return_time: None,
            logged_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let repo = UsageRepository::new();
        repo.append(checkout("t1", "Alice")).unwrap();
        repo.append(checkout("t2", "Bob")).unwrap();

        let log = repo.list().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].user, "Alice");
        assert_eq!(log[1].user, "Bob");
    }

    #[test]
    fn test_close_oldest_open() {
        let repo = UsageRepository::new();
        repo.append(checkout("t1", "Alice")).unwrap();
        repo.append(checkout("t1", "Bob")).unwrap();

        let closed = repo.close_oldest_open("t1", "2024-12-10 16:00").unwrap();
        assert_eq!(closed.unwrap().user, "Alice");

        let log = repo.list().unwrap();
        assert_eq!(log[0].return_time.as_deref(), Some("2024-12-10 16:00"));
        assert!(log[1].return_time.is_none());
    }

    #[test]
    fn test_close_with_no_open_record() {
        let repo = UsageRepository::new();
        assert!(repo.close_oldest_open("t1", "now").unwrap().is_none());
    }
}
