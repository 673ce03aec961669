//! Maintenance scheduling service

use chrono::Utc;
use tracing::info;

use crate::{
    error::AppResult,
    models::maintenance::{MaintenanceRecord, MaintenanceStatus},
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
    /// Usage hours a tool is expected to run between services
    service_interval_hours: f64,
}

impl MaintenanceService {
    pub fn new(repository: Repository, service_interval_hours: f64) -> Self {
        Self {
            repository,
            service_interval_hours,
        }
    }

    /// Schedule a service event on a tool's history
    pub fn schedule(
        &self,
        identifier: &str,
        maintenance_type: &str,
        scheduled_date: &str,
    ) -> AppResult<MaintenanceRecord> {
        let record = MaintenanceRecord {
            maintenance_type: maintenance_type.to_string(),
            scheduled_date: scheduled_date.to_string(),
            status: MaintenanceStatus::Scheduled,
            created_at: Utc::now(),
        };
        let record = self.repository.tools.append_maintenance(identifier, record)?;
        info!(identifier, maintenance_type, "maintenance scheduled");
        Ok(record)
    }

    /// Maintenance urgency score for a tool
    ///
    /// Accumulated usage hours normalized by the service interval: zero for
    /// an unused tool, growing linearly with use.
    pub fn predictive_score(&self, identifier: &str) -> AppResult<f64> {
        let tool = self.repository.tools.get(identifier)?;
        Ok(tool.total_usage_hours / self.service_interval_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tool::CreateTool;

    fn service() -> MaintenanceService {
        MaintenanceService::new(Repository::new(), 100.0)
    }

    fn wrench() -> CreateTool {
        CreateTool {
            name: "Wrench".to_string(),
            category: "Hand Tools".to_string(),
            serial_number: "SN126".to_string(),
            purchase_date: "2021-05-01".to_string(),
            condition: "Excellent".to_string(),
        }
    }

    #[test]
    fn test_score_zero_without_usage() {
        let svc = service();
        let tool = svc.repository.tools.create(&wrench()).unwrap();
        assert_eq!(svc.predictive_score(&tool.id).unwrap(), 0.0);
    }

    #[test]
    fn test_score_increases_with_usage() {
        let svc = service();
        let tool = svc.repository.tools.create(&wrench()).unwrap();

        svc.repository.tools.add_usage_hours(&tool.id, 150.0).unwrap();
        let low = svc.predictive_score(&tool.id).unwrap();
        assert!(low > 0.0);

        svc.repository.tools.add_usage_hours(&tool.id, 50.0).unwrap();
        let high = svc.predictive_score(&tool.id).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_schedule_appends_scheduled_record() {
        let svc = service();
        let tool = svc.repository.tools.create(&wrench()).unwrap();

        let record = svc.schedule(&tool.id, "Oil Change", "2024-12-15").unwrap();
        assert_eq!(record.status, MaintenanceStatus::Scheduled);

        let history = svc.repository.tools.get(&tool.id).unwrap().maintenance_history;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].maintenance_type, "Oil Change");
        assert_eq!(history[0].scheduled_date, "2024-12-15");
    }
}
