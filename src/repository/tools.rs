//! Tools repository: the insertion-ordered registry map

use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::{
    error::{AppError, AppResult},
    ids,
    models::{
        maintenance::MaintenanceRecord,
        tool::{CreateTool, Tool},
    },
};

#[derive(Clone, Default)]
pub struct ToolsRepository {
    tools: Arc<Mutex<IndexMap<String, Tool>>>,
}

impl ToolsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new tool
    ///
    /// The serial number is checked (exact, case-sensitive) against every
    /// existing tool, and the identifier is drawn from the token generator
    /// until it misses the current key set.
    pub fn create(&self, data: &CreateTool) -> AppResult<Tool> {
        let mut tools = self.tools.lock();

        if tools.values().any(|t| t.serial_number == data.serial_number) {
            return Err(AppError::DuplicateSerialNumber(data.serial_number.clone()));
        }

        let mut id = ids::next_token();
        while tools.contains_key(&id) {
            id = ids::next_token();
        }

        let tool = Tool {
            id: id.clone(),
            name: data.name.clone(),
            category: data.category.clone(),
            serial_number: data.serial_number.clone(),
            purchase_date: data.purchase_date.clone(),
            condition: data.condition.clone(),
            location: None,
            maintenance_history: Vec::new(),
            total_usage_hours: 0.0,
            registered_at: Utc::now(),
        };
        tools.insert(id, tool.clone());
        Ok(tool)
    }

    /// Resolve an identifier to a tool id
    ///
    /// Exact id lookup first, then a case-insensitive name scan in insertion
    /// order. Duplicate names resolve to the first-inserted match.
    pub fn resolve(&self, identifier: &str) -> AppResult<String> {
        let tools = self.tools.lock();
        Self::resolve_locked(&tools, identifier)
    }

    fn resolve_locked(tools: &IndexMap<String, Tool>, identifier: &str) -> AppResult<String> {
        if tools.contains_key(identifier) {
            return Ok(identifier.to_string());
        }
        let wanted = identifier.to_lowercase();
        tools
            .values()
            .find(|t| t.name.to_lowercase() == wanted)
            .map(|t| t.id.clone())
            .ok_or_else(|| AppError::ToolNotFound(identifier.to_string()))
    }

    /// Get a tool snapshot by id or name
    pub fn get(&self, identifier: &str) -> AppResult<Tool> {
        let tools = self.tools.lock();
        let id = Self::resolve_locked(&tools, identifier)?;
        tools
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::ToolNotFound(identifier.to_string()))
    }

    /// Delete a tool, preserving the order of the remaining entries
    pub fn delete(&self, identifier: &str) -> AppResult<Tool> {
        let mut tools = self.tools.lock();
        let id = Self::resolve_locked(&tools, identifier)?;
        tools
            .shift_remove(&id)
            .ok_or_else(|| AppError::ToolNotFound(identifier.to_string()))
    }

    /// List all tools in insertion order
    pub fn list(&self) -> AppResult<Vec<Tool>> {
        Ok(self.tools.lock().values().cloned().collect())
    }

    /// Append a maintenance record to a tool's history
    pub fn append_maintenance(
        &self,
        identifier: &str,
        record: MaintenanceRecord,
    ) -> AppResult<MaintenanceRecord> {
        let mut tools = self.tools.lock();
        let id = Self::resolve_locked(&tools, identifier)?;
        let tool = tools
            .get_mut(&id)
            .ok_or_else(|| AppError::ToolNotFound(identifier.to_string()))?;
        tool.maintenance_history.push(record.clone());
        Ok(record)
    }

    /// Accumulate externally measured usage hours, returning the new total
    pub fn add_usage_hours(&self, identifier: &str, hours: f64) -> AppResult<f64> {
        let mut tools = self.tools.lock();
        let id = Self::resolve_locked(&tools, identifier)?;
        let tool = tools
            .get_mut(&id)
            .ok_or_else(|| AppError::ToolNotFound(identifier.to_string()))?;
        tool.total_usage_hours += hours;
        Ok(tool.total_usage_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill() -> CreateTool {
        CreateTool {
            name: "Drill".to_string(),
            category: "Power Tools".to_string(),
            serial_number: "SN123".to_string(),
            purchase_date: "2023-01-01".to_string(),
            condition: "Good".to_string(),
        }
    }

    #[test]
    fn test_create_assigns_token_id() {
        let repo = ToolsRepository::new();
        let tool = repo.create(&drill()).unwrap();
        assert_eq!(tool.id.len(), ids::TOKEN_LEN);
        assert_eq!(tool.total_usage_hours, 0.0);
        assert!(tool.maintenance_history.is_empty());
        assert!(tool.location.is_none());
    }

    #[test]
    fn test_duplicate_serial_rejected() {
        let repo = ToolsRepository::new();
        repo.create(&drill()).unwrap();

        let mut other = drill();
        other.name = "Drill 2".to_string();
        other.purchase_date = "2023-02-01".to_string();
        other.condition = "Excellent".to_string();
        let err = repo.create(&other).unwrap_err();
        assert_eq!(err, AppError::DuplicateSerialNumber("SN123".to_string()));
    }

    #[test]
    fn test_resolve_by_id_and_name() {
        let repo = ToolsRepository::new();
        let tool = repo.create(&drill()).unwrap();

        assert_eq!(repo.resolve(&tool.id).unwrap(), tool.id);
        assert_eq!(repo.resolve("drill").unwrap(), tool.id);
        assert_eq!(repo.resolve("DRILL").unwrap(), tool.id);
        assert_eq!(
            repo.resolve("nonexistent").unwrap_err(),
            AppError::ToolNotFound("nonexistent".to_string())
        );
    }

    #[test]
    fn test_duplicate_names_resolve_first_inserted() {
        let repo = ToolsRepository::new();
        let first = repo.create(&drill()).unwrap();
        let mut second = drill();
        second.serial_number = "SN124".to_string();
        repo.create(&second).unwrap();

        assert_eq!(repo.resolve("drill").unwrap(), first.id);
    }

    #[test]
    fn test_delete_preserves_order() {
        let repo = ToolsRepository::new();
        let mut ids = Vec::new();
        for (name, serial) in [("Hammer", "SN1"), ("Drill", "SN2"), ("Saw", "SN3")] {
            let mut data = drill();
            data.name = name.to_string();
            data.serial_number = serial.to_string();
            ids.push(repo.create(&data).unwrap().id);
        }

        repo.delete(&ids[1]).unwrap();
        let names: Vec<String> = repo.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Hammer".to_string(), "Saw".to_string()]);
        assert_eq!(
            repo.resolve(&ids[1]).unwrap_err(),
            AppError::ToolNotFound(ids[1].clone())
        );
    }

    #[test]
    fn test_add_usage_hours_accumulates() {
        let repo = ToolsRepository::new();
        let tool = repo.create(&drill()).unwrap();
        assert_eq!(repo.add_usage_hours(&tool.id, 100.0).unwrap(), 100.0);
        assert_eq!(repo.add_usage_hours(&tool.id, 50.0).unwrap(), 150.0);
        assert_eq!(repo.get(&tool.id).unwrap().total_usage_hours, 150.0);
    }
}
