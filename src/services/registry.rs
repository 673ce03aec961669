//! Tool registry service

use tracing::info;

use crate::{
    error::AppResult,
    models::tool::{CreateTool, Tool},
    repository::Repository,
};

#[derive(Clone)]
pub struct RegistryService {
    repository: Repository,
}

impl RegistryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new tool and return it with its assigned id
    pub fn add(&self, data: &CreateTool) -> AppResult<Tool> {
        let tool = self.repository.tools.create(data)?;
        info!(id = %tool.id, name = %tool.name, "tool registered");
        Ok(tool)
    }

    /// Remove a tool by id or name
    ///
    /// Usage records referencing the tool stay in the ledger.
    pub fn remove(&self, identifier: &str) -> AppResult<Tool> {
        let tool = self.repository.tools.delete(identifier)?;
        info!(id = %tool.id, name = %tool.name, "tool removed");
        Ok(tool)
    }

    /// Resolve an id-or-name identifier to a tool id
    pub fn resolve(&self, identifier: &str) -> AppResult<String> {
        self.repository.tools.resolve(identifier)
    }

    /// Get a tool snapshot by id or name
    pub fn get(&self, identifier: &str) -> AppResult<Tool> {
        self.repository.tools.get(identifier)
    }

    /// List all tools in registration order
    pub fn list(&self) -> AppResult<Vec<Tool>> {
        self.repository.tools.list()
    }

    /// Accumulate externally measured usage hours for a tool
    pub fn add_usage_hours(&self, identifier: &str, hours: f64) -> AppResult<f64> {
        self.repository.tools.add_usage_hours(identifier, hours)
    }
}
