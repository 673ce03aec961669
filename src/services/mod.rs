//! Business logic services

pub mod ledger;
pub mod maintenance;
pub mod registry;

use crate::{config::InventoryConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub registry: registry::RegistryService,
    pub ledger: ledger::LedgerService,
    pub maintenance: maintenance::MaintenanceService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, inventory: &InventoryConfig) -> Self {
        Self {
            registry: registry::RegistryService::new(repository.clone()),
            ledger: ledger::LedgerService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(
                repository,
                inventory.service_interval_hours,
            ),
        }
    }
}
