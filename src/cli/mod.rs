//! Interactive shell and startup helpers

pub mod shell;

use tracing::{info, warn};

use crate::{models::tool::CreateTool, services::Services};

/// The five demo tools registered at startup
const DEFAULT_TOOLS: [(&str, &str, &str, &str, &str); 5] = [
    ("Hammer", "Hand Tools", "SN001", "2022-01-01", "Good"),
    ("Drill", "Power Tools", "SN002", "2021-05-15", "Excellent"),
    ("Saw", "Power Tools", "SN003", "2020-11-20", "Fair"),
    ("Wrench", "Hand Tools", "SN004", "2023-03-10", "Excellent"),
    ("Ladder", "Safety Tools", "SN005", "2019-06-25", "Good"),
];

/// Seed the registry with the demo tools, tolerating duplicates
pub fn seed_default_tools(services: &Services) {
    for (name, category, serial_number, purchase_date, condition) in DEFAULT_TOOLS {
        let data = CreateTool {
            name: name.to_string(),
            category: category.to_string(),
            serial_number: serial_number.to_string(),
            purchase_date: purchase_date.to_string(),
            condition: condition.to_string(),
        };
        match services.registry.add(&data) {
            Ok(tool) => info!(id = %tool.id, name, "default tool seeded"),
            Err(e) => warn!(name, "failed to seed default tool: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::InventoryConfig, repository::Repository};

    #[test]
    fn test_seed_registers_five_tools() {
        let services = Services::new(Repository::new(), &InventoryConfig::default());
        seed_default_tools(&services);
        assert_eq!(services.registry.list().unwrap().len(), 5);
    }

    #[test]
    fn test_reseed_skips_duplicates() {
        let services = Services::new(Repository::new(), &InventoryConfig::default());
        seed_default_tools(&services);
        seed_default_tools(&services);
        assert_eq!(services.registry.list().unwrap().len(), 5);
    }
}
