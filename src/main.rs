//! Toolcrib - Tool Inventory Management System
//!
//! Interactive text-menu front end over the in-memory inventory core.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolcrib::{
    cli::{self, shell::Shell},
    config::AppConfig,
    repository::Repository,
    services::Services,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("toolcrib={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Toolcrib v{}", env!("CARGO_PKG_VERSION"));

    // Create repository and services
    let repository = Repository::new();
    let services = Services::new(repository, &config.inventory);

    // Seed demo inventory
    if config.inventory.seed_defaults {
        cli::seed_default_tools(&services);
    }

    // Run the interactive shell
    let mut shell = Shell::new(services, config.shell.clone());
    shell.run()?;

    Ok(())
}
