//! Toolcrib - Tool Inventory Management System
//!
//! A single-user, in-memory inventory tracker for physical tools: registers
//! tools, logs checkouts, schedules maintenance, and lists inventory through
//! an interactive text menu.

pub mod cli;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
