//! In-memory store layer
//!
//! The whole store lives in process memory. Each repository guards its
//! collection with a single mutex so that compound mutations (duplicate
//! check + identifier allocation + insert, resolution + append) are atomic
//! under one lock.

pub mod tools;
pub mod usage;

/// Main repository struct holding the in-memory stores
#[derive(Clone, Default)]
pub struct Repository {
    pub tools: tools::ToolsRepository,
    pub usage: usage::UsageRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}
