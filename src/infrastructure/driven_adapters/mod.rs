//! Driven Adapters
//!
//! Implementations of port traits for external systems:
//! - Database repositories
//! - Configuration

pub mod config;
pub mod database;
pub mod sqlite;

pub use config::AppConfig;
pub use sqlite::{SqliteDeviceRepository, SqliteGatewayRepository};
