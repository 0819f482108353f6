//! SQLite Repositories
//!
//! Implements the repository ports using SQLx for SQLite.

mod device_repository;
mod gateway_repository;

pub use device_repository::SqliteDeviceRepository;
pub use gateway_repository::SqliteGatewayRepository;
