//! # Flow API
//!
//! Read-only HTTP API over the `FLOW_INFO` table filled by the flow
//! collector. `GET /flows/?page=&size=` returns one page of flows with
//! their nDPI classification.
//!
//! ## Architecture
//!
//! - **domain**: Flow record, nDPI classification, repository trait
//! - **application**: Flow listing service
//! - **infrastructure**: SeaORM repository, in-memory repository, pool setup
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Pagination, errors, shutdown coordination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmFlowRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
