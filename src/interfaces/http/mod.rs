//! HTTP REST API interfaces
//!
//! - `common`: Response envelope, pagination params, validated query extractor
//! - `modules`: Per-resource handlers and middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
