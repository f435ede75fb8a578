//! Flow aggregate
//!
//! Contains the projected flow record, its nDPI classification, and the
//! repository interface used to page through the store.

pub mod model;
pub mod repository;

pub use model::{FlowRecord, NdpiInfo};
pub use repository::FlowRepository;
