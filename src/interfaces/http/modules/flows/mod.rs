//! Flow module — paginated flow listing

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
