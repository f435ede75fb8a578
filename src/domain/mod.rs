pub mod flow;

// Re-export commonly used types
pub use flow::{FlowRecord, FlowRepository, NdpiInfo};

// Re-export errors from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
