//! Application services

pub mod flow;

pub use flow::{FlowPage, FlowService};
