//! Database entities module

pub mod flow_info;

pub use flow_info::Entity as FlowInfo;
