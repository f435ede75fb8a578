//! Flow repository interface

use async_trait::async_trait;

use super::model::FlowRecord;
use crate::domain::DomainResult;
use crate::shared::PageWindow;

/// Read access to the flow store.
///
/// Implementations hand out a pooled connection per call and release it
/// when the call returns, fails, or is dropped mid-flight.
#[async_trait]
pub trait FlowRepository: Send + Sync {
    /// Skip `window.offset` rows and return at most `window.limit` of them,
    /// ordered by primary key. An offset past the end yields an empty page.
    async fn find_page(&self, window: PageWindow) -> DomainResult<Vec<FlowRecord>>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> DomainResult<()>;
}
