//! In-memory flow repository

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::flow::{FlowRecord, FlowRepository};
use crate::domain::{DomainError, DomainResult};
use crate::shared::PageWindow;

/// In-memory flow store for development and testing.
///
/// Rows keep insertion order, which stands in for primary-key order.
pub struct InMemoryFlowRepository {
    flows: RwLock<Vec<FlowRecord>>,
    unavailable: bool,
    page_reads: AtomicUsize,
}

impl InMemoryFlowRepository {
    pub fn new() -> Self {
        Self::with_flows(Vec::new())
    }

    pub fn with_flows(flows: Vec<FlowRecord>) -> Self {
        Self {
            flows: RwLock::new(flows),
            unavailable: false,
            page_reads: AtomicUsize::new(0),
        }
    }

    /// A store whose every call fails, as if the database were unreachable.
    pub fn unavailable() -> Self {
        Self {
            flows: RwLock::new(Vec::new()),
            unavailable: true,
            page_reads: AtomicUsize::new(0),
        }
    }

    pub async fn push(&self, flow: FlowRecord) {
        self.flows.write().await.push(flow);
    }

    /// Number of `find_page` calls made so far.
    pub fn page_reads(&self) -> usize {
        self.page_reads.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> DomainResult<()> {
        if self.unavailable {
            return Err(DomainError::Database(
                "flow store is unreachable".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for InMemoryFlowRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlowRepository for InMemoryFlowRepository {
    async fn find_page(&self, window: PageWindow) -> DomainResult<Vec<FlowRecord>> {
        self.page_reads.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let flows = self.flows.read().await;
        let skip = usize::try_from(window.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(window.limit).unwrap_or(usize::MAX);
        Ok(flows.iter().skip(skip).take(take).cloned().collect())
    }

    async fn ping(&self) -> DomainResult<()> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NdpiInfo;

    fn flow(n: i64) -> FlowRecord {
        FlowRecord::new(n, format!("10.0.0.{}", n), "8.8.8.8", NdpiInfo::default())
    }

    #[tokio::test]
    async fn pages_in_insertion_order() {
        let repo = InMemoryFlowRepository::with_flows((0..25).map(flow).collect());
        let page = repo
            .find_page(PageWindow { limit: 10, offset: 10 })
            .await
            .unwrap();
        let seen: Vec<i64> = page.iter().map(|f| f.last_seen).collect();
        assert_eq!(seen, (10..20).collect::<Vec<_>>());
        assert_eq!(repo.page_reads(), 1);
    }

    #[tokio::test]
    async fn offset_beyond_end_is_empty() {
        let repo = InMemoryFlowRepository::new();
        repo.push(flow(1)).await;
        let page = repo
            .find_page(PageWindow { limit: 5, offset: u64::MAX })
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn unavailable_store_fails() {
        let repo = InMemoryFlowRepository::unavailable();
        assert!(repo.ping().await.is_err());
        let err = repo
            .find_page(PageWindow { limit: 5, offset: 0 })
            .await
            .unwrap_err();
        assert!(err.is_store_failure());
    }
}
