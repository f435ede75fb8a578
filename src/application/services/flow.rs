//! Flow listing service

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::{DomainResult, FlowRecord, FlowRepository};
use crate::shared::PaginationData;

/// One page of flows together with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPage {
    pub pagination: PaginationData,
    pub flows: Vec<FlowRecord>,
}

/// Service for reading flows page by page
pub struct FlowService {
    repo: Arc<dyn FlowRepository>,
}

impl FlowService {
    pub fn new(repo: Arc<dyn FlowRepository>) -> Self {
        Self { repo }
    }

    /// Run one bounded read for the given page.
    ///
    /// Store failures are returned as is; there is no retry and no partial
    /// page.
    pub async fn list_page(&self, pagination: PaginationData) -> DomainResult<FlowPage> {
        let window = pagination.window();
        let flows = match self.repo.find_page(window).await {
            Ok(flows) => flows,
            Err(e) => {
                error!(
                    "Failed to read flows (page={}, size={}): {}",
                    pagination.page, pagination.size, e
                );
                metrics::counter!("flow_page_errors_total").increment(1);
                return Err(e);
            }
        };

        debug!(
            "Served flow page {} (size {}): {} rows",
            pagination.page,
            pagination.size,
            flows.len()
        );
        metrics::counter!("flow_pages_served_total").increment(1);
        metrics::counter!("flow_rows_served_total").increment(flows.len() as u64);

        Ok(FlowPage { pagination, flows })
    }

    /// Check that the store answers.
    pub async fn ping(&self) -> DomainResult<()> {
        self.repo.ping().await
    }
}
