//! Offset-based pagination
//!
//! A page request is `(page, size)`; the store sees it as
//! `LIMIT size OFFSET size * (page - 1)`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::{DomainError, DomainResult};

/// First page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Items per page when the request does not specify a size.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Smallest allowed page size.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest allowed page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A validated page request, echoed back to the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationData {
    /// Page number (1-based)
    pub page: u32,
    /// Page size (1–100)
    pub size: u32,
}

impl PaginationData {
    /// Build a page request, rejecting values outside the allowed bounds.
    pub fn new(page: u32, size: u32) -> DomainResult<Self> {
        if page < DEFAULT_PAGE {
            return Err(DomainError::Validation(format!(
                "page must be >= {}, got {}",
                DEFAULT_PAGE, page
            )));
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
            return Err(DomainError::Validation(format!(
                "size must be between {} and {}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, size
            )));
        }
        Ok(Self { page, size })
    }

    /// Row limit for the store query.
    pub fn db_limit(&self) -> u64 {
        u64::from(self.size)
    }

    /// Rows to skip before the page starts.
    pub fn db_offset(&self) -> u64 {
        // page >= 1 is guaranteed by `new`; u32 * u32 always fits in u64
        u64::from(self.size) * u64::from(self.page.saturating_sub(1))
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            limit: self.db_limit(),
            offset: self.db_offset(),
        }
    }
}

impl Default for PaginationData {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Bounded slice of the store: skip `offset` rows, take at most `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}
