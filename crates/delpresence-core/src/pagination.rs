//! Client-side pagination of fetched lists.
//!
//! The admin endpoints return whole collections; tables page them locally.
//! Both offset-based and page-based slicing are supported:
//!
//! - `limit`: items per page (1-100, default: 10)
//! - `offset`: number of items to skip
//! - `page`: page number (1-indexed), takes precedence over `offset`
//!
//! # Example
//!
//! ```ignore
//! use delpresence_core::pagination::{PaginationParams, paginate};
//!
//! let page = paginate(courses, &PaginationParams::page(3, 20));
//! assert!(page.data.len() <= 20);
//! println!("page {} of {}", page.meta.page.unwrap_or(1), page.meta.total_pages);
//! ```

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Metadata about one page of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total: usize,
    /// Maximum items per page (the limit that was applied)
    pub limit: usize,
    /// Number of items skipped
    pub offset: usize,
    /// Current page number (only present if page-based pagination was used)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    /// Number of pages at this limit, at least 1
    pub total_pages: usize,
    /// Whether there are more items after this page
    pub has_more: bool,
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination request.
///
/// `limit` is clamped to [1, 100]; `page` is clamped to a minimum of 1.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub page: Option<usize>,
}

impl PaginationParams {
    #[must_use]
    pub const fn page(page: usize, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
            page: Some(page),
        }
    }

    #[must_use]
    pub const fn offset(offset: usize, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            page: None,
        }
    }

    /// Returns the effective limit, clamped to [1, 100].
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Returns the effective offset.
    ///
    /// If `page` is set, the offset is derived from it.
    #[must_use]
    pub fn effective_offset(&self) -> usize {
        match self.page {
            Some(page) => (page.max(1) - 1).saturating_mul(self.effective_limit()),
            None => self.offset.unwrap_or(0),
        }
    }

    #[must_use]
    pub fn effective_page(&self) -> Option<usize> {
        self.page.map(|p| p.max(1))
    }
}

/// Slices `items` according to `params`.
pub fn paginate<T>(items: Vec<T>, params: &PaginationParams) -> Page<T> {
    let total = items.len();
    let limit = params.effective_limit();
    let offset = params.effective_offset();

    let data: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset.saturating_add(data.len()) < total;

    Page {
        data,
        meta: PaginationMeta {
            total,
            limit,
            offset,
            page: params.effective_page(),
            total_pages: total.div_ceil(limit).max(1),
            has_more,
        },
    }
}
