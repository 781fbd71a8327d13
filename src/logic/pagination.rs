//! Pagination Logic
//!
//! Pure functions for planning server requests and slicing client-side pages.
//! The fetch service turns a plan into sequential requests; nothing here does I/O.

use serde::Deserialize;

/// Page size used for the count-only probe that precedes a full enumeration
pub const COUNT_PROBE_LIMIT: u64 = 1;

/// Default server page size for the full enumeration strategy
pub const DEFAULT_SERVER_PAGE_SIZE: u64 = 1000;

/// Default limit for the single page strategy
pub const DEFAULT_SINGLE_PAGE_LIMIT: u64 = 100;

/// How the asset collection for one locale is retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum PaginationStrategy {
    /// One bounded request; anything past `limit` is never visible
    SinglePage {
        #[serde(default = "default_single_page_limit")]
        limit: u64,
    },
    /// Count probe, then sequential pages until the whole collection is in
    FullEnumeration {
        #[serde(default = "default_server_page_size")]
        server_page_size: u64,
    },
}

fn default_single_page_limit() -> u64 {
    DEFAULT_SINGLE_PAGE_LIMIT
}

fn default_server_page_size() -> u64 {
    DEFAULT_SERVER_PAGE_SIZE
}

impl Default for PaginationStrategy {
    fn default() -> Self {
        PaginationStrategy::FullEnumeration {
            server_page_size: DEFAULT_SERVER_PAGE_SIZE,
        }
    }
}

impl PaginationStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            PaginationStrategy::SinglePage { .. } => "single page",
            PaginationStrategy::FullEnumeration { .. } => "full enumeration",
        }
    }
}

/// One `(skip, limit)` request against a listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u64,
}

/// Number of pages needed to cover `len` items, i.e. ceil(len / size)
///
/// A zero size is treated as 1 so callers never divide by zero.
pub fn page_count(len: u64, size: u64) -> u64 {
    let size = size.max(1);
    len.div_ceil(size)
}

/// Length of the final page for `len` items split into pages of `size`
///
/// Zero when there are no items.
pub fn last_page_len(len: u64, size: u64) -> u64 {
    let size = size.max(1);
    if len == 0 {
        0
    } else if len % size == 0 {
        size
    } else {
        len % size
    }
}

/// Deterministic request sequence that retrieves `total` items
///
/// # Examples
/// ```
/// use dampick::logic::pagination::{request_plan, PageRequest};
///
/// let plan = request_plan(2500, 1000);
/// assert_eq!(plan[2], PageRequest { skip: 2000, limit: 1000 });
/// ```
pub fn request_plan(total: u64, server_page_size: u64) -> Vec<PageRequest> {
    let size = server_page_size.max(1);
    (0..page_count(total, size))
        .map(|page| PageRequest {
            skip: page * size,
            limit: size,
        })
        .collect()
}

/// Concatenate fetched pages, preserving request order
pub fn concat_pages<T>(pages: Vec<Vec<T>>) -> Vec<T> {
    let len = pages.iter().map(Vec::len).sum();
    let mut all = Vec::with_capacity(len);
    for page in pages {
        all.extend(page);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_2500_items() {
        let plan = request_plan(2500, 1000);
        assert_eq!(
            plan,
            vec![
                PageRequest { skip: 0, limit: 1000 },
                PageRequest { skip: 1000, limit: 1000 },
                PageRequest { skip: 2000, limit: 1000 },
            ]
        );
    }

    #[test]
    fn test_plan_exact_multiple() {
        let plan = request_plan(2000, 1000);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[1], PageRequest { skip: 1000, limit: 1000 });
    }

    #[test]
    fn test_plan_empty_collection() {
        assert!(request_plan(0, 1000).is_empty());
    }

    #[test]
    fn test_plan_zero_page_size_does_not_panic() {
        let plan = request_plan(3, 0);
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[2], PageRequest { skip: 2, limit: 1 });
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(0, 12), 0);
        assert_eq!(page_count(1, 12), 1);
        assert_eq!(page_count(12, 12), 1);
        assert_eq!(page_count(13, 12), 2);
        assert_eq!(page_count(50, 24), 3);
    }

    #[test]
    fn test_last_page_len() {
        assert_eq!(last_page_len(0, 12), 0);
        assert_eq!(last_page_len(13, 12), 1);
        assert_eq!(last_page_len(24, 12), 12);
        assert_eq!(last_page_len(50, 24), 2);
    }

    #[test]
    fn test_concat_preserves_order() {
        let pages = vec![vec![1, 2], vec![3], vec![], vec![4, 5]];
        assert_eq!(concat_pages(pages), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_strategy_deserializes_with_defaults() {
        let single: PaginationStrategy = serde_yaml::from_str("strategy: single_page").unwrap();
        assert_eq!(single, PaginationStrategy::SinglePage { limit: 100 });

        let full: PaginationStrategy =
            serde_yaml::from_str("strategy: full_enumeration\nserver_page_size: 250").unwrap();
        assert_eq!(full, PaginationStrategy::FullEnumeration { server_page_size: 250 });
    }
}
