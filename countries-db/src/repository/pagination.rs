use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Offset window of a 1-based page, in the signed range SQL `LIMIT`/`OFFSET` accept
///
/// # Example
/// ```
/// use countries_db::repository::pagination::PageRequest;
///
/// let second = PageRequest::try_for_page(10, 2).unwrap();
/// assert_eq!((second.limit, second.offset), (10, 10));
/// assert!(PageRequest::try_for_page(10, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: i64,
    /// Number of items to skip
    pub offset: i64,
}

impl PageRequest {
    /// Window for page `page_number` of `page_size` items
    ///
    /// Both values must be at least 1. An offset past `i64::MAX` is clamped,
    /// which still selects an empty page.
    pub fn try_for_page(page_size: i64, page_number: i64) -> Result<Self, String> {
        if page_number < 1 {
            return Err(format!("page must be at least 1, got {page_number}"));
        }
        if page_size < 1 {
            return Err(format!("page size must be at least 1, got {page_size}"));
        }
        let offset = (page_number - 1).checked_mul(page_size).unwrap_or(i64::MAX);
        Ok(Self {
            limit: page_size,
            offset,
        })
    }
}

/// One page of items plus the total number of items across all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize) -> Self {
        Self { items, total }
    }
}

/// Generic repository trait for loading one name-ordered page of a table
/// together with the table's total row count
#[async_trait]
pub trait LoadPage<DB: Database, T: Identifiable>: Send + Sync {
    async fn load_page(&self, request: PageRequest) -> Result<Page<T>, Box<dyn std::error::Error + Send + Sync>>;
}
