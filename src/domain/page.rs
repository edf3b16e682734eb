//! Pagination primitives.

use crate::error::AppError;
use serde_json::json;

/// A bounded result window request.
///
/// Page indices are zero-based; the page size must be positive. The window
/// bounds derive as `offset = index * size` and `limit = size`, exposed as
/// `i64` for SQL binding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageRequest {
    index: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a page request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `size` is zero.
    pub fn new(index: u32, size: u32) -> Result<Self, AppError> {
        if size == 0 {
            return Err(AppError::bad_request(
                "Page size must be positive",
                json!({ "size": size }),
            ));
        }

        Ok(Self { index, size })
    }

    /// Zero-based page index.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Number of elements per page.
    pub fn size(self) -> u32 {
        self.size
    }

    /// Number of elements to skip.
    pub fn offset(self) -> i64 {
        i64::from(self.index) * i64::from(self.size)
    }

    /// Maximum number of elements to return.
    pub fn limit(self) -> i64 {
        i64::from(self.size)
    }
}

/// One page of an ordered result set, plus positional metadata.
///
/// Holds at most `request.size()` items together with the total element
/// count reported by the backend, from which the first/last flags and page
/// count derive.
#[derive(Clone, Debug)]
pub struct Page<T> {
    items: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Wraps a result window produced by a backend.
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        debug_assert!(items.len() <= request.size() as usize);
        Self {
            items,
            request,
            total_elements,
        }
    }

    /// Items of this page, in backend order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// The request this page answers.
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Number of elements actually present in this page.
    pub fn number_of_elements(&self) -> usize {
        self.items.len()
    }

    /// Total number of elements across all pages.
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Total number of pages, `ceil(total_elements / size)`.
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.request.size()))
    }

    /// True iff this is the page at index zero.
    pub fn is_first_page(&self) -> bool {
        self.request.index() == 0
    }

    /// True iff no further page exists.
    pub fn is_last_page(&self) -> bool {
        (u64::from(self.request.index()) + 1) * u64::from(self.request.size())
            >= self.total_elements
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
