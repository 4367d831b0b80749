//! Page requests and page metadata shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// Default page size for admin lists.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Builds a request, treating a missing or zero page as the first page.
    pub fn new(page: Option<u32>, per_page: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.max(1),
        }
    }

    /// Rows to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, DEFAULT_PER_PAGE)
    }
}

/// Pagination metadata as rendered by list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
}

impl PageMeta {
    /// `last_page` is never below 1, so an empty list is a single page.
    pub fn new(request: PageRequest, total: u64) -> Self {
        let per_page = u64::from(request.per_page);
        let pages = ((total + per_page - 1) / per_page).max(1);
        Self {
            current_page: request.page,
            last_page: u32::try_from(pages).unwrap_or(u32::MAX),
            total,
        }
    }

    /// Pagination controls are only rendered when there is more than one page.
    pub fn shows_controls(&self) -> bool {
        self.last_page > 1
    }
}

/// One page of items plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            meta: PageMeta::new(request, total),
        }
    }

    /// Slices an already-filtered, already-ordered collection.
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .collect();
        Self::new(items, request, total)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_is_first_page() {
        let req = PageRequest::new(Some(0), 10);
        assert_eq!(req.page, 1);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(Some(3), 10).offset(), 20);
    }

    #[test]
    fn single_page_hides_controls() {
        let meta = PageMeta::new(PageRequest::new(Some(1), 10), 7);
        assert_eq!(meta.last_page, 1);
        assert!(!meta.shows_controls());
    }

    #[test]
    fn empty_list_is_one_page() {
        let meta = PageMeta::new(PageRequest::default(), 0);
        assert_eq!(meta.last_page, 1);
    }

    #[test]
    fn partial_last_page_counts() {
        let meta = PageMeta::new(PageRequest::new(Some(2), 10), 21);
        assert_eq!(meta.last_page, 3);
        assert!(meta.shows_controls());
    }

    #[test]
    fn from_vec_slices_requested_page() {
        let page = Page::from_vec((1..=25).collect::<Vec<_>>(), PageRequest::new(Some(3), 10));
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.meta.total, 25);
    }
}
