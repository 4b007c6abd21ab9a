// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 3;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::validation("page must be a positive integer"));
        }
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(DomainError::validation(format!(
                "per_page must be an integer between 1 and {MAX_PER_PAGE}"
            )));
        }
        Ok(Self { page, per_page })
    }

    /// Missing values fall back to the first page of three.
    pub fn from_params(page: Option<u32>, per_page: Option<u32>) -> DomainResult<Self> {
        Self::new(
            page.unwrap_or(DEFAULT_PAGE),
            per_page.unwrap_or(DEFAULT_PER_PAGE),
        )
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus the total number of matches across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub total_count: u64,
    pub results: Vec<T>,
    pub per_page: u32,
    pub page_number: u32,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, total_count: u64, results: Vec<T>) -> Self {
        debug_assert!(results.len() <= request.per_page() as usize);
        Self {
            total_count,
            results,
            per_page: request.per_page(),
            page_number: request.page(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total_count: self.total_count,
            results: self.results.into_iter().map(f).collect(),
            per_page: self.per_page,
            page_number: self.page_number,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.total_count == 0 {
            0
        } else {
            (self.total_count - 1) / u64::from(self.per_page) + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_values() {
        assert!(PageRequest::new(0, 3).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, 101).is_err());
        assert!(PageRequest::new(1, 100).is_ok());
    }

    #[test]
    fn defaults_to_first_page_of_three() {
        let request = PageRequest::from_params(None, None).unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.offset(), 0);
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
    }

    #[test]
    fn map_keeps_metadata() {
        let request = PageRequest::new(2, 2).unwrap();
        let page = Page::new(request, 5, vec![1, 2]).map(|n| n * 10);
        assert_eq!(page.results, vec![10, 20]);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.total_pages(), 3);
    }
}
