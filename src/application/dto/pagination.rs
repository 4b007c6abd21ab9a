use crate::domain::pagination::Page;
use serde::Serialize;

/// One page of DTOs as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct PaginationResult<T> {
    pub total_count: u64,
    pub results: Vec<T>,
    pub results_per_page: u32,
    pub page_number: u32,
    pub total_pages: u64,
}

impl<T> PaginationResult<T> {
    pub fn from_page<E>(page: Page<E>, f: impl FnMut(E) -> T) -> Self {
        page.map(f).into()
    }
}

impl<T> From<Page<T>> for PaginationResult<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            total_count: page.total_count,
            results: page.results,
            results_per_page: page.per_page,
            page_number: page.page_number,
            total_pages,
        }
    }
}
