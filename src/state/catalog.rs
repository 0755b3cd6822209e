#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::encode_component;

/// Courses shown per catalog page.
pub const PAGE_SIZE: u32 = 12;

/// Catalog query state: search term, category filter, and 1-based page.
/// Any filter change resets the page to 1 so results never start on an
/// empty page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub category_id: Option<String>,
    pub page: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category_id: None,
            page: 1,
        }
    }
}

impl CatalogQuery {
    #[must_use]
    pub fn with_search(&self, search: String) -> Self {
        Self {
            search,
            category_id: self.category_id.clone(),
            page: 1,
        }
    }

    #[must_use]
    pub fn with_category(&self, category_id: Option<String>) -> Self {
        Self {
            search: self.search.clone(),
            category_id,
            page: 1,
        }
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            search: self.search.clone(),
            category_id: self.category_id.clone(),
            page: page.max(1),
        }
    }

    /// Render as a query string for `GET /api/courses`, always carrying
    /// page and page size.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut query = format!("?page={}&pageSize={PAGE_SIZE}", self.page);
        let search = self.search.trim();
        if !search.is_empty() {
            query.push_str(&format!("&search={}", encode_component(search)));
        }
        if let Some(category_id) = self.category_id.as_deref() {
            query.push_str(&format!("&categoryId={}", encode_component(category_id)));
        }
        query
    }
}

/// Number of pages needed for `total_elements` results.
#[must_use]
pub fn total_pages(total_elements: u64) -> u32 {
    let pages = total_elements.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
}
