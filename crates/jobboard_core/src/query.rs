use crate::{Country, FilterState};

/// Results requested per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 21;

/// A single upstream search request derived from a [`FilterState`].
///
/// Equal filter states always build equal queries, so comparing queries is
/// enough to detect a refetch that would change nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub country: Country,
    pub page: u32,
    pub page_size: u32,
    pub category: Option<String>,
}

impl SearchQuery {
    pub fn build(filter: &FilterState, page_size: u32) -> Self {
        Self {
            country: filter.country(),
            page: filter.page(),
            page_size,
            category: filter.category().map(ToOwned::to_owned),
        }
    }

    /// Path below the provider base URL, e.g. `gb/search/1`.
    pub fn path(&self) -> String {
        format!("{}/search/{}", self.country.code(), self.page)
    }

    /// Query parameters, excluding credentials. Absent filters produce no
    /// parameter at all.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("results_per_page", self.page_size.to_string())];
        if let Some(category) = self.category.as_deref().filter(|tag| !tag.is_empty()) {
            params.push(("category", category.to_string()));
        }
        params
    }
}
