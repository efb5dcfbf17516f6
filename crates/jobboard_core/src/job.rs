use url::Url;

use crate::Country;

/// One row of a search result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub id: String,
    pub title: String,
    pub location: String,
    pub redirect_url: Url,
}

/// A validated page of search results, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResultPage {
    pub items: Vec<JobSummary>,
    pub total_count: u64,
}

/// Identifiers needed to look up a single job's details.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobRef {
    pub country: Country,
    pub id: String,
}
