use crate::{AuthStatus, Category, Country, RequestEpoch, SearchResultPage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial mount: load the catalog and run the first search.
    Started,
    /// User picked a country.
    CountrySelected(Country),
    /// User picked a category tag, or `None` for all categories.
    CategorySelected(Option<String>),
    /// User asked for a specific page.
    PageRequested(u32),
    NextPage,
    PreviousPage,
    /// Re-issue the current query without changing the filter.
    RefreshRequested,
    /// Engine completion for a search.
    SearchCompleted {
        epoch: RequestEpoch,
        result: Result<SearchResultPage, String>,
    },
    /// Engine completion for a catalog load. Failed loads arrive as an empty list.
    CategoriesLoaded {
        epoch: RequestEpoch,
        country: Country,
        categories: Vec<Category>,
    },
    /// User asked for the details of a visible job.
    JobDetailsRequested { job_id: String, auth: AuthStatus },
}
