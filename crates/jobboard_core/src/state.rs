use std::fmt;

use crate::pagination::{Pagination, DEFAULT_PAGE_WINDOW};
use crate::query::DEFAULT_PAGE_SIZE;
use crate::view_model::{AppViewModel, CategoryView, JobRowView, StatusView};
use crate::{Catalog, Country, FilterState, JobRef, JobSummary, RequestEpoch, SearchQuery};

/// Why the last settled search shows a message instead of jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// Upstream answered with an empty or absent result list.
    NoResults,
    /// Transport, status or payload failure.
    FetchFailed,
}

impl SearchFailure {
    pub fn message(self) -> &'static str {
        match self {
            SearchFailure::NoResults => "No jobs found.",
            SearchFailure::FetchFailed => "Failed to fetch jobs.",
        }
    }
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(SearchFailure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    filter: FilterState,
    page_size: u32,
    page_window: u32,
    pagination: Pagination,
    search_epoch: RequestEpoch,
    catalog_epoch: RequestEpoch,
    status: FetchStatus,
    jobs: Vec<JobSummary>,
    /// Country the settled `jobs` were fetched for.
    jobs_country: Country,
    total_count: Option<u64>,
    catalog: Catalog,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Country::default(), DEFAULT_PAGE_SIZE, DEFAULT_PAGE_WINDOW)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A zero page size or window falls back to the defaults.
    pub fn with_settings(country: Country, page_size: u32, page_window: u32) -> Self {
        Self {
            filter: FilterState::new(country),
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
            page_window: if page_window == 0 { DEFAULT_PAGE_WINDOW } else { page_window },
            pagination: Pagination::default(),
            search_epoch: RequestEpoch::default(),
            catalog_epoch: RequestEpoch::default(),
            status: FetchStatus::Idle,
            jobs: Vec::new(),
            jobs_country: country,
            total_count: None,
            catalog: Catalog::default(),
            dirty: false,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn jobs(&self) -> &[JobSummary] {
        &self.jobs
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.pagination.total_pages()
    }

    pub fn search_epoch(&self) -> RequestEpoch {
        self.search_epoch
    }

    pub fn catalog_epoch(&self) -> RequestEpoch {
        self.catalog_epoch
    }

    /// The query the current filter maps to.
    pub fn current_query(&self) -> SearchQuery {
        SearchQuery::build(&self.filter, self.page_size)
    }

    /// Identifiers of a visible job, if `job_id` is on the current page.
    pub fn job_ref(&self, job_id: &str) -> Option<JobRef> {
        self.jobs.iter().find(|job| job.id == job_id).map(|job| JobRef {
            country: self.jobs_country,
            id: job.id.clone(),
        })
    }

    pub fn view(&self) -> AppViewModel {
        let filter = &self.filter;
        let page = filter.page();
        let category_label = filter
            .category()
            .map(|tag| self.catalog.label_for(tag).unwrap_or(tag).to_string());
        let status = match self.status {
            FetchStatus::Idle => StatusView::Idle,
            FetchStatus::Loading => StatusView::Loading,
            FetchStatus::Success => StatusView::Ready {
                total_count: self.total_count.unwrap_or(0),
            },
            FetchStatus::Error(failure) => StatusView::Message(failure.message().to_string()),
        };

        AppViewModel {
            country: filter.country(),
            country_name: filter.country().display_name().to_string(),
            category_tag: filter.category().map(ToOwned::to_owned),
            category_label,
            page,
            total_pages: self.pagination.total_pages(),
            page_window: self.pagination.window(page, self.page_window).collect(),
            has_previous: self.pagination.has_previous(page),
            has_next: self.pagination.has_next(page),
            status,
            jobs: self
                .jobs
                .iter()
                .map(|job| JobRowView {
                    id: job.id.clone(),
                    title: job.title.clone(),
                    location: job.location.clone(),
                    redirect_url: job.redirect_url.to_string(),
                })
                .collect(),
            categories: self
                .catalog
                .categories()
                .iter()
                .map(|category| CategoryView {
                    label: category.label.clone(),
                    tag: category.tag.clone(),
                    selected: filter.category() == Some(category.tag.as_str()),
                })
                .collect(),
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub(crate) fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub(crate) fn forget_total_pages(&mut self) {
        self.pagination.reset();
    }

    /// Issues a new search epoch for the current filter and enters `Loading`.
    pub(crate) fn begin_search(&mut self) -> (RequestEpoch, SearchQuery) {
        let epoch = self.search_epoch.advance();
        self.status = FetchStatus::Loading;
        self.mark_dirty();
        (epoch, self.current_query())
    }

    pub(crate) fn begin_catalog_load(&mut self) -> (RequestEpoch, Country) {
        let epoch = self.catalog_epoch.advance();
        (epoch, self.filter.country())
    }

    pub(crate) fn commit_jobs(&mut self, jobs: Vec<JobSummary>, total_count: u64) -> u32 {
        self.jobs = jobs;
        self.jobs_country = self.filter.country();
        self.total_count = Some(total_count);
        self.status = FetchStatus::Success;
        self.mark_dirty();
        self.pagination.set_total_count(total_count, self.page_size)
    }

    pub(crate) fn commit_no_results(&mut self, total_count: u64) -> u32 {
        self.jobs.clear();
        self.total_count = Some(total_count);
        self.status = FetchStatus::Error(SearchFailure::NoResults);
        self.mark_dirty();
        self.pagination.set_total_count(total_count, self.page_size)
    }

    pub(crate) fn commit_fetch_failure(&mut self) {
        self.jobs.clear();
        self.total_count = None;
        self.status = FetchStatus::Error(SearchFailure::FetchFailed);
        self.mark_dirty();
    }

    pub(crate) fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.mark_dirty();
    }
}
