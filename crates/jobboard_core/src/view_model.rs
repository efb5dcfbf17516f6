use crate::Country;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusView {
    #[default]
    Idle,
    Loading,
    Ready { total_count: u64 },
    /// Text to show instead of the job list.
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub country: Country,
    pub country_name: String,
    pub category_tag: Option<String>,
    pub category_label: Option<String>,
    pub page: u32,
    pub total_pages: Option<u32>,
    pub page_window: Vec<u32>,
    pub has_previous: bool,
    pub has_next: bool,
    pub status: StatusView,
    pub jobs: Vec<JobRowView>,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub id: String,
    pub title: String,
    pub location: String,
    pub redirect_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub label: String,
    pub tag: String,
    pub selected: bool,
}
