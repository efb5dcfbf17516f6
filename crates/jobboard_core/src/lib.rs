//! Job board core: filter selection, query building, pagination and the
//! epoch-guarded fetch state machine. No IO happens here; requests leave as
//! [`Effect`]s and their completions come back as [`Msg`]s.
mod auth;
mod catalog;
mod effect;
mod epoch;
mod filter;
mod job;
mod msg;
pub mod pagination;
mod query;
mod state;
mod update;
mod view_model;

pub use auth::AuthStatus;
pub use catalog::{Catalog, Category};
pub use effect::Effect;
pub use epoch::RequestEpoch;
pub use filter::{Country, FilterState, UnknownCountry};
pub use job::{JobRef, JobSummary, SearchResultPage};
pub use msg::Msg;
pub use pagination::{compute_total_pages, page_window, Pagination, DEFAULT_PAGE_WINDOW};
pub use query::{SearchQuery, DEFAULT_PAGE_SIZE};
pub use state::{AppState, FetchStatus, SearchFailure};
pub use update::update;
pub use view_model::{AppViewModel, CategoryView, JobRowView, StatusView};
