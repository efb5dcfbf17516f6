#![allow(dead_code)]

use std::sync::Once;

use jobboard_core::{update, AppState, Effect, JobSummary, Msg, RequestEpoch, SearchResultPage};
use url::Url;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobboard_logging::initialize_for_tests);
}

pub fn job(id: &str) -> JobSummary {
    JobSummary {
        id: id.to_string(),
        title: format!("Job {id}"),
        location: "London".to_string(),
        redirect_url: Url::parse(&format!("https://jobs.example.com/land/{id}")).unwrap(),
    }
}

pub fn page_of(ids: &[&str], total_count: u64) -> SearchResultPage {
    SearchResultPage {
        items: ids.iter().map(|id| job(id)).collect(),
        total_count,
    }
}

pub fn search_epoch(effects: &[Effect]) -> RequestEpoch {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SearchJobs { epoch, .. } => Some(*epoch),
            _ => None,
        })
        .expect("search effect")
}

pub fn catalog_epoch(effects: &[Effect]) -> RequestEpoch {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::LoadCategories { epoch, .. } => Some(*epoch),
            _ => None,
        })
        .expect("catalog effect")
}

/// Starts the state and settles the first search with `page`.
pub fn started_with(page: SearchResultPage) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    let epoch = search_epoch(&effects);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            epoch,
            result: Ok(page),
        },
    );
    state
}
