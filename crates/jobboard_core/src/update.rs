use jobboard_logging::{board_debug, board_info, board_warn};

use crate::{AppState, AuthStatus, Catalog, Effect, Msg, SearchResultPage};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let mut effects = Vec::with_capacity(2);
            effects.push(load_categories(&mut state));
            effects.push(search(&mut state));
            effects
        }
        Msg::CountrySelected(country) => {
            let before = state.filter().clone();
            state.filter_mut().set_country(country);
            if *state.filter() == before {
                Vec::new()
            } else if before.country() == country {
                // Same country, only the page went back to 1.
                vec![search(&mut state)]
            } else {
                state.forget_total_pages();
                vec![load_categories(&mut state), search(&mut state)]
            }
        }
        Msg::CategorySelected(tag) => {
            let country = state.filter().country();
            match tag.as_deref() {
                Some(tag)
                    if normalized(Some(tag))
                        .is_some_and(|tag| !state.catalog().accepts(country, tag)) =>
                {
                    board_debug!("Ignoring unknown category {tag:?} for {country}");
                    Vec::new()
                }
                _ => {
                    let before = state.filter().clone();
                    let category_changed = before.category() != normalized(tag.as_deref());
                    state.filter_mut().set_category(tag.as_deref());
                    if *state.filter() == before {
                        Vec::new()
                    } else {
                        if category_changed {
                            state.forget_total_pages();
                        }
                        vec![search(&mut state)]
                    }
                }
            }
        }
        Msg::PageRequested(page) => {
            let target = state.pagination().jump_to(page);
            go_to_page(&mut state, target)
        }
        Msg::NextPage => {
            let target = state.pagination().next(state.filter().page());
            go_to_page(&mut state, target)
        }
        Msg::PreviousPage => {
            let target = state.pagination().previous(state.filter().page());
            go_to_page(&mut state, target)
        }
        Msg::RefreshRequested => vec![search(&mut state)],
        Msg::SearchCompleted { epoch, result } => {
            if epoch != state.search_epoch() {
                board_debug!(
                    "Discarding stale search response {epoch} (current {})",
                    state.search_epoch()
                );
                return (state, Vec::new());
            }
            match result {
                Ok(page) => apply_page(&mut state, page),
                Err(reason) => {
                    board_warn!("Search {epoch} failed: {reason}");
                    state.commit_fetch_failure();
                    Vec::new()
                }
            }
        }
        Msg::CategoriesLoaded {
            epoch,
            country,
            categories,
        } => {
            if epoch != state.catalog_epoch() {
                board_debug!(
                    "Discarding stale catalog for {country} {epoch} (current {})",
                    state.catalog_epoch()
                );
            } else {
                board_info!("Catalog for {country} has {} categories", categories.len());
                state.set_catalog(Catalog::new(country, categories));
            }
            Vec::new()
        }
        Msg::JobDetailsRequested { job_id, auth } => match state.job_ref(&job_id) {
            None => {
                board_debug!("Ignoring details request for unknown job {job_id}");
                Vec::new()
            }
            Some(job) => match auth {
                AuthStatus::SignedIn { .. } => vec![Effect::OpenJobDetail { job }],
                AuthStatus::SignedOut => vec![Effect::PromptLogin { job }],
                AuthStatus::Loading => {
                    board_debug!("Auth still loading; ignoring details request for {job_id}");
                    Vec::new()
                }
            },
        },
    };

    (state, effects)
}

fn normalized(tag: Option<&str>) -> Option<&str> {
    tag.map(str::trim).filter(|tag| !tag.is_empty())
}

fn search(state: &mut AppState) -> Effect {
    let (epoch, query) = state.begin_search();
    board_info!(
        "Search {epoch}: {} page {} category {:?}",
        query.country,
        query.page,
        query.category
    );
    Effect::SearchJobs { epoch, query }
}

fn load_categories(state: &mut AppState) -> Effect {
    let (epoch, country) = state.begin_catalog_load();
    board_debug!("Loading catalog {epoch} for {country}");
    Effect::LoadCategories { epoch, country }
}

fn go_to_page(state: &mut AppState, target: Option<u32>) -> Vec<Effect> {
    let Some(page) = target else {
        board_debug!("Page navigation out of range; ignored");
        return Vec::new();
    };
    if page == state.filter().page() {
        return Vec::new();
    }
    let total = state.total_pages();
    if state.filter_mut().set_page(page, total) {
        vec![search(state)]
    } else {
        Vec::new()
    }
}

fn apply_page(state: &mut AppState, page: SearchResultPage) -> Vec<Effect> {
    let SearchResultPage { items, total_count } = page;
    let total_pages = if items.is_empty() {
        board_info!("Search {} returned no jobs", state.search_epoch());
        state.commit_no_results(total_count)
    } else {
        board_info!(
            "Search {} returned {} jobs of {total_count}",
            state.search_epoch(),
            items.len()
        );
        state.commit_jobs(items, total_count)
    };

    // Upstream counts can shrink between requests; keep the page in range.
    if state.filter().page() > total_pages {
        board_info!("Clamping page {} to {total_pages}", state.filter().page());
        state.filter_mut().set_page(total_pages, Some(total_pages));
        return vec![search(state)];
    }
    Vec::new()
}
