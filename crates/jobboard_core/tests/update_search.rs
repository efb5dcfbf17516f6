mod common;

use common::{init_logging, job, page_of, search_epoch, started_with};
use jobboard_core::{
    update, AppState, Country, Effect, FetchStatus, Msg, SearchFailure, SearchQuery, StatusView,
};
use pretty_assertions::assert_eq;

#[test]
fn start_loads_catalog_and_searches_default_filter() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);

    assert_eq!(state.status(), FetchStatus::Loading);
    assert_eq!(
        effects,
        vec![
            Effect::LoadCategories {
                epoch: state.catalog_epoch(),
                country: Country::Gb,
            },
            Effect::SearchJobs {
                epoch: state.search_epoch(),
                query: SearchQuery {
                    country: Country::Gb,
                    page: 1,
                    page_size: 21,
                    category: None,
                },
            },
        ]
    );
    match &effects[1] {
        Effect::SearchJobs { query, .. } => {
            assert_eq!(query.params(), vec![("results_per_page", "21".to_string())]);
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn successful_page_replaces_jobs_and_computes_total_pages() {
    init_logging();
    let ids: Vec<String> = (1..=20).map(|i| i.to_string()).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    let mut state = started_with(page_of(&ids, 137));

    assert_eq!(state.status(), FetchStatus::Success);
    assert_eq!(state.total_pages(), Some(7));
    assert_eq!(state.jobs().len(), 20);
    assert_eq!(state.jobs()[0], job("1"));
    assert_eq!(state.view().status, StatusView::Ready { total_count: 137 });
    assert!(state.consume_dirty());

    // A later success replaces the list wholesale.
    let (state, effects) = update(state, Msg::NextPage);
    let epoch = search_epoch(&effects);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            epoch,
            result: Ok(page_of(&["x", "y"], 137)),
        },
    );
    let ids: Vec<_> = state.jobs().iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y"]);
}

#[test]
fn empty_results_are_no_results_error_with_one_page() {
    init_logging();
    let state = started_with(page_of(&[], 0));

    assert_eq!(state.status(), FetchStatus::Error(SearchFailure::NoResults));
    assert_eq!(state.total_pages(), Some(1));
    assert!(state.jobs().is_empty());
    assert_eq!(
        state.view().status,
        StatusView::Message("No jobs found.".to_string())
    );
}

#[test]
fn transport_failure_is_fetch_failed_error() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let epoch = search_epoch(&effects);
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            epoch,
            result: Err("timeout".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.status(), FetchStatus::Error(SearchFailure::FetchFailed));
    assert_eq!(
        state.view().status,
        StatusView::Message("Failed to fetch jobs.".to_string())
    );
}

#[test]
fn failure_is_not_retried_until_filter_changes() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let epoch = search_epoch(&effects);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            epoch,
            result: Err("network".to_string()),
        },
    );
    let (state, effects) = update(state, Msg::CategorySelected(None));
    assert!(effects.is_empty());
    assert_eq!(
        state.status(),
        FetchStatus::Error(SearchFailure::FetchFailed)
    );

    let (state, effects) = update(state, Msg::CountrySelected(Country::Us));
    assert_eq!(state.status(), FetchStatus::Loading);
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::SearchJobs { .. })));
}

#[test]
fn late_response_from_earlier_epoch_is_discarded() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let first = search_epoch(&effects);

    let (state, effects) = update(state, Msg::PageRequested(2));
    let second = search_epoch(&effects);
    assert!(second > first);
    assert_eq!(state.filter().page(), 2);

    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            epoch: second,
            result: Ok(page_of(&["page-two"], 50)),
        },
    );
    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            epoch: first,
            result: Ok(page_of(&["page-one"], 50)),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.jobs()[0].id, "page-two");
    assert_eq!(state.status(), FetchStatus::Success);
}

#[test]
fn only_latest_epoch_is_observable_in_any_arrival_order() {
    init_logging();
    for latest_first in [true, false] {
        for stale_fails in [true, false] {
            let (state, effects) = update(AppState::new(), Msg::Started);
            let stale = search_epoch(&effects);
            let (state, effects) = update(state, Msg::CountrySelected(Country::Ca));
            let latest = search_epoch(&effects);

            let stale_msg = Msg::SearchCompleted {
                epoch: stale,
                result: if stale_fails {
                    Err("boom".to_string())
                } else {
                    Ok(page_of(&["stale"], 1))
                },
            };
            let latest_msg = Msg::SearchCompleted {
                epoch: latest,
                result: Ok(page_of(&["latest"], 1)),
            };
            let order = if latest_first {
                [latest_msg, stale_msg]
            } else {
                [stale_msg, latest_msg]
            };

            let state = order
                .into_iter()
                .fold(state, |state, msg| update(state, msg).0);
            assert_eq!(state.status(), FetchStatus::Success);
            assert_eq!(state.jobs()[0].id, "latest");
        }
    }
}

#[test]
fn stale_response_while_loading_keeps_loading() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started);
    let stale = search_epoch(&effects);
    let (state, _) = update(state, Msg::CountrySelected(Country::Au));
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            epoch: stale,
            result: Ok(page_of(&["old"], 1)),
        },
    );

    assert_eq!(state.status(), FetchStatus::Loading);
    assert!(state.jobs().is_empty());
}

#[test]
fn refresh_reissues_same_query_under_new_epoch() {
    init_logging();
    let state = started_with(page_of(&["a"], 1));
    let before = state.search_epoch();
    let query = state.current_query();

    let (state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(
        effects,
        vec![Effect::SearchJobs {
            epoch: state.search_epoch(),
            query,
        }]
    );
    assert!(state.search_epoch() > before);
    assert_eq!(state.status(), FetchStatus::Loading);
}

#[test]
fn shrinking_count_clamps_page_and_refetches() {
    init_logging();
    let state = started_with(page_of(&["a"], 210));
    assert_eq!(state.total_pages(), Some(10));
    let (state, _) = update(state, Msg::PageRequested(9));
    let epoch = state.search_epoch();

    let (state, effects) = update(
        state,
        Msg::SearchCompleted {
            epoch,
            result: Ok(page_of(&[], 60)),
        },
    );

    assert_eq!(state.total_pages(), Some(3));
    assert_eq!(state.filter().page(), 3);
    assert_eq!(state.status(), FetchStatus::Loading);
    match effects.as_slice() {
        [Effect::SearchJobs { query, .. }] => assert_eq!(query.page, 3),
        other => panic!("unexpected effects {other:?}"),
    }
}
