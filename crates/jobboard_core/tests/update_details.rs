mod common;

use common::{init_logging, page_of, started_with};
use jobboard_core::{update, AuthStatus, Country, Effect, JobRef, Msg};

fn details(job_id: &str, auth: AuthStatus) -> Msg {
    Msg::JobDetailsRequested {
        job_id: job_id.to_string(),
        auth,
    }
}

#[test]
fn signed_in_user_opens_job_detail() {
    init_logging();
    let state = started_with(page_of(&["42", "43"], 2));
    let (_state, effects) = update(
        state,
        details(
            "43",
            AuthStatus::SignedIn {
                user: "ada".to_string(),
            },
        ),
    );

    assert_eq!(
        effects,
        vec![Effect::OpenJobDetail {
            job: JobRef {
                country: Country::Gb,
                id: "43".to_string(),
            },
        }]
    );
}

#[test]
fn signed_out_user_is_prompted_to_log_in() {
    init_logging();
    let state = started_with(page_of(&["42"], 1));
    let (_state, effects) = update(state, details("42", AuthStatus::SignedOut));

    assert!(matches!(
        effects.as_slice(),
        [Effect::PromptLogin { job }] if job.id == "42"
    ));
}

#[test]
fn loading_auth_or_unknown_job_does_nothing() {
    init_logging();
    let state = started_with(page_of(&["42"], 1));
    let (state, effects) = update(state, details("42", AuthStatus::Loading));
    assert!(effects.is_empty());

    let (_state, effects) = update(
        state,
        details(
            "99",
            AuthStatus::SignedIn {
                user: "ada".to_string(),
            },
        ),
    );
    assert!(effects.is_empty());
}

#[test]
fn details_keep_country_of_listed_jobs_while_next_country_loads() {
    init_logging();
    let state = started_with(page_of(&["gb-42"], 1));
    let (state, _) = update(state, Msg::CountrySelected(Country::Us));
    assert_eq!(state.jobs()[0].id, "gb-42");

    let (_state, effects) = update(
        state,
        details(
            "gb-42",
            AuthStatus::SignedIn {
                user: "ada".to_string(),
            },
        ),
    );

    assert_eq!(
        effects,
        vec![Effect::OpenJobDetail {
            job: JobRef {
                country: Country::Gb,
                id: "gb-42".to_string(),
            },
        }]
    );
}
