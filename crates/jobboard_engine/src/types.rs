use std::fmt;

use jobboard_core::{Category, Country, JobRef, RequestEpoch, SearchResultPage};
use url::Url;

/// Full details of a single job, as shown behind the login gate.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    /// Description rendered from upstream HTML to Markdown text.
    pub description: String,
    pub company: Option<String>,
    pub location: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub contract_time: Option<String>,
    pub created: Option<String>,
    pub redirect_url: Url,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchCompleted {
        epoch: RequestEpoch,
        result: Result<SearchResultPage, FetchError>,
    },
    /// Catalog loads never fail; failures arrive as an empty list.
    CategoriesLoaded {
        epoch: RequestEpoch,
        country: Country,
        categories: Vec<Category>,
    },
    DetailCompleted {
        job: JobRef,
        result: Result<JobDetail, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredentials,
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedPayload,
    NotFound,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::MissingCredentials => write!(f, "missing api credentials"),
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedPayload => write!(f, "malformed payload"),
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
