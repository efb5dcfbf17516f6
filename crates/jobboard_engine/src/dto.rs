//! Wire shapes of the upstream API and their validation into core types.
//!
//! Anything that does not fit the typed shape is a malformed payload; no
//! partially filled objects leave this module.

use jobboard_core::{Category, JobSummary, SearchResultPage};
use serde::Deserialize;
use url::Url;

use crate::detail::description_to_markdown;
use crate::{FailureKind, FetchError, JobDetail};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<JobRecord>>,
    #[serde(default)]
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobRecord {
    id: JobIdRecord,
    title: String,
    #[serde(default)]
    location: Option<DisplayName>,
    redirect_url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    company: Option<DisplayName>,
    #[serde(default)]
    salary_min: Option<f64>,
    #[serde(default)]
    salary_max: Option<f64>,
    #[serde(default)]
    contract_time: Option<String>,
    #[serde(default)]
    created: Option<String>,
}

/// Upstream ids arrive as strings or as bare numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JobIdRecord {
    Text(String),
    Number(u64),
}

impl JobIdRecord {
    fn into_string(self) -> String {
        match self {
            JobIdRecord::Text(text) => text,
            JobIdRecord::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct DisplayName {
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    results: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    label: String,
    tag: String,
}

fn malformed(message: impl Into<String>) -> FetchError {
    FetchError::new(FailureKind::MalformedPayload, message)
}

fn parse_redirect(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|err| malformed(format!("redirect_url {raw:?}: {err}")))
}

impl SearchResponse {
    /// Absent `results` reads as an empty page; absent `count` as zero.
    pub(crate) fn into_page(self) -> Result<SearchResultPage, FetchError> {
        let items = self
            .results
            .unwrap_or_default()
            .into_iter()
            .map(JobRecord::into_summary)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SearchResultPage {
            items,
            total_count: self.count.unwrap_or(0),
        })
    }

    pub(crate) fn into_first_record(self) -> Option<JobRecord> {
        self.results.and_then(|results| results.into_iter().next())
    }
}

impl JobRecord {
    fn into_summary(self) -> Result<JobSummary, FetchError> {
        let id = self.id.into_string();
        if id.trim().is_empty() {
            return Err(malformed("job with empty id"));
        }
        Ok(JobSummary {
            redirect_url: parse_redirect(&self.redirect_url)?,
            id,
            title: self.title,
            location: self
                .location
                .and_then(|location| location.display_name)
                .unwrap_or_default(),
        })
    }

    pub(crate) fn into_detail(self) -> Result<JobDetail, FetchError> {
        Ok(JobDetail {
            redirect_url: parse_redirect(&self.redirect_url)?,
            id: self.id.into_string(),
            title: self.title,
            description: self
                .description
                .as_deref()
                .map(description_to_markdown)
                .unwrap_or_default(),
            company: self.company.and_then(|company| company.display_name),
            location: self
                .location
                .and_then(|location| location.display_name)
                .unwrap_or_default(),
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            contract_time: self.contract_time,
            created: self.created,
        })
    }
}

impl CategoriesResponse {
    pub(crate) fn into_categories(self) -> Vec<Category> {
        self.results
            .into_iter()
            .map(|record| Category::new(record.label, record.tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_search(json: &str) -> Result<SearchResultPage, FetchError> {
        serde_json::from_str::<SearchResponse>(json)
            .map_err(|err| malformed(err.to_string()))?
            .into_page()
    }

    #[test]
    fn search_payload_maps_in_order() {
        let page = parse_search(
            r#"{"count": 137, "results": [
                {"id": "11", "title": "Rust Dev", "location": {"display_name": "Leeds"},
                 "redirect_url": "https://www.adzuna.co.uk/jobs/land/ad/11", "salary_min": 50000},
                {"id": 12, "title": "Go Dev", "redirect_url": "https://www.adzuna.co.uk/jobs/land/ad/12"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(page.total_count, 137);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "11");
        assert_eq!(page.items[0].location, "Leeds");
        assert_eq!(page.items[1].id, "12");
        assert_eq!(page.items[1].location, "");
    }

    #[test]
    fn absent_results_and_count_read_as_empty_page() {
        let page = parse_search(r#"{"__CLASS__": "Adzuna::API::Response::JobSearchResults"}"#)
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn shape_mismatch_is_malformed() {
        let missing_title = parse_search(
            r#"{"count": 1, "results": [{"id": "1", "redirect_url": "https://x.example"}]}"#,
        );
        assert_eq!(
            missing_title.unwrap_err().kind,
            FailureKind::MalformedPayload
        );

        let bad_url = parse_search(
            r#"{"count": 1, "results": [{"id": "1", "title": "t", "redirect_url": "not a url"}]}"#,
        );
        assert_eq!(bad_url.unwrap_err().kind, FailureKind::MalformedPayload);
    }

    #[test]
    fn categories_require_results_field() {
        assert!(serde_json::from_str::<CategoriesResponse>(r#"{"count": 3}"#).is_err());
        let categories = serde_json::from_str::<CategoriesResponse>(
            r#"{"results": [{"label": "IT Jobs", "tag": "it-jobs", "__CLASS__": "x"}]}"#,
        )
        .unwrap()
        .into_categories();
        assert_eq!(categories, vec![Category::new("IT Jobs", "it-jobs")]);
    }
}
