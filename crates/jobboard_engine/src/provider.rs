use futures_util::StreamExt;
use jobboard_core::{Category, Country, JobRef, SearchQuery, SearchResultPage};
use jobboard_logging::board_debug;
use serde::de::DeserializeOwned;
use url::Url;

use crate::dto::{CategoriesResponse, JobRecord, SearchResponse};
use crate::{FailureKind, FetchError, JobDetail, ProviderSettings};

/// The upstream job-search capability.
///
/// Every call is independent: results are never accumulated across queries.
#[async_trait::async_trait]
pub trait JobProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResultPage, FetchError>;

    async fn categories(&self, country: Country) -> Result<Vec<Category>, FetchError>;

    async fn job_detail(&self, job: &JobRef) -> Result<JobDetail, FetchError>;
}

/// [`JobProvider`] backed by the Adzuna REST API.
#[derive(Debug, Clone)]
pub struct AdzunaProvider {
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl AdzunaProvider {
    pub fn new(settings: ProviderSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// `{base}/{segments..}?app_id=..&app_key=..&{params..}`
    fn endpoint(&self, segments: &[&str], params: &[(&str, String)]) -> Result<Url, FetchError> {
        let credentials = self.settings.credentials.as_ref().ok_or_else(|| {
            FetchError::new(
                FailureKind::MissingCredentials,
                "set ADZUNA_APP_ID and ADZUNA_APP_KEY",
            )
        })?;

        let mut url = self.settings.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("app_id", &credentials.app_id)
            .append_pair("app_key", &credentials.app_key)
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
        Ok(url)
    }

    pub(crate) async fn search_raw(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<SearchResponse, FetchError> {
        let url = self.endpoint(segments, params)?;
        self.get_json(url).await
    }

    pub(crate) async fn get_record(&self, job: &JobRef) -> Result<JobRecord, FetchError> {
        let url = self.endpoint(&[job.country.code(), "get", job.id.as_str()], &[])?;
        self.get_json(url).await
    }

    /// GET `url` and decode its JSON body, enforcing status and size limits.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        board_debug!("GET {}{}", url.host_str().unwrap_or_default(), url.path());
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))
    }
}

#[async_trait::async_trait]
impl JobProvider for AdzunaProvider {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResultPage, FetchError> {
        let page = query.page.to_string();
        let response = self
            .search_raw(&[query.country.code(), "search", page.as_str()], &query.params())
            .await?;
        response.into_page()
    }

    async fn categories(&self, country: Country) -> Result<Vec<Category>, FetchError> {
        let url = self.endpoint(&[country.code(), "categories"], &[])?;
        let response: CategoriesResponse = self.get_json(url).await?;
        Ok(response.into_categories())
    }

    async fn job_detail(&self, job: &JobRef) -> Result<JobDetail, FetchError> {
        crate::detail::fetch_detail(self, job).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::MalformedPayload, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
