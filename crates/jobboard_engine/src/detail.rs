use jobboard_core::JobRef;
use jobboard_logging::{board_debug, board_info};

use crate::provider::AdzunaProvider;
use crate::{FailureKind, FetchError, JobDetail};

/// Looks a job up directly, falling back to a one-result search on its id
/// when the direct lookup answers with a non-success status.
pub(crate) async fn fetch_detail(
    provider: &AdzunaProvider,
    job: &JobRef,
) -> Result<JobDetail, FetchError> {
    match provider.get_record(job).await {
        Ok(record) => record.into_detail(),
        Err(FetchError {
            kind: FailureKind::HttpStatus(code),
            ..
        }) => {
            board_info!(
                "Direct lookup of {}/{} returned {code}; searching instead",
                job.country,
                job.id
            );
            let params = [
                ("results_per_page", "1".to_string()),
                ("what_or", job.id.clone()),
            ];
            let response = provider
                .search_raw(&[job.country.code(), "search", "1"], &params)
                .await?;
            match response.into_first_record() {
                Some(record) => record.into_detail(),
                None => {
                    board_debug!("No search hit for job {}", job.id);
                    Err(FetchError::new(FailureKind::NotFound, "Job not found"))
                }
            }
        }
        Err(err) => Err(err),
    }
}

/// Renders an upstream HTML description as Markdown, dropping blank-line runs.
pub fn description_to_markdown(html: &str) -> String {
    let markdown = html2md::parse_html(html);
    let mut out = String::with_capacity(markdown.len());
    let mut blank_run = 0;
    for line in markdown.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out.trim().to_string()
}
