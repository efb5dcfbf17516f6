use crate::{Country, JobRef, RequestEpoch, SearchQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SearchJobs {
        epoch: RequestEpoch,
        query: SearchQuery,
    },
    LoadCategories {
        epoch: RequestEpoch,
        country: Country,
    },
    OpenJobDetail { job: JobRef },
    /// Details were requested while signed out.
    PromptLogin { job: JobRef },
}
