//! Job board engine: upstream provider access and effect execution.
mod catalog;
mod detail;
mod dto;
mod engine;
mod provider;
mod settings;
mod types;

pub use catalog::load_catalog;
pub use detail::description_to_markdown;
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use provider::{AdzunaProvider, JobProvider};
pub use settings::{Credentials, ProviderSettings, DEFAULT_BASE_URL};
pub use types::{EngineEvent, FailureKind, FetchError, JobDetail};
