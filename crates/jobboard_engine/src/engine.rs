use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobboard_core::{Country, JobRef, RequestEpoch, SearchQuery};
use jobboard_logging::board_debug;

use crate::catalog::load_catalog;
use crate::{AdzunaProvider, EngineEvent, FetchError, JobProvider, ProviderSettings};

enum EngineCommand {
    Search {
        epoch: RequestEpoch,
        query: SearchQuery,
    },
    LoadCategories {
        epoch: RequestEpoch,
        country: Country,
    },
    JobDetail {
        job: JobRef,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

/// Sends requests to the background engine.
///
/// Requests run concurrently and complete in any order; each completion
/// carries the epoch or job it was issued for so the caller can drop
/// stale ones. Nothing is ever cancelled at the transport level.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving side of the engine's completion events.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts an engine talking to the Adzuna API.
    pub fn new(settings: ProviderSettings) -> Result<(Self, EngineEvents), EngineError> {
        let provider = AdzunaProvider::new(settings)?;
        Self::with_provider(Arc::new(provider))
    }

    pub fn with_provider(
        provider: Arc<dyn JobProvider>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let provider = provider.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(provider.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            board_debug!("Engine command channel closed");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn search(&self, epoch: RequestEpoch, query: SearchQuery) {
        let _ = self.cmd_tx.send(EngineCommand::Search { epoch, query });
    }

    pub fn load_categories(&self, epoch: RequestEpoch, country: Country) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::LoadCategories { epoch, country });
    }

    pub fn job_detail(&self, job: JobRef) {
        let _ = self.cmd_tx.send(EngineCommand::JobDetail { job });
    }
}

impl EngineEvents {
    /// Blocks until the next completion; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(provider: &dyn JobProvider, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Search { epoch, query } => {
            let result = provider.search(&query).await;
            EngineEvent::SearchCompleted { epoch, result }
        }
        EngineCommand::LoadCategories { epoch, country } => {
            let categories = load_catalog(provider, country).await;
            EngineEvent::CategoriesLoaded {
                epoch,
                country,
                categories,
            }
        }
        EngineCommand::JobDetail { job } => {
            let result = provider.job_detail(&job).await;
            EngineEvent::DetailCompleted { job, result }
        }
    }
}
