use std::sync::mpsc;
use std::thread;

use jobboard_core::{Effect, JobRef, Msg};
use jobboard_engine::{EngineEvent, EngineEvents, EngineHandle, FetchError, JobDetail};
use jobboard_logging::{board_debug, board_info};

/// Everything the control loop reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    InputClosed,
    Core(Msg),
    Detail {
        job: JobRef,
        result: Result<JobDetail, FetchError>,
    },
}

/// Effects the runner cannot execute itself and hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoginRequired(JobRef),
}

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, events: EngineEvents, tx: mpsc::Sender<AppEvent>) -> Self {
        spawn_event_forwarder(events, tx);
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::SearchJobs { epoch, query } => {
                    board_debug!("Dispatching search {epoch} {}", query.path());
                    self.engine.search(epoch, query);
                }
                Effect::LoadCategories { epoch, country } => {
                    self.engine.load_categories(epoch, country);
                }
                Effect::OpenJobDetail { job } => {
                    board_info!("Fetching details for {}/{}", job.country, job.id);
                    self.engine.job_detail(job);
                }
                Effect::PromptLogin { job } => notices.push(Notice::LoginRequired(job)),
            }
        }
        notices
    }
}

fn spawn_event_forwarder(events: EngineEvents, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if tx.send(to_app_event(event)).is_err() {
                break;
            }
        }
    });
}

fn to_app_event(event: EngineEvent) -> AppEvent {
    match event {
        EngineEvent::SearchCompleted { epoch, result } => AppEvent::Core(Msg::SearchCompleted {
            epoch,
            result: result.map_err(|err| err.to_string()),
        }),
        EngineEvent::CategoriesLoaded {
            epoch,
            country,
            categories,
        } => AppEvent::Core(Msg::CategoriesLoaded {
            epoch,
            country,
            categories,
        }),
        EngineEvent::DetailCompleted { job, result } => AppEvent::Detail { job, result },
    }
}
