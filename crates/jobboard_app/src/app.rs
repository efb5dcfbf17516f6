use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use chrono::Utc;
use jobboard_core::{update, AppState, Msg};
use jobboard_engine::{EngineHandle, FailureKind};
use jobboard_logging::{board_info, board_warn};

use crate::config::{credentials_from_env, AppConfig};
use crate::effects::{AppEvent, EffectRunner, Notice};
use crate::input::{self, Command, HELP};
use crate::render;
use crate::session::{Session, SESSION_FILENAME};

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let credentials = credentials_from_env();
    if credentials.is_none() {
        board_warn!("ADZUNA_APP_ID/ADZUNA_APP_KEY not set; searches will fail");
    }
    let settings = config
        .provider_settings(credentials)
        .context("invalid provider settings")?;
    let country = config.country().context("invalid default_country")?;
    let (engine, events) = EngineHandle::new(settings).context("failed to start engine")?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_input_reader(tx.clone());
    let runner = EffectRunner::new(engine, events, tx);

    let mut app = App {
        state: AppState::with_settings(country, config.page_size, config.page_window),
        session: Session::load(SESSION_FILENAME, Utc::now()),
        runner,
        out: io::stdout(),
    };

    app.print(HELP)?;
    app.dispatch(Msg::Started)?;
    while let Ok(event) = rx.recv() {
        match event {
            AppEvent::Line(line) => {
                if !app.handle_line(&line)? {
                    break;
                }
            }
            AppEvent::InputClosed => break,
            AppEvent::Core(msg) => app.dispatch(msg)?,
            AppEvent::Detail { job, result } => match result {
                Ok(detail) => app.print(&render::render_detail(&detail))?,
                Err(err) if err.kind == FailureKind::NotFound => {
                    board_info!("Job {}/{} not found", job.country, job.id);
                    app.print("Job not found.")?;
                }
                Err(err) => {
                    board_warn!("Details for {}/{} failed: {err}", job.country, job.id);
                    app.print("Failed to load job details.")?;
                }
            },
        }
    }
    board_info!("Exiting");
    Ok(())
}

struct App {
    state: AppState,
    session: Session,
    runner: EffectRunner,
    out: io::Stdout,
}

impl App {
    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{}", text.trim_end())?;
        out.flush()
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        for notice in self.runner.run(effects) {
            match notice {
                Notice::LoginRequired(job) => {
                    self.print(&format!("Log in to view job {} (login <name>).", job.id))?;
                }
            }
        }
        if was_dirty {
            self.print(&render::render(&view))?;
        }
        Ok(())
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        if self.session.expire_if_stale(Utc::now()) {
            self.print("Your session expired; please log in again.")?;
        }
        let command = match input::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(err) => {
                self.print(&err.to_string())?;
                return Ok(true);
            }
        };

        match command {
            Command::Country(country) => self.dispatch(Msg::CountrySelected(country))?,
            Command::Category(tag) => {
                // Accept labels as well as tags.
                let tag = tag.map(|tag| {
                    self.state
                        .catalog()
                        .tag_for(&tag)
                        .map(ToOwned::to_owned)
                        .unwrap_or(tag)
                });
                self.dispatch(Msg::CategorySelected(tag))?;
            }
            Command::Categories(filter) => {
                let text = render::render_categories(self.state.catalog(), &filter);
                self.print(&text)?;
            }
            Command::Page(page) => self.dispatch(Msg::PageRequested(page))?,
            Command::Next => self.dispatch(Msg::NextPage)?,
            Command::Previous => self.dispatch(Msg::PreviousPage)?,
            Command::Refresh => self.dispatch(Msg::RefreshRequested)?,
            Command::Open(job_id) => {
                let auth = self.session.status();
                self.dispatch(Msg::JobDetailsRequested { job_id, auth })?;
            }
            Command::Login(user) => match self.session.login(&user, Utc::now()) {
                Ok(()) => self.print(&format!("Signed in as {}.", user.trim()))?,
                Err(err) => {
                    board_warn!("Login failed: {err}");
                    self.print("Login failed.")?;
                }
            },
            Command::Logout => match self.session.logout() {
                Ok(()) => self.print("Signed out.")?,
                Err(err) => {
                    board_warn!("Logout failed: {err}");
                    self.print("Logout failed.")?;
                }
            },
            Command::Help => self.print(HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}
