//! Local sign-in session: the auth capability handed to the core as
//! [`AuthStatus`] snapshots.
//!
//! The login time is persisted so a session survives restarts, and a
//! session older than [`SESSION_EXPIRATION_DAYS`] is dropped.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use jobboard_core::AuthStatus;
use jobboard_logging::{board_info, board_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

pub const SESSION_FILENAME: &str = ".jobboard_session.ron";
pub const SESSION_EXPIRATION_DAYS: i64 = 7;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode session: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct PersistedSession {
    user: String,
    /// RFC3339 timestamp of the last login.
    last_login: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SignedIn {
    user: String,
    last_login: DateTime<Utc>,
}

#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    current: Option<SignedIn>,
}

impl Session {
    /// Restores the session stored at `path`. Unreadable or malformed files
    /// count as signed out.
    pub fn load(path: impl Into<PathBuf>, now: DateTime<Utc>) -> Self {
        let path = path.into();
        let current = read_persisted(&path).and_then(|persisted| {
            match DateTime::parse_from_rfc3339(&persisted.last_login) {
                Ok(at) => Some(SignedIn {
                    user: persisted.user,
                    last_login: at.with_timezone(&Utc),
                }),
                Err(err) => {
                    board_warn!("Ignoring session with bad timestamp: {err}");
                    None
                }
            }
        });
        let mut session = Self { path, current };
        session.expire_if_stale(now);
        session
    }

    pub fn status(&self) -> AuthStatus {
        match &self.current {
            Some(signed_in) => AuthStatus::SignedIn {
                user: signed_in.user.clone(),
            },
            None => AuthStatus::SignedOut,
        }
    }

    pub fn login(&mut self, user: &str, now: DateTime<Utc>) -> Result<(), SessionError> {
        let signed_in = SignedIn {
            user: user.trim().to_string(),
            last_login: now,
        };
        write_persisted(
            &self.path,
            &PersistedSession {
                user: signed_in.user.clone(),
                last_login: now.to_rfc3339(),
            },
        )?;
        board_info!("Signed in as {}", signed_in.user);
        self.current = Some(signed_in);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.current = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Signs out when the last login is older than [`SESSION_EXPIRATION_DAYS`].
    /// Returns whether the session was expired.
    pub fn expire_if_stale(&mut self, now: DateTime<Utc>) -> bool {
        let max_age = TimeDelta::days(SESSION_EXPIRATION_DAYS);
        let stale = self
            .current
            .as_ref()
            .is_some_and(|signed_in| now - signed_in.last_login > max_age);
        if !stale {
            return false;
        }
        board_info!("Session expired");
        if let Err(err) = self.logout() {
            board_warn!("Failed to remove expired session: {err}");
        }
        true
    }
}

fn read_persisted(path: &Path) -> Option<PersistedSession> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            board_warn!("Failed to read session from {:?}: {}", path, err);
            return None;
        }
    };
    match ron::from_str(&content) {
        Ok(session) => Some(session),
        Err(err) => {
            board_warn!("Failed to parse session from {:?}: {}", path, err);
            None
        }
    }
}

/// Writes through a temp file in the same directory, then renames.
fn write_persisted(path: &Path, session: &PersistedSession) -> Result<(), SessionError> {
    let content = ron::ser::to_string_pretty(session, ron::ser::PrettyConfig::new())
        .map_err(|err| SessionError::Encode(err.to_string()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|err| SessionError::Io(err.error))?;
    Ok(())
}
