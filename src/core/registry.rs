//! One [`RegenerationSession`] per project root, shared between requests.

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
};

use thiserror::Error;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use super::session::RegenerationSession;
use crate::config::Settings;

#[derive(Debug, Error)]
#[error("a schema regeneration is already running for {}", root.display())]
pub struct SessionBusy {
    pub root: PathBuf,
}

type SharedSession = Arc<AsyncMutex<RegenerationSession>>;

#[derive(Default, Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<PathBuf, SharedSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, settings: &Settings) -> SharedSession {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            sessions
                .entry(settings.project_root.clone())
                .or_insert_with(|| {
                    Arc::new(AsyncMutex::new(RegenerationSession::new(settings.clone())))
                }),
        )
    }

    /// Claim the session for a regeneration attempt.
    ///
    /// Fails instead of waiting when another attempt holds the session.
    pub fn try_begin(
        &self,
        settings: Settings,
    ) -> Result<OwnedMutexGuard<RegenerationSession>, SessionBusy> {
        let mut session = self
            .entry(&settings)
            .try_lock_owned()
            .map_err(|_| SessionBusy {
                root: settings.project_root.clone(),
            })?;
        session.reconfigure(settings);
        Ok(session)
    }

    /// Wait for the session, for read-only commands.
    pub async fn get(&self, settings: Settings) -> OwnedMutexGuard<RegenerationSession> {
        let mut session = self.entry(&settings).lock_owned().await;
        session.reconfigure(settings);
        session
    }
}
