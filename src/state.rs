use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::db::SessionHandle;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    sessions: Arc<SessionHandle>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionHandle>) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            sessions,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn sessions(&self) -> Arc<SessionHandle> {
        Arc::clone(&self.sessions)
    }
}
