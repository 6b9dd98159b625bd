pub mod config;
pub mod session;
pub mod values;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::db::config::ClusterConfig;

/// Result of one executed statement: a result set with its column order, or
/// a bare acknowledgment for statements that return no rows.
#[derive(Debug, Clone)]
pub enum StatementOutput {
    Rows {
        columns: Vec<String>,
        rows: Vec<Map<String, Value>>,
    },
    Applied,
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ExecError(pub String);

/// Execution collaborator: one statement in, an explicit outcome out. The
/// driver-backed implementation lives in [`session`]; tests substitute their
/// own.
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    async fn execute(&self, statement: &str) -> Result<StatementOutput, ExecError>;
}

struct HandleInner {
    config: ClusterConfig,
    executor: Option<Arc<dyn StatementExecutor>>,
}

/// Owned connection handle shared by the request layer. Starts unconfigured;
/// `replace` swaps in a freshly connected session together with the config it
/// was built from, and the previous session is dropped once its in-flight
/// calls finish.
pub struct SessionHandle {
    inner: RwLock<HandleInner>,
}

impl SessionHandle {
    pub fn new(config: ClusterConfig) -> Self {
        Self {
            inner: RwLock::new(HandleInner {
                config,
                executor: None,
            }),
        }
    }

    pub async fn executor(&self) -> Option<Arc<dyn StatementExecutor>> {
        self.inner.read().await.executor.clone()
    }

    pub async fn config(&self) -> ClusterConfig {
        self.inner.read().await.config.clone()
    }

    pub async fn is_connected(&self) -> bool {
        self.inner.read().await.executor.is_some()
    }

    pub async fn replace(&self, executor: Arc<dyn StatementExecutor>, config: ClusterConfig) {
        let mut guard = self.inner.write().await;
        guard.config = config;
        guard.executor = Some(executor);
    }
}
