use std::time::Duration;

use async_trait::async_trait;
use scylla::frame::response::result::Row;
use scylla::transport::errors::NewSessionError;
use scylla::{Session, SessionBuilder};
use thiserror::Error;

use crate::db::config::ClusterConfig;
use crate::db::values::cell_to_json;
use crate::db::{ExecError, StatementExecutor, StatementOutput};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("{0}")]
    Session(#[from] NewSessionError),
}

/// Driver-backed executor. Pooling, retries, consistency and node balancing
/// all live in the driver; this type only builds the session and maps query
/// results into [`StatementOutput`].
pub struct ClusterSession {
    session: Session,
}

impl ClusterSession {
    pub async fn connect(config: &ClusterConfig) -> Result<Self, ConnectError> {
        let nodes: Vec<String> = config
            .contact_points
            .iter()
            .map(|host| format!("{host}:{}", config.port))
            .collect();

        let mut builder = SessionBuilder::new()
            .known_nodes(&nodes)
            .connection_timeout(CONNECT_TIMEOUT);

        if !config.username.is_empty() && !config.password.is_empty() {
            builder = builder.user(config.username.as_str(), config.password.as_str());
        }

        if !config.keyspace.is_empty() {
            builder = builder.use_keyspace(config.keyspace.as_str(), false);
        }

        let session = builder.build().await?;
        Ok(Self { session })
    }
}

#[async_trait]
impl StatementExecutor for ClusterSession {
    async fn execute(&self, statement: &str) -> Result<StatementOutput, ExecError> {
        let result = self
            .session
            .query_unpaged(statement, &())
            .await
            .map_err(|err| ExecError(err.to_string()))?;

        // Conversion fails for statements that return no result set
        // (DDL, INSERT, ...); those are acknowledged as applied.
        let rows_result = match result.into_rows_result() {
            Ok(rows_result) => rows_result,
            Err(_) => return Ok(StatementOutput::Applied),
        };

        let columns: Vec<String> = rows_result
            .column_specs()
            .iter()
            .map(|spec| spec.name().to_string())
            .collect();

        let mut rows = Vec::new();
        for row in rows_result
            .rows::<Row>()
            .map_err(|err| ExecError(err.to_string()))?
        {
            let row = row.map_err(|err| ExecError(err.to_string()))?;

            let mut mapped = serde_json::Map::new();
            for (name, cell) in columns.iter().zip(row.columns) {
                mapped.insert(name.clone(), cell_to_json(cell));
            }
            rows.push(mapped);
        }

        Ok(StatementOutput::Rows { columns, rows })
    }
}
