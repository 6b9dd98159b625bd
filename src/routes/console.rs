use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::batch::{run_batch, BatchReport};
use crate::db::StatementOutput;
use crate::response::json_error;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct ExecuteRequest {
    query: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteResponse {
    success: bool,
    total: usize,
    succeeded: usize,
    failed: usize,
    results: Vec<StatementResultEntry>,
    errors: Vec<StatementErrorEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatementResultEntry {
    index: usize,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatementErrorEntry {
    index: usize,
    statement: String,
    error: String,
}

pub async fn execute(State(state): State<AppState>, Json(payload): Json<ExecuteRequest>) -> Response {
    if payload.query.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "EMPTY_QUERY", "query text is empty")
            .into_response();
    }

    let Some(executor) = state.sessions().executor().await else {
        return json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "NOT_CONNECTED",
            "no active cluster session, configure the connection first",
        )
        .into_response();
    };

    let report = run_batch(executor.as_ref(), &payload.query).await;
    tracing::info!(
        total = report.total,
        failed = report.failed(),
        "statement batch executed"
    );

    (StatusCode::OK, Json(to_response(report))).into_response()
}

fn to_response(report: BatchReport) -> ExecuteResponse {
    let total = report.total;
    let succeeded = report.succeeded();
    let failed = report.failed();
    let success = report.all_succeeded();

    let results = report
        .successes
        .into_iter()
        .map(|entry| match entry.output {
            StatementOutput::Rows { columns, rows } => StatementResultEntry {
                index: entry.index,
                kind: "rows",
                columns: Some(columns),
                rows: Some(rows),
                message: None,
            },
            StatementOutput::Applied => StatementResultEntry {
                index: entry.index,
                kind: "applied",
                columns: None,
                rows: None,
                message: Some("statement executed"),
            },
        })
        .collect();

    let errors = report
        .failures
        .into_iter()
        .map(|entry| StatementErrorEntry {
            index: entry.index,
            statement: entry.statement,
            error: entry.error,
        })
        .collect();

    ExecuteResponse {
        success,
        total,
        succeeded,
        failed,
        results,
        errors,
    }
}
