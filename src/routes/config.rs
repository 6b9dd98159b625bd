use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::config::ClusterConfig;
use crate::db::session::ClusterSession;
use crate::response::json_error;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionInfoResponse {
    hosts: String,
    port: u16,
    username: String,
    keyspace: String,
    connected: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateConfigRequest {
    hosts: String,
    port: u16,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    keyspace: String,
}

#[derive(Debug, Serialize)]
struct UpdateConfigResponse {
    success: bool,
    message: &'static str,
}

pub async fn get_config(State(state): State<AppState>) -> Response {
    let sessions = state.sessions();
    let config = sessions.config().await;
    let connected = sessions.is_connected().await;

    // The password is deliberately not echoed back.
    Json(ConnectionInfoResponse {
        hosts: config.contact_points.join(","),
        port: config.port,
        username: config.username,
        keyspace: config.keyspace,
        connected,
    })
    .into_response()
}

pub async fn update_config(
    State(state): State<AppState>,
    Json(payload): Json<UpdateConfigRequest>,
) -> Response {
    let config = match ClusterConfig::parse(
        &payload.hosts,
        payload.port,
        &payload.username,
        &payload.password,
        &payload.keyspace,
    ) {
        Ok(config) => config,
        Err(err) => {
            return json_error(StatusCode::BAD_REQUEST, "INVALID_CONFIG", err.to_string())
                .into_response();
        }
    };

    // Connect first, swap only on success: a failed reconfiguration leaves
    // the previous session in place.
    match ClusterSession::connect(&config).await {
        Ok(session) => {
            tracing::info!(
                hosts = %config.contact_points.join(","),
                port = config.port,
                "cluster connection reconfigured"
            );
            state.sessions().replace(Arc::new(session), config).await;

            Json(UpdateConfigResponse {
                success: true,
                message: "connected to cluster",
            })
            .into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "cluster reconnection failed");
            json_error(
                StatusCode::BAD_REQUEST,
                "CONNECTION_FAILED",
                format!("connection failed: {err}"),
            )
            .into_response()
        }
    }
}
