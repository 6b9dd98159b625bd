pub mod config;
pub mod core;
pub mod db;
pub mod logging;
pub mod response;
pub mod routes;
pub mod state;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::config::ClusterConfig;
use crate::db::session::ClusterSession;
use crate::db::SessionHandle;
use crate::state::AppState;

pub async fn create_app() -> axum::Router {
    let cluster_config = ClusterConfig::from_env();
    let sessions = Arc::new(SessionHandle::new(cluster_config.clone()));

    if !cluster_config.contact_points.is_empty() {
        match ClusterSession::connect(&cluster_config).await {
            Ok(session) => sessions.replace(Arc::new(session), cluster_config).await,
            Err(err) => tracing::warn!(error = %err, "cluster session not initialized"),
        }
    }

    routes::router(AppState::new(sessions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
