use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use cql_console::config::Config;
use cql_console::db::config::ClusterConfig;
use cql_console::db::session::ClusterSession;
use cql_console::db::SessionHandle;
use cql_console::routes;
use cql_console::state::AppState;
use cql_console::logging;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config.log_level);

    let cluster_config = ClusterConfig::from_env();
    let sessions = Arc::new(SessionHandle::new(cluster_config.clone()));

    if cluster_config.contact_points.is_empty() {
        tracing::warn!("no contact points configured, waiting for the config endpoint");
    } else {
        match ClusterSession::connect(&cluster_config).await {
            Ok(session) => {
                tracing::info!(
                    hosts = %cluster_config.contact_points.join(","),
                    port = cluster_config.port,
                    "cluster session established"
                );
                sessions.replace(Arc::new(session), cluster_config).await;
            }
            Err(err) => tracing::warn!(error = %err, "cluster session not initialized"),
        }
    }

    let state = AppState::new(sessions);
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_addr();
    tracing::info!(%addr, "cql console listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind listener failed");

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    if let Err(e) = server.await {
        tracing::error!(error = %e, "server error");
    }

    tracing::info!("HTTP server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
