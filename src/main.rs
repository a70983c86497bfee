// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use multisig_wallet_server::{
    api::router, config::ServerConfig, logging, multisig::AuthorizationEngine, state::AppState,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env();

    if let Err(e) = logging::init(config.log_format) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let state = AppState::new(AuthorizationEngine::in_memory());
    let app = router(state);

    let addr = config.bind_addr().expect("Failed to parse bind address");
    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    info!(%addr, "Multisig wallet server listening (docs at /docs)");

    let shutdown = CancellationToken::new();
    tokio::spawn(watch_signals(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .expect("HTTP server failed");

    info!("Server stopped");
}

/// Cancel `shutdown` on Ctrl-C or SIGTERM.
async fn watch_signals(shutdown: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
    shutdown.cancel();
}
