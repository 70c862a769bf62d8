// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use axum::Router;
use marquee_config::ConfigurationError;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Assemble the full application router: the frontend routes from the route
/// table, plus request tracing.
pub fn build_router(state: AppState) -> Result<Router, ConfigurationError> {
    let router = marquee_handlers::frontend_router::<AppState>(&state.site, &state.urls)?;

    Ok(router
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Bind the configured address and serve until the process is stopped
pub async fn serve(address: &str, router: Router) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("could not bind {address}"))?;

    tracing::info!(address, version = crate::VERSION, "Listening");
    axum::serve(listener, router)
        .await
        .context("server terminated")
}
