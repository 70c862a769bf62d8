// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use axum::{extract::State, response::Redirect};
use marquee_router::UrlBuilder;

#[tracing::instrument(name = "handlers.views.index.get", skip_all)]
pub async fn get(State(urls): State<UrlBuilder>) -> Redirect {
    urls.redirect_to_index()
}
