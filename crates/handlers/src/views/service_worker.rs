// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};
use marquee_config::SiteConfig;
use marquee_router::UrlBuilder;
use marquee_templates::{SiteContext, Templates};

use super::no_cache;
use crate::{BasePath, InternalError};

#[tracing::instrument(name = "handlers.views.service_worker.get", skip_all)]
pub async fn get(
    State(templates): State<Templates>,
    State(site): State<Arc<SiteConfig>>,
    State(urls): State<UrlBuilder>,
    BasePath(base_path): BasePath,
) -> Result<impl IntoResponse, InternalError> {
    let context = SiteContext::new(&site)?.with_navigation_base(&urls, &base_path);

    let content = templates.render_service_worker(&context)?;

    Ok((
        no_cache(),
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=\"utf-8\"",
        )],
        content,
    ))
}
