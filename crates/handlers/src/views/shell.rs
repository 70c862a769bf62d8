// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::{
    extract::State,
    http::Uri,
    response::{Html, IntoResponse},
};
use marquee_config::SiteConfig;
use marquee_router::UrlBuilder;
use marquee_templates::{SiteContext, Templates};

use super::no_cache;
use crate::{BasePath, InternalError};

#[tracing::instrument(name = "handlers.views.shell.get", skip_all)]
pub async fn get(
    State(templates): State<Templates>,
    State(site): State<Arc<SiteConfig>>,
    State(urls): State<UrlBuilder>,
    BasePath(base_path): BasePath,
    uri: Uri,
) -> Result<impl IntoResponse, InternalError> {
    // The shell is rendered for every sub-path, supporting client-side
    // routing; the requested depth decides how relative asset URLs resolve
    let sub_path = urls.frontend_sub_path(uri.path());

    let context = SiteContext::new(&site)?
        .with_navigation_base(&urls, &base_path)
        .at_request_path(&urls, sub_path, 0);

    let content = templates.render_shell(&context)?;

    Ok((no_cache(), Html(content)))
}
