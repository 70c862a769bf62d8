// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use marquee_config::SiteConfig;
use marquee_router::UrlBuilder;
use marquee_templates::{SiteContext, Templates};
use serde::Deserialize;

use super::no_cache;
use crate::{BasePath, InternalError};

/// Query parameters overriding individual manifest fields, so a deployment
/// can customize the installed application without rebuilding
#[derive(Debug, Deserialize)]
pub struct Params {
    display_name: Option<String>,
    display_short_name: Option<String>,
    description: Option<String>,
    version: Option<String>,
    theme_color: Option<String>,
    background_color: Option<String>,
}

#[tracing::instrument(name = "handlers.views.manifest.get", skip_all)]
pub async fn get(
    State(templates): State<Templates>,
    State(site): State<Arc<SiteConfig>>,
    State(urls): State<UrlBuilder>,
    BasePath(base_path): BasePath,
    Query(params): Query<Params>,
) -> Result<impl IntoResponse, InternalError> {
    // The manifest lives one level below the frontend index, hence the
    // depth offset
    let mut context = SiteContext::new(&site)?
        .with_navigation_base(&urls, &base_path)
        .at_request_path(&urls, "", 1);

    for (key, value) in [
        ("display_name", params.display_name),
        ("display_short_name", params.display_short_name),
        ("description", params.description),
        ("version", params.version),
        ("theme_color", params.theme_color),
        ("background_color", params.background_color),
    ] {
        if let Some(value) = value {
            context.insert(key, value);
        }
    }

    let content = templates.render_manifest(&context)?;

    Ok((
        no_cache(),
        [(
            header::CONTENT_TYPE,
            "application/manifest+json; charset=\"utf-8\"",
        )],
        content,
    ))
}
