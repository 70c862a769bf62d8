// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::extract::FromRef;
use marquee_config::SiteConfig;
use marquee_router::UrlBuilder;
use marquee_templates::Templates;

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub templates: Templates,
    pub urls: UrlBuilder,
}

impl FromRef<AppState> for Arc<SiteConfig> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.site)
    }
}

impl FromRef<AppState> for Templates {
    fn from_ref(state: &AppState) -> Self {
        state.templates.clone()
    }
}

impl FromRef<AppState> for UrlBuilder {
    fn from_ref(state: &AppState) -> Self {
        state.urls.clone()
    }
}
