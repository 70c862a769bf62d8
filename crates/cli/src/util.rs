// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use anyhow::Context;
use marquee_config::{RootConfig, SiteConfig};
use marquee_router::UrlBuilder;
use marquee_templates::Templates;

use crate::app_state::AppState;

pub fn site_config_from_config(config: &RootConfig) -> Arc<SiteConfig> {
    let mut rng = rand::thread_rng();
    Arc::new(SiteConfig::from_config(config, &mut rng))
}

pub async fn templates_from_config(
    config: &RootConfig,
    site: &SiteConfig,
) -> Result<Templates, anyhow::Error> {
    let mut search_paths = Vec::new();
    if let Some(path) = &config.templates.path {
        search_paths.push(path.clone());
    }
    search_paths.extend(site.template_search_dirs());

    Templates::load(search_paths)
        .await
        .context("could not load the templates")
}

pub async fn app_state_from_config(config: &RootConfig) -> Result<AppState, anyhow::Error> {
    let site = site_config_from_config(config);
    let templates = templates_from_config(config, &site).await?;
    let urls = UrlBuilder::new(&site.frontend_url_prefix, &site.static_url);

    Ok(AppState {
        site,
        templates,
        urls,
    })
}
