// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

#![allow(clippy::module_name_repetitions)]

//! HTTP handlers serving the frontend shell, the PWA plumbing and static
//! assets

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    extract::FromRef,
    http::{Response, StatusCode},
    routing::get,
};
use headers::{CacheControl, HeaderMapExt as _};
use marquee_config::{ConfigurationError, SiteConfig};
use marquee_router::{Endpoint, UrlBuilder};
use marquee_templates::Templates;
use tower::Layer;
use tower_http::services::{ServeDir, fs::ServeFileSystemResponseBody};

mod assets;
mod base_path;
mod error;
mod rewrite;
pub mod views;

pub use self::{
    assets::RewrittenAssets,
    base_path::{BASE_PATH_HEADER, BasePath},
    error::InternalError,
    rewrite::{ModulePrefixes, rewrite_module_imports},
};

#[cfg(test)]
mod tests;

/// Assemble the frontend router from the route table.
///
/// In debug mode static assets are served from the UI kit and application
/// source roots through the rewriting asset service; in production a single
/// bundled root is served verbatim with long-lived cache headers, since the
/// build hash embedded in asset URLs changes with every release.
///
/// # Errors
///
/// Returns an error if a required asset directory cannot be found.
pub fn frontend_router<S>(
    site: &SiteConfig,
    urls: &UrlBuilder,
) -> Result<Router<S>, ConfigurationError>
where
    S: Clone + Send + Sync + 'static,
    Templates: FromRef<S>,
    Arc<SiteConfig>: FromRef<S>,
    UrlBuilder: FromRef<S>,
{
    let prefixes = ModulePrefixes::new(urls.kit_module_prefix(), urls.app_module_prefix());

    let mut router = Router::new();
    for spec in urls.route_table(site.debug) {
        router = match spec.endpoint {
            Endpoint::KitAssets => {
                let root = site.resolve_kit_root()?;
                router.nest_service(
                    &spec.pattern,
                    RewrittenAssets::new(root, prefixes.clone(), site.build_hash.clone())
                        .into_router(),
                )
            }

            Endpoint::AppAssets => {
                let root = site.resolve_frontend_root()?;
                router.nest_service(
                    &spec.pattern,
                    RewrittenAssets::new(root, prefixes.clone(), site.build_hash.clone())
                        .into_router(),
                )
            }

            Endpoint::Assets if site.debug => {
                let root = site.resolve_frontend_root()?;
                router.nest_service(
                    &spec.pattern,
                    RewrittenAssets::new(root, prefixes.clone(), site.build_hash.clone())
                        .into_router(),
                )
            }

            Endpoint::Assets => {
                let root = site.resolve_frontend_root()?;
                let static_service =
                    ServeDir::new(&root).append_index_html_on_directories(false);

                let add_cache_headers = axum::middleware::map_response(
                    async |mut res: Response<ServeFileSystemResponseBody>| {
                        let cache_control = if res.status() == StatusCode::NOT_FOUND {
                            // Cache 404s for 5 minutes
                            CacheControl::new()
                                .with_public()
                                .with_max_age(Duration::from_secs(5 * 60))
                        } else {
                            // Cache assets for 1 year
                            CacheControl::new()
                                .with_public()
                                .with_max_age(Duration::from_secs(365 * 24 * 60 * 60))
                                .with_immutable()
                        };
                        res.headers_mut().typed_insert(cache_control);
                        res
                    },
                );

                router.nest_service(&spec.pattern, add_cache_headers.layer(static_service))
            }

            Endpoint::RedirectFrontend => router.route(&spec.pattern, get(views::index::get)),

            Endpoint::ServiceWorker => {
                router.route(&spec.pattern, get(views::service_worker::get))
            }

            Endpoint::Manifest => router.route(&spec.pattern, get(views::manifest::get)),

            Endpoint::Shell => router.route(&spec.pattern, get(views::shell::get)),
        };

        tracing::debug!(
            name = spec.endpoint.name(),
            pattern = %spec.pattern,
            "Registered route"
        );
    }

    Ok(router)
}
