// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use crate::UrlBuilder;

/// The endpoints a route pattern can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// UI kit assets, served rewritten in debug mode
    KitAssets,

    /// Application assets under the `app/` sub-path, served rewritten in
    /// debug mode
    AppAssets,

    /// Static assets under the bare static root
    Assets,

    /// Redirect from `/` to the frontend index
    RedirectFrontend,

    /// The service worker script
    ServiceWorker,

    /// The PWA manifest
    Manifest,

    /// The application shell, catch-all for client-side routing
    Shell,
}

impl Endpoint {
    /// Stable name of the endpoint, used for logging
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::KitAssets => "static-kit",
            Self::AppAssets => "static-app",
            Self::Assets => "static",
            Self::RedirectFrontend => "redirect-frontend",
            Self::ServiceWorker => "service-worker",
            Self::Manifest => "manifest",
            Self::Shell => "shell",
        }
    }

    /// Whether this endpoint serves static assets
    #[must_use]
    pub fn is_asset(self) -> bool {
        matches!(self, Self::KitAssets | Self::AppAssets | Self::Assets)
    }
}

/// One URL-pattern → endpoint binding, in registration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSpec {
    /// The endpoint the pattern is bound to
    pub endpoint: Endpoint,

    /// The axum route pattern
    pub pattern: String,
}

impl RouteSpec {
    fn new(endpoint: Endpoint, pattern: String) -> Self {
        Self { endpoint, pattern }
    }
}

impl UrlBuilder {
    /// The ordered route table for the given mode.
    ///
    /// Asset routes come first so that asset paths are never swallowed by the
    /// shell catch-all; in debug mode the kit and application roots are
    /// distinct and both flow through the rewriting asset service, while in
    /// production a single bundled root is served verbatim.
    #[must_use]
    pub fn route_table(&self, debug: bool) -> Vec<RouteSpec> {
        let mut table = Vec::with_capacity(9);

        if debug {
            table.push(RouteSpec::new(Endpoint::KitAssets, self.kit_assets_pattern()));
            table.push(RouteSpec::new(Endpoint::AppAssets, self.app_assets_pattern()));
        }
        table.push(RouteSpec::new(Endpoint::Assets, self.static_pattern()));

        table.push(RouteSpec::new(Endpoint::RedirectFrontend, "/".to_owned()));
        table.push(RouteSpec::new(
            Endpoint::ServiceWorker,
            self.service_worker_pattern(),
        ));
        table.push(RouteSpec::new(Endpoint::Manifest, self.manifest_pattern()));

        let prefix = self.frontend_url_prefix();
        table.push(RouteSpec::new(Endpoint::Shell, format!("/{prefix}")));
        table.push(RouteSpec::new(Endpoint::Shell, format!("/{prefix}/")));
        table.push(RouteSpec::new(
            Endpoint::Shell,
            format!("/{prefix}/{{*path}}"),
        ));

        table
    }
}
