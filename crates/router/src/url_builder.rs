// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use axum::response::Redirect;

/// URL sub-path under which the UI kit's own assets are served in debug mode
pub(crate) const KIT_SUBPATH: &str = "marquee";

/// URL sub-path under which the application's assets are served in debug mode
pub(crate) const APP_SUBPATH: &str = "app";

/// Knows the URLs and axum route patterns of every endpoint, derived from the
/// frontend URL prefix and the resolved static URL. Built once at startup.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    frontend_url_prefix: String,

    /// The static URL as configured, possibly relative to the frontend prefix
    static_url: String,

    /// The static URL as an absolute path, used for routing
    static_root: String,
}

impl UrlBuilder {
    /// Create a new [`UrlBuilder`] from the frontend URL prefix and the
    /// expanded static URL
    #[must_use]
    pub fn new(frontend_url_prefix: &str, static_url: &str) -> Self {
        let static_root = if static_url.starts_with('/') {
            static_url.to_owned()
        } else {
            format!("/{static_url}")
        };

        Self {
            frontend_url_prefix: frontend_url_prefix.to_owned(),
            static_url: static_url.to_owned(),
            static_root,
        }
    }

    /// URL of the frontend index page, the target of the root redirect
    #[must_use]
    pub fn frontend_index(&self) -> String {
        format!("/{}/", self.frontend_url_prefix)
    }

    /// Redirect to the frontend index page
    pub fn redirect_to_index(&self) -> Redirect {
        Redirect::to(&self.frontend_index())
    }

    /// Route of the service worker script
    #[must_use]
    pub fn service_worker_pattern(&self) -> String {
        format!("/{}/service-worker.js", self.frontend_url_prefix)
    }

    /// Route of the PWA manifest
    #[must_use]
    pub fn manifest_pattern(&self) -> String {
        format!("/{}/manifest.json", self.frontend_url_prefix)
    }

    /// Root under which all static assets are served
    #[must_use]
    pub fn static_pattern(&self) -> String {
        self.static_root.clone()
    }

    /// Root under which the UI kit's own assets are served in debug mode
    #[must_use]
    pub fn kit_assets_pattern(&self) -> String {
        format!("{}/{KIT_SUBPATH}", self.static_root)
    }

    /// Root under which the application's assets are served in debug mode
    #[must_use]
    pub fn app_assets_pattern(&self) -> String {
        format!("{}/{APP_SUBPATH}", self.static_root)
    }

    /// URL prefix substituted for the UI kit module-import marker
    #[must_use]
    pub fn kit_module_prefix(&self) -> String {
        format!("{}/{KIT_SUBPATH}/js", self.static_root)
    }

    /// URL prefix substituted for the application module-import marker
    #[must_use]
    pub fn app_module_prefix(&self) -> String {
        format!("{}/{APP_SUBPATH}/js", self.static_root)
    }

    /// Base prefix for client-side navigation: the externally-visible base
    /// path (trailing slash expected) followed by the frontend URL prefix
    #[must_use]
    pub fn navigation_base_prefix(&self, base_path: &str) -> String {
        format!("{base_path}{}", self.frontend_url_prefix)
    }

    /// Static URL adjusted to the currently requested frontend path.
    ///
    /// Only applies when the static URL is relative to the frontend URL
    /// prefix; the depth is the number of slashes in the requested sub-path
    /// plus `offset`. Returns `None` when the static URL stands on its own.
    #[must_use]
    pub fn static_url_at(&self, path: &str, offset: usize) -> Option<String> {
        let rest = self
            .static_url
            .strip_prefix(&format!("{}/", self.frontend_url_prefix))?;

        let slashes = path.matches('/').count() + offset;
        let prefix = match slashes {
            0 => format!("{}/", self.frontend_url_prefix),
            1 => String::new(),
            deeper => "../".repeat(deeper - 1),
        };

        Some(format!("{prefix}{rest}"))
    }

    /// The shell sub-path of the given request path: everything after the
    /// frontend URL prefix, leading slash included
    #[must_use]
    pub fn frontend_sub_path<'p>(&self, request_path: &'p str) -> &'p str {
        request_path
            .strip_prefix('/')
            .and_then(|path| path.strip_prefix(self.frontend_url_prefix.as_str()))
            .unwrap_or("")
    }

    pub(crate) fn frontend_url_prefix(&self) -> &str {
        &self.frontend_url_prefix
    }
}
