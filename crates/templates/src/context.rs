// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Contexts used in templates

use camino::Utf8PathBuf;
use marquee_config::{ConfigurationError, SiteConfig};
use marquee_router::UrlBuilder;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Themes the UI kit ships with
const THEMES: [&str; 2] = ["dark", "light"];

/// The rendering context shared by every templated response: all resolved
/// site settings plus the configured extra context, extras winning on key
/// collision.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SiteContext {
    ctx: Map<String, Value>,
}

impl SiteContext {
    /// Build the context from the resolved site settings.
    ///
    /// # Errors
    ///
    /// Fails if no project name has been configured.
    pub fn new(site: &SiteConfig) -> Result<Self, ConfigurationError> {
        if site.name.is_empty() {
            return Err(ConfigurationError::Unconfigured);
        }

        Ok(Self::from_site(site))
    }

    fn from_site(site: &SiteConfig) -> Self {
        let mut ctx = Map::new();
        ctx.insert("name".to_owned(), json!(site.name));
        ctx.insert("display_name".to_owned(), json!(site.display_name));
        ctx.insert("display_short_name".to_owned(), json!(site.display_name));
        ctx.insert("description".to_owned(), json!(site.description));
        ctx.insert("version".to_owned(), json!(site.version));
        ctx.insert("debug".to_owned(), json!(site.debug));
        ctx.insert("theme_color".to_owned(), json!(site.theme_color));
        ctx.insert(
            "background_color".to_owned(),
            json!(site.background_color),
        );
        ctx.insert(
            "navigation_base_prefix".to_owned(),
            json!(format!("/{}", site.frontend_url_prefix)),
        );
        ctx.insert("static_url".to_owned(), json!(site.static_url));
        ctx.insert("enable_pwa".to_owned(), json!(site.enable_pwa));
        ctx.insert("themes".to_owned(), json!(THEMES));
        ctx.insert("build_hash".to_owned(), json!(site.build_hash));

        // Extras take precedence on key collision
        for (key, value) in &site.extra_context {
            ctx.insert(key.clone(), value.clone());
        }

        Self { ctx }
    }

    /// Recompute the navigation base prefix against the externally-visible
    /// base path (trailing slash expected)
    #[must_use]
    pub fn with_navigation_base(mut self, urls: &UrlBuilder, base_path: &str) -> Self {
        self.ctx.insert(
            "navigation_base_prefix".to_owned(),
            json!(urls.navigation_base_prefix(base_path)),
        );
        self
    }

    /// Adjust the static URL to the currently requested frontend path, when
    /// it is relative to the frontend URL prefix
    #[must_use]
    pub fn at_request_path(mut self, urls: &UrlBuilder, path: &str, offset: usize) -> Self {
        if let Some(static_url) = urls.static_url_at(path, offset) {
            self.ctx.insert("static_url".to_owned(), json!(static_url));
        }
        self
    }

    /// Override a single context value
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.ctx.insert(key.to_owned(), value.into());
    }

    /// Look up a context value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.ctx.get(key)
    }

    /// A fixed sample context, used to check that templates render
    #[must_use]
    pub fn sample() -> Self {
        let mut extra_context = Map::new();
        extra_context.insert("motd".to_owned(), json!("hello"));

        Self::from_site(&SiteConfig {
            name: "my-project".to_owned(),
            display_name: "My Project".to_owned(),
            description: "A project that does stuff".to_owned(),
            version: "1.2.3".to_owned(),
            debug: false,
            theme_color: "#62abea".to_owned(),
            background_color: "#444444".to_owned(),
            frontend_dir: Utf8PathBuf::from("frontend"),
            frontend_url_prefix: "frontend".to_owned(),
            static_url: "frontend/static".to_owned(),
            package_name: "myproject".to_owned(),
            enable_pwa: true,
            roots: vec![Utf8PathBuf::from(".")],
            kit_root: None,
            extra_context,
            build_hash: "0123456789abcdef".to_owned(),
        })
    }
}
