// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use rand::Rng;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use crate::RootConfig;

/// Directory searched for the UI kit sources when `frontend.kit_root` is not
/// set explicitly
const DEFAULT_KIT_DIR: &str = "marquee";

/// Number of hex characters kept in the build hash
const BUILD_HASH_LEN: usize = 16;

/// Fatal startup-time misconfiguration. Surfaced when building a rendering
/// context or the route table; never retried.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A rendering context was requested without a project name being set
    #[error("application is not configured")]
    Unconfigured,

    /// No configured application root contains the expected asset directory
    #[error("could not find {dir:?} under any configured application root")]
    MissingFrontendDir {
        /// The directory that was searched for
        dir: Utf8PathBuf,
    },
}

/// Resolved site settings, built once at startup from the [`RootConfig`] and
/// immutable afterwards. Every component reads from this by reference.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Project name, e.g. `my-project`
    pub name: String,

    /// Human-readable project name
    pub display_name: String,

    /// One-line project description
    pub description: String,

    /// Project version
    pub version: String,

    /// Whether the frontend is served in debug mode
    pub debug: bool,

    /// Accent color
    pub theme_color: String,

    /// Page background color
    pub background_color: String,

    /// Frontend directory, relative to each application root
    pub frontend_dir: Utf8PathBuf,

    /// URL prefix under which the frontend shell is served
    pub frontend_url_prefix: String,

    /// URL under which static assets are served, with the
    /// `{frontend_url_prefix}` placeholder already expanded
    pub static_url: String,

    /// Root application package name
    pub package_name: String,

    /// Whether PWA support is advertised
    pub enable_pwa: bool,

    /// Ordered candidate roots searched for the frontend directory
    pub roots: Vec<Utf8PathBuf>,

    /// Directory holding the UI kit's unbundled sources, if configured
    pub kit_root: Option<Utf8PathBuf>,

    /// Extra key/value pairs merged into every rendering context
    pub extra_context: serde_json::Map<String, serde_json::Value>,

    /// Cache-busting token: random per process start in debug mode, derived
    /// from the version string otherwise
    pub build_hash: String,
}

impl SiteConfig {
    /// Resolve the site settings from the file configuration.
    ///
    /// This performs the derived computations: the static URL template is
    /// expanded against the frontend URL prefix, the package name defaults to
    /// a sanitized form of the project name, and the build hash is computed.
    pub fn from_config<R: Rng>(config: &RootConfig, rng: &mut R) -> Self {
        // Static URL may (and normally does) depend on the frontend URL prefix
        let static_url = config
            .frontend
            .static_url
            .replace("{frontend_url_prefix}", &config.frontend.url_prefix);

        // Package name defaults to the project name
        let package_name = config
            .project
            .package_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| sanitize_package_name(&config.project.name));

        let build_hash = if config.project.debug {
            // A fresh token per process start defeats caching during
            // development
            let raw: [u8; BUILD_HASH_LEN / 2] = rng.r#gen();
            hex::encode(raw)
        } else {
            // Stable across restarts for the same version, so production
            // responses can carry long-lived cache headers
            let mut digest = hex::encode(Sha256::digest(config.project.version.as_bytes()));
            digest.truncate(BUILD_HASH_LEN);
            digest
        };

        let site = Self {
            name: config.project.name.clone(),
            display_name: config.branding.display_name.clone(),
            description: config.branding.description.clone(),
            version: config.project.version.clone(),
            debug: config.project.debug,
            theme_color: config.branding.theme_color.clone(),
            background_color: config.branding.background_color.clone(),
            frontend_dir: config.frontend.dir.clone(),
            frontend_url_prefix: config.frontend.url_prefix.clone(),
            static_url,
            package_name,
            enable_pwa: config.frontend.enable_pwa,
            roots: config.frontend.roots.clone(),
            kit_root: config.frontend.kit_root.clone(),
            extra_context: config.templates.context.clone(),
            build_hash,
        };

        debug!(
            name = %site.name,
            version = %site.version,
            debug_mode = site.debug,
            static_url = %site.static_url,
            package_name = %site.package_name,
            build_hash = %site.build_hash,
            "Resolved site settings"
        );

        site
    }

    /// Locate the application frontend directory under the configured roots.
    ///
    /// In production mode the bundled output is expected under
    /// `<frontend_dir>/dist`.
    ///
    /// # Errors
    ///
    /// Returns an error if no configured root contains the directory.
    pub fn resolve_frontend_root(&self) -> Result<Utf8PathBuf, ConfigurationError> {
        let dir = if self.debug {
            self.frontend_dir.clone()
        } else {
            self.frontend_dir.join("dist")
        };

        self.find_under_roots(&dir)
            .ok_or(ConfigurationError::MissingFrontendDir { dir })
    }

    /// Locate the UI kit sources served in debug mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured (or default) kit directory does not
    /// exist.
    pub fn resolve_kit_root(&self) -> Result<Utf8PathBuf, ConfigurationError> {
        let dir = self
            .kit_root
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_KIT_DIR));

        self.find_under_roots(&dir)
            .ok_or(ConfigurationError::MissingFrontendDir { dir })
    }

    /// Template directories contributed by the application, highest priority
    /// first: unbundled sources, then the bundled output of each root.
    #[must_use]
    pub fn template_search_dirs(&self) -> Vec<Utf8PathBuf> {
        let mut dirs = Vec::with_capacity(self.roots.len() * 2);
        for root in &self.roots {
            dirs.push(root.join(&self.frontend_dir).join("templates"));
        }
        for root in &self.roots {
            dirs.push(root.join(&self.frontend_dir).join("dist").join("templates"));
        }
        dirs
    }

    fn find_under_roots(&self, dir: &Utf8Path) -> Option<Utf8PathBuf> {
        if dir.is_absolute() {
            return dir.is_dir().then(|| dir.to_owned());
        }

        self.roots
            .iter()
            .map(|root| root.join(dir))
            .find(|candidate| candidate.is_dir())
    }
}

fn sanitize_package_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(config: &RootConfig) -> SiteConfig {
        SiteConfig::from_config(config, &mut rand::thread_rng())
    }

    #[test]
    fn static_url_expansion() {
        let mut config = RootConfig::test();
        config.frontend.url_prefix = "app".to_owned();

        let site = resolve(&config);
        assert_eq!(site.static_url, "app/static");
    }

    #[test]
    fn static_url_override_is_kept_verbatim() {
        let mut config = RootConfig::test();
        config.frontend.static_url = "https://cdn.example.com/assets".to_owned();

        let site = resolve(&config);
        assert_eq!(site.static_url, "https://cdn.example.com/assets");
    }

    #[test]
    fn package_name_defaulting() {
        let mut config = RootConfig::test();
        config.project.name = "My-Project!42".to_owned();

        let site = resolve(&config);
        assert_eq!(site.package_name, "MyProject42");

        config.project.package_name = Some("explicit".to_owned());
        let site = resolve(&config);
        assert_eq!(site.package_name, "explicit");
    }

    #[test]
    fn production_build_hash_is_a_function_of_the_version() {
        let config = RootConfig::test();

        let first = resolve(&config);
        let second = resolve(&config);

        assert_eq!(first.build_hash.len(), 16);
        assert!(first.build_hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(first.build_hash, second.build_hash);

        let mut other = RootConfig::test();
        other.project.version = "1.2.4".to_owned();
        assert_ne!(resolve(&other).build_hash, first.build_hash);
    }

    #[test]
    fn debug_build_hash_is_random() {
        let mut config = RootConfig::test();
        config.project.debug = true;

        let first = resolve(&config);
        let second = resolve(&config);

        assert_eq!(first.build_hash.len(), 16);
        assert!(first.build_hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first.build_hash, second.build_hash);
    }
}
