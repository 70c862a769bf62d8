// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::ConfigurationSection;

fn default_dir() -> Utf8PathBuf {
    Utf8PathBuf::from("frontend")
}

fn default_url_prefix() -> String {
    "frontend".to_owned()
}

fn default_static_url() -> String {
    "{frontend_url_prefix}/static".to_owned()
}

fn default_roots() -> Vec<Utf8PathBuf> {
    vec![Utf8PathBuf::from(".")]
}

fn default_true() -> bool {
    true
}

/// Configuration section describing where the frontend lives and under which
/// URLs it is served
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FrontendConfig {
    /// Frontend directory, relative to each application root
    #[serde(default = "default_dir")]
    pub dir: Utf8PathBuf,

    /// URL prefix under which the frontend shell is served
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,

    /// URL template under which static assets are served;
    /// `{frontend_url_prefix}` is substituted with the configured prefix
    #[serde(default = "default_static_url")]
    pub static_url: String,

    /// Advertise a PWA manifest and register the service worker
    #[serde(default = "default_true")]
    pub enable_pwa: bool,

    /// Ordered candidate roots searched for the frontend directory
    #[serde(default = "default_roots")]
    pub roots: Vec<Utf8PathBuf>,

    /// Directory holding the UI kit's unbundled sources, served in debug
    /// mode. Relative paths are searched under `roots`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kit_root: Option<Utf8PathBuf>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            url_prefix: default_url_prefix(),
            static_url: default_static_url(),
            enable_pwa: true,
            roots: default_roots(),
            kit_root: None,
        }
    }
}

impl ConfigurationSection for FrontendConfig {
    const PATH: Option<&'static str> = Some("frontend");
}
