// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::ConfigurationSection;

/// Configuration related to templates
#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct TemplatesConfig {
    /// Extra directory searched for templates before the application
    /// directories and the bundled ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Utf8PathBuf>,

    /// Extra key/value pairs merged into every rendering context; these win
    /// over the built-in keys on collision
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub context: serde_json::Map<String, serde_json::Value>,
}

impl TemplatesConfig {
    /// Returns true if the configuration is the default one
    pub(crate) fn is_default(&self) -> bool {
        self.path.is_none() && self.context.is_empty()
    }
}

impl ConfigurationSection for TemplatesConfig {
    const PATH: Option<&'static str> = Some("templates");
}
