// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::ConfigurationSection;

fn default_theme_color() -> String {
    "#62abea".to_owned()
}

fn default_background_color() -> String {
    "#444444".to_owned()
}

/// Configuration section for tweaking the branding of the application
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BrandingConfig {
    /// A human-readable name, e.g. `My Project`
    #[serde(default)]
    pub display_name: String,

    /// A one-line description of the project
    #[serde(default)]
    pub description: String,

    /// Accent color used by the frontend and advertised in the PWA manifest
    #[serde(default = "default_theme_color")]
    pub theme_color: String,

    /// Page background color
    #[serde(default = "default_background_color")]
    pub background_color: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            description: String::new(),
            theme_color: default_theme_color(),
            background_color: default_background_color(),
        }
    }
}

impl BrandingConfig {
    /// Returns true if the configuration is the default one
    pub(crate) fn is_default(&self) -> bool {
        self.display_name.is_empty()
            && self.description.is_empty()
            && self.theme_color == default_theme_color()
            && self.background_color == default_background_color()
    }
}

impl ConfigurationSection for BrandingConfig {
    const PATH: Option<&'static str> = Some("branding");
}
