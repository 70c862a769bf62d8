// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

mod branding;
mod frontend;
mod http;
mod project;
mod templates;

pub use self::{
    branding::BrandingConfig, frontend::FrontendConfig, http::HttpConfig, project::ProjectConfig,
    templates::TemplatesConfig,
};
use crate::util::ConfigurationSection;

/// Application configuration root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootConfig {
    /// Project identity
    pub project: ProjectConfig,

    /// Configuration section for tweaking the branding of the application
    #[serde(default, skip_serializing_if = "BrandingConfig::is_default")]
    pub branding: BrandingConfig,

    /// Where the frontend lives and under which URLs it is served
    #[serde(default)]
    pub frontend: FrontendConfig,

    /// Configuration related to templates
    #[serde(default, skip_serializing_if = "TemplatesConfig::is_default")]
    pub templates: TemplatesConfig,

    /// Configuration of the HTTP server
    #[serde(default)]
    pub http: HttpConfig,
}

impl ConfigurationSection for RootConfig {
    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        self.project.validate(figment)?;
        self.branding.validate(figment)?;
        self.frontend.validate(figment)?;
        self.templates.validate(figment)?;
        self.http.validate(figment)?;

        Ok(())
    }
}

impl RootConfig {
    /// Configuration used in tests across the workspace
    #[must_use]
    pub fn test() -> Self {
        Self {
            project: ProjectConfig {
                name: "my-project".to_owned(),
                version: "1.2.3".to_owned(),
                debug: false,
                package_name: None,
            },
            branding: BrandingConfig {
                display_name: "My Project".to_owned(),
                description: "A project that does stuff".to_owned(),
                ..BrandingConfig::default()
            },
            frontend: FrontendConfig::default(),
            templates: TemplatesConfig::default(),
            http: HttpConfig::default(),
        }
    }
}
