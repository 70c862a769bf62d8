// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::ConfigurationSection;

/// Configuration section holding the project identity
#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct ProjectConfig {
    /// Project name, normally lowercase without spaces, e.g. `my-project`
    #[serde(default)]
    pub name: String,

    /// Project version, used to derive the production build hash
    #[serde(default)]
    pub version: String,

    /// Serve the unbundled frontend sources and rewrite module imports on
    /// the fly
    #[serde(default)]
    pub debug: bool,

    /// Root application package name. Defaults to `name` with every
    /// character that is not an ASCII alphanumeric or an underscore
    /// stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

impl ConfigurationSection for ProjectConfig {
    const PATH: Option<&'static str> = Some("project");
}
