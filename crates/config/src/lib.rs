// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs, rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

//! Application configuration logic

mod sections;
mod site;
pub(crate) mod util;

pub use self::{
    sections::{BrandingConfig, FrontendConfig, HttpConfig, ProjectConfig, RootConfig,
        TemplatesConfig},
    site::{ConfigurationError, SiteConfig},
    util::{ConfigurationSection, ConfigurationSectionExt},
};
