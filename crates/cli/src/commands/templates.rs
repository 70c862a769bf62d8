// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use clap::Parser;
use figment::Figment;
use marquee_config::{ConfigurationSection, RootConfig};
use marquee_templates::{SiteContext, check};
use tracing::info;

use crate::util::{site_config_from_config, templates_from_config};

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// Check that the templates resolved from the config render properly
    Check,
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            SC::Check => {
                let config =
                    RootConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;

                let site = site_config_from_config(&config);
                let templates = templates_from_config(&config, &site).await?;

                let context = SiteContext::new(&site)
                    .map_or_else(|_| SiteContext::sample(), |context| context);
                let renders = check::all(&templates, &context)?;

                info!("Rendered {} templates without errors", renders.len());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
