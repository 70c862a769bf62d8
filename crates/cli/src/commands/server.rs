// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use figment::Figment;
use marquee_config::{ConfigurationSection, RootConfig};

use crate::util::app_state_from_config;

#[derive(Parser, Debug, Default)]
pub(super) struct Options {}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        let config = RootConfig::extract(figment)
            .map_err(anyhow::Error::from_boxed)
            .context("could not load the configuration")?;

        let state = app_state_from_config(&config).await?;
        let router = crate::server::build_router(state)?;

        crate::server::serve(&config.http.address, router).await?;

        Ok(ExitCode::SUCCESS)
    }
}
