// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};

mod config;
mod server;
mod templates;

#[derive(Parser, Debug)]
#[command(version = crate::VERSION, about)]
pub struct Options {
    /// Path to a configuration file; can be repeated, with later files
    /// taking precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Append)]
    config: Vec<Utf8PathBuf>,

    #[command(subcommand)]
    subcommand: Option<Subcommand>,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// Runs the web server
    Server(self::server::Options),

    /// Configuration-related commands
    Config(self::config::Options),

    /// Templates-related commands
    Templates(self::templates::Options),
}

impl Options {
    /// Load the configuration from the given files and the environment.
    /// Environment variables use the `MARQUEE_` prefix, with `__` separating
    /// the section from the key, e.g. `MARQUEE_BRANDING__DISPLAY_NAME`.
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new();
        for path in &self.config {
            figment = figment.merge(Yaml::file(path));
        }

        figment.merge(Env::prefixed("MARQUEE_").split("__"))
    }

    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as SC;
        match self.subcommand {
            Some(SC::Server(c)) => c.run(figment).await,
            Some(SC::Config(c)) => c.run(figment).await,
            Some(SC::Templates(c)) => c.run(figment).await,
            None => self::server::Options::default().run(figment).await,
        }
    }
}
