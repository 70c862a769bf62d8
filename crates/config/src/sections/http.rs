// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::ConfigurationSection;

fn default_address() -> String {
    "[::]:8080".to_owned()
}

/// Configuration of the HTTP server
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Address to listen on, e.g. `[::]:8080`
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

impl ConfigurationSection for HttpConfig {
    const PATH: Option<&'static str> = Some("http");
}
