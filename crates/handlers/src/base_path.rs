// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying the base path under which the application is externally
/// reachable, set by a reverse proxy
pub const BASE_PATH_HEADER: &str = "x-forwarded-prefix";

/// The externally-visible base path of the current request, with a trailing
/// slash guaranteed. Defaults to `/` when the reverse-proxy header is absent,
/// so the same build can be served behind different external path prefixes.
pub struct BasePath(pub String);

impl<S: Send + Sync> FromRequestParts<S> for BasePath {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let base = parts
            .headers
            .get(BASE_PATH_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("/");

        let base = if base.ends_with('/') {
            base.to_owned()
        } else {
            format!("{base}/")
        };

        Ok(BasePath(base))
    }
}
