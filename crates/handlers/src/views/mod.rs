// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use axum::http::{HeaderName, HeaderValue, header};

pub mod index;
pub mod manifest;
pub mod service_worker;
pub mod shell;

/// Cache-disabling headers carried by every templated response
pub(crate) fn no_cache() -> [(HeaderName, HeaderValue); 1] {
    [(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate, max-age=0"),
    )]
}
