// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode asset service rewriting module imports on the fly

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use camino::Utf8PathBuf;

use crate::rewrite::{ModulePrefixes, rewrite_module_imports};

/// One served filesystem root plus the substitutions applied to the
/// JavaScript under it.
///
/// Unbundled development assets still contain unresolved import markers, so
/// `.js` files are rewritten before they are sent; everything else passes
/// through byte-for-byte. The rewrite happens once per response and is never
/// kept across requests, and responses deliberately carry no content-version
/// validator: freshness is controlled by the injected query-string hash.
#[derive(Debug, Clone)]
pub struct RewrittenAssets {
    root: Utf8PathBuf,
    prefixes: ModulePrefixes,
    build_hash: String,
}

impl RewrittenAssets {
    /// A new asset service serving `root`
    #[must_use]
    pub fn new(root: Utf8PathBuf, prefixes: ModulePrefixes, build_hash: String) -> Self {
        Self {
            root,
            prefixes,
            build_hash,
        }
    }

    /// The router serving this root, meant to be nested under an asset
    /// URL prefix
    #[must_use]
    pub fn into_router(self) -> Router {
        Router::new().fallback(serve).with_state(self)
    }
}

async fn serve(State(assets): State<RewrittenAssets>, uri: Uri) -> Response {
    let Some(relative) = sanitize(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let path = assets.root.join(relative);
    match tokio::fs::read(&path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(path.as_std_path()).first_or_octet_stream();
            let body = if path.extension() == Some("js") {
                rewrite_module_imports(&content, &assets.prefixes, &assets.build_hash).into_owned()
            } else {
                content
            };

            ([(header::CONTENT_TYPE, mime.as_ref())], body).into_response()
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(err) => {
            tracing::warn!(%path, error = %err, "Failed to read asset");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Normalize the request path, refusing anything that would escape the
/// served root
fn sanitize(path: &str) -> Option<Utf8PathBuf> {
    let mut clean = Utf8PathBuf::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            segment => clean.push(segment),
        }
    }

    (!clean.as_str().is_empty()).then_some(clean)
}
