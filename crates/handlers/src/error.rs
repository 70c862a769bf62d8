// Copyright 2026 The Marquee Developers
//
// SPDX-License-Identifier: Apache-2.0

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Wrapper that turns any handler error into a logged, plain-text 500
/// response
pub struct InternalError {
    message: String,
}

impl std::fmt::Display for InternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> From<E> for InternalError {
    fn from(err: E) -> Self {
        Self {
            message: format!("{err}"),
        }
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        tracing::error!(message = %self.message);
        (StatusCode::INTERNAL_SERVER_ERROR, self.message).into_response()
    }
}
