//! Fault responses.
//!
//! # Design Decisions
//! - Every unhandled fault becomes a 500 with a generic page
//! - The fault itself is logged, never shown to the browser
//! - Reportable outcomes (unknown Riot ID, missing champion) are not errors
//!   and never pass through here

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::http::pages::StatusPage;
use crate::upstream::UpstreamError;

/// Faults a handler does not recover from.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        status_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong. Please try again later.")
    }
}

/// Render a bare status page, falling back to plain text if even that fails.
pub fn status_page(status: StatusCode, message: &'static str) -> Response {
    let page = StatusPage {
        status: status.as_u16(),
        message,
    };
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render status page");
            (status, message).into_response()
        }
    }
}
