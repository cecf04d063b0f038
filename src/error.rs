//! Plugin error types.
//!
//! All variants are terminal at startup: a failed template build means the
//! hook is never registered (fail-closed). The per-response path has no error
//! type at all; injection failures there are recovered locally and reported
//! through [`crate::hook::InjectOutcome`].

use axum::http::header::{InvalidHeaderName, InvalidHeaderValue};
use thiserror::Error;

/// Error type for plugin initialization.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The template header name did not parse as a valid field name.
    #[error("invalid template header name: {0}")]
    InvalidHeaderName(#[from] InvalidHeaderName),

    /// The template header value did not parse as a valid field value.
    #[error("invalid template header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}
