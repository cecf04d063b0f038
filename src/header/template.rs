//! The header field copied into every response.

use axum::http::header::{HeaderName, HeaderValue};

use crate::error::PluginError;

/// Header name appended to every proxied response.
pub const CLACKS_HEADER_NAME: &str = "X-Clacks-Overhead";

/// Header value appended to every proxied response.
pub const CLACKS_HEADER_VALUE: &str = "GNU Terry Pratchett";

/// A pre-built header name/value pair, constructed once and copied into each
/// response's header collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateField {
    name: HeaderName,
    value: HeaderValue,
}

impl TemplateField {
    /// Build a template field from a name and value, validating both.
    pub fn new(name: &str, value: &str) -> Result<Self, PluginError> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        Ok(Self { name, value })
    }

    /// Build the fixed clacks overhead field.
    ///
    /// Rebuilt fresh on every process start; repeated calls produce fields
    /// identical in name and value.
    pub fn clacks() -> Result<Self, PluginError> {
        Self::new(CLACKS_HEADER_NAME, CLACKS_HEADER_VALUE)
    }

    /// The field name.
    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    /// The field value.
    pub fn value(&self) -> &HeaderValue {
        &self.value
    }
}
