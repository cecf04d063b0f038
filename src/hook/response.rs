//! Header injection into a single response.

use axum::http::HeaderMap;

use crate::header::TemplateField;

/// Result of running the hook against one response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InjectOutcome {
    /// Exactly one copy of the template field was appended.
    Appended,
    /// Injection was skipped; the response headers are unchanged.
    Skipped,
}

/// Append a copy of the template field to a response header collection.
///
/// The template itself is never inserted; a clone of its name and value is
/// appended after all existing fields. If the collection rejects the append
/// the response is left untouched.
pub fn inject(template: &TemplateField, headers: &mut HeaderMap) -> InjectOutcome {
    let name = template.name().clone();
    let value = template.value().clone();

    match headers.try_append(name, value) {
        Ok(_) => {
            tracing::debug!(header = %template.name(), "appended clacks header");
            InjectOutcome::Appended
        }
        Err(e) => {
            tracing::error!(
                header = %template.name(),
                error = %e,
                "failed to append clacks header, response left unchanged"
            );
            InjectOutcome::Skipped
        }
    }
}
