//! Hook execution against a host-owned transaction.

use axum::http::HeaderMap;

use crate::header::TemplateField;
use crate::hook::response::{inject, InjectOutcome};

/// One in-flight transaction as the host exposes it to the hook.
///
/// The header collection is borrowed for the duration of the hook body and
/// released by scope exit on every path, including failure paths.
pub trait Transaction {
    /// The response header collection, if it is available at the
    /// response-header-read point.
    fn response_headers(&mut self) -> Option<&mut HeaderMap>;

    /// Hand control back to the host so the transaction continues.
    fn resume(&mut self);
}

/// Run the response hook against one transaction.
///
/// The transaction is always resumed, whether or not the header was
/// appended; no failure here ever blocks or fails the transaction.
pub fn run<T: Transaction>(template: &TemplateField, txn: &mut T) -> InjectOutcome {
    let outcome = match txn.response_headers() {
        Some(headers) => inject(template, headers),
        None => {
            tracing::error!("response headers unavailable, skipping injection");
            InjectOutcome::Skipped
        }
    };
    txn.resume();
    outcome
}
