//! Template header field.
//!
//! # Responsibilities
//! - Hold the fixed header name/value constants
//! - Build the process-lifetime template field exactly once at startup
//! - Guarantee the template is immutable after construction
//!
//! # Design Decisions
//! - The template is an owned value handed to the layer at registration,
//!   not a global; initialization order stays explicit and testable
//! - `HeaderName`/`HeaderValue` are `Bytes`-backed, so the per-response
//!   copy is a cheap clone that never mutably aliases the template

pub mod template;

pub use template::{TemplateField, CLACKS_HEADER_NAME, CLACKS_HEADER_VALUE};
