//! Clacks overhead plugin for proxied HTTP responses.
//!
//! Appends `X-Clacks-Overhead: GNU Terry Pratchett` to every response that
//! passes through a service wrapped by [`ClacksLayer`].
//!
//! # Data Flow
//! ```text
//! Upstream response
//!     → plugin (ClacksService intercepts the response on its way out)
//!     → hook (append a copy of the template field)
//!     → Send to client
//! ```
//!
//! The template header field is built once at registration time and shared
//! read-only by every in-flight response. Injection failures never block or
//! fail a transaction; the response continues with its original headers.

pub mod error;
pub mod header;
pub mod hook;
pub mod plugin;

pub use error::PluginError;
pub use header::TemplateField;
pub use hook::InjectOutcome;
pub use plugin::{ClacksLayer, ClacksService};
