//! Plugin registration and middleware wiring.
//!
//! # Responsibilities
//! - Build the template field exactly once at startup (fail-closed)
//! - Expose the response hook as a `tower` layer, the host's
//!   extension-point contract
//! - Forward every request untouched and run the hook on its response
//!
//! # Design Decisions
//! - Registration failure leaves the hook unregistered; the host keeps
//!   serving traffic without the plugin rather than crashing
//! - Inner service errors pass through unchanged; the plugin is invisible
//!   to the transaction outcome

pub mod layer;

pub use layer::{ClacksLayer, ClacksService};
