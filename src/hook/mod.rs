//! Response hook: copy the template field into one response.
//!
//! # Responsibilities
//! - Append a copy of the template field to a response header collection
//! - Skip injection on any per-response failure without blocking the
//!   transaction
//! - Drive a host-owned transaction through the hook and always resume it
//!
//! # Design Decisions
//! - Failures here are recovered locally and reported as an outcome, never
//!   as an error; the transaction proceeds as if the plugin were transparent
//! - Existing headers are never removed or modified; the copy is appended
//!   after them

pub mod response;
pub mod transaction;

pub use response::{inject, InjectOutcome};
pub use transaction::{run, Transaction};
