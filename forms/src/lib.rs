//! # Itemdeck Forms
//!
//! Stateless validation rule factories for form fields. Each rule is a
//! pure function from the field's current text to `Ok(())` or a
//! user-facing message. Failures are values, never errors: the message
//! goes straight to the form field, and callers assemble rule chains
//! themselves.

pub mod rules;

pub use rules::{max, max_length, min, min_length, required, RuleResult};
