//! Form validation engine.
//!
//! Provides rule types, format predicates, and a pure-logic evaluator that
//! turns a candidate record into a normalized record or a list of
//! field-level violations.

pub mod evaluator;
pub mod format;
pub mod rules;

pub use evaluator::validate;
pub use rules::{FieldErrors, FieldViolation, Record, Schema, ViolationKind};
