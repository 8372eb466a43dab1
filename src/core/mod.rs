//! Core validation types and the validator contract.
//!
//! This module contains the pure building blocks every rule is made of:
//! - [`Value`], the tagged datum flowing through validation
//! - [`Concern`], the templated description of a failure
//! - the [`Validator`] trait and its [`Outcome`]
//!
//! Nothing here performs I/O or keeps mutable state. A rule's outcome is a
//! function of its configuration, the value, and the context alone.

mod concern;
mod validator;
mod value;

pub use concern::Concern;
pub use validator::{accept, reject, Identity, Outcome, OutcomeExt, Validator};
pub use value::{Key, Number, Value};
