//! The built-in rule catalog.
//!
//! Every rule is an independent [`Validator`](crate::core::Validator) built
//! from a [`Configuration`](crate::config::Configuration) via
//! [`FromConfig`](crate::config::FromConfig), or directly with its typed
//! constructor.
//!
//! | Rule             | Options                | Passes when                          |
//! |------------------|------------------------|--------------------------------------|
//! | `Always`         |                        | always                               |
//! | `Never`          |                        | never                                |
//! | `AlwaysTruthy`   |                        | value is truthy                      |
//! | `AlwaysFalsy`    |                        | value is falsy                       |
//! | `AlwaysRequired` |                        | value is present and non-empty       |
//! | `AlwaysMissing`  |                        | value is absent or empty             |
//! | `In`             | `choices`              | value is one of the choices          |
//! | `Contains`       | `contains`             | value holds the configured value     |
//! | `Length`         | `min`, `max`, `step`   | length is within bounds and on step  |
//!
//! # Example
//!
//! ```rust
//! use vetting::config::{Configuration, FromConfig};
//! use vetting::core::{OutcomeExt, Validator, Value};
//! use vetting::rules::Length;
//!
//! let rule = Length::from_config(Configuration::new().set("min", 3).set("max", 5));
//!
//! assert!(rule.validate(Value::from("four"), None).is_success());
//! assert_eq!(
//!     rule.validate(Value::from("foobar"), None).rendered().as_deref(),
//!     Some("Out of bounds; must be greater than 3 and less than 5.")
//! );
//! ```

mod always;
mod length;
mod membership;
mod presence;
mod truthiness;

pub use always::{Always, Never};
pub use length::{Length, LengthBuilder};
pub use membership::{Contains, In};
pub use presence::{AlwaysMissing, AlwaysRequired};
pub use truthiness::{AlwaysFalsy, AlwaysTruthy};
