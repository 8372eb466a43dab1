//! The validator contract.

use super::concern::Concern;
use super::value::Value;
use crate::config::{Configuration, FromConfig, Residual};
use stillwater::validation::Validation;
use tracing::trace;

/// Result of validating a value: the (possibly transformed) value, or a
/// [`Concern`] describing why it was rejected.
pub type Outcome = Validation<Value, Concern>;

/// A configured, reusable unit of validation logic.
///
/// Rules are immutable once built. `validate` takes `&self` and touches no
/// shared state, so a rule behind an `Arc<dyn Validator>` can be used from
/// any number of threads at once.
///
/// # Example
///
/// ```rust
/// use vetting::config::Residual;
/// use vetting::core::{accept, reject, Concern, Outcome, OutcomeExt, Validator, Value};
///
/// struct Lowercase {
///     residual: Residual,
/// }
///
/// impl Validator for Lowercase {
///     fn name(&self) -> &str {
///         "Lowercase"
///     }
///
///     fn residual(&self) -> &Residual {
///         &self.residual
///     }
///
///     fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
///         match value {
///             Value::String(s) => accept(Value::String(s.to_lowercase())),
///             _ => reject(self.name(), Concern::new("Value must be text.")),
///         }
///     }
/// }
///
/// let rule = Lowercase { residual: Residual::default() };
/// assert_eq!(rule.validate("MiXeD".into(), None).passed(), Some(&Value::from("mixed")));
/// ```
pub trait Validator: Send + Sync {
    /// Catalog name of the rule.
    fn name(&self) -> &str;

    /// Configuration options this rule did not declare.
    fn residual(&self) -> &Residual;

    /// Look up a leftover configuration option by name.
    fn option(&self, name: &str) -> Option<&Value> {
        self.residual().get(name)
    }

    /// Validate `value`, returning it (possibly transformed) or a concern.
    ///
    /// `context` identifies what is being validated, e.g. a field path. It is
    /// passed through untouched for rules that want it.
    ///
    /// The default accepts every value unchanged.
    fn validate(&self, value: Value, context: Option<&Value>) -> Outcome {
        let _ = context;
        accept(value)
    }
}

/// Successful outcome carrying `value`.
pub fn accept(value: Value) -> Outcome {
    Validation::Success(value)
}

/// Failed outcome carrying `concern`, raised by the rule called `rule`.
pub fn reject(rule: &str, concern: Concern) -> Outcome {
    trace!(rule, concern = %concern, "value rejected");
    Validation::Failure(concern)
}

/// Inspection helpers for [`Outcome`].
pub trait OutcomeExt {
    /// The accepted value, if validation passed.
    fn passed(&self) -> Option<&Value>;

    /// The concern, if validation failed.
    fn concern(&self) -> Option<&Concern>;

    /// The rendered concern text, if validation failed.
    fn rendered(&self) -> Option<String>;

    /// Convert into a standard `Result` for `?`-based flows.
    fn into_result(self) -> Result<Value, Concern>;
}

impl OutcomeExt for Outcome {
    fn passed(&self) -> Option<&Value> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    fn concern(&self) -> Option<&Concern> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(concern) => Some(concern),
        }
    }

    fn rendered(&self) -> Option<String> {
        self.concern().map(Concern::render)
    }

    fn into_result(self) -> Result<Value, Concern> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(concern) => Err(concern),
        }
    }
}

/// The base validator: configurable, and accepts any value unchanged.
#[derive(Clone, Debug, Default)]
pub struct Identity {
    residual: Residual,
}

impl FromConfig for Identity {
    fn from_config(config: Configuration) -> Self {
        Self {
            residual: config.into_residual(),
        }
    }
}

impl Validator for Identity {
    fn name(&self) -> &str {
        "Validator"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct EchoContext {
        residual: Residual,
    }

    impl Validator for EchoContext {
        fn name(&self) -> &str {
            "EchoContext"
        }

        fn residual(&self) -> &Residual {
            &self.residual
        }

        fn validate(&self, value: Value, context: Option<&Value>) -> Outcome {
            match context {
                Some(path) => reject(
                    self.name(),
                    Concern::new("{path}").token("{path}", path.to_string()),
                ),
                None => accept(value),
            }
        }
    }

    #[test]
    fn identity_returns_value_unchanged() {
        let rule = Identity::default();
        let outcome = rule.validate(Value::from("foo"), None);

        assert!(outcome.is_success());
        assert_eq!(outcome.passed(), Some(&Value::from("foo")));
    }

    #[test]
    fn identity_keeps_all_options_as_residual() {
        let rule = Identity::from_config(Configuration::new().set("label", "Email"));

        assert_eq!(rule.option("label"), Some(&Value::from("Email")));
        assert_eq!(rule.option("missing"), None);
    }

    #[test]
    fn context_is_threaded_to_custom_rules() {
        let rule = EchoContext {
            residual: Residual::default(),
        };
        let path = Value::from("user.email");

        let outcome = rule.validate(Value::from("x"), Some(&path));
        assert_eq!(outcome.rendered().as_deref(), Some("user.email"));

        let outcome = rule.validate(Value::from("x"), None);
        assert!(outcome.is_success());
    }

    #[test]
    fn outcome_converts_into_result() {
        let ok = accept(Value::from(1)).into_result();
        assert_eq!(ok.unwrap(), Value::from(1));

        let err = reject("Test", Concern::new("nope")).into_result();
        assert_eq!(err.unwrap_err().render(), "nope");
    }

    #[test]
    fn validators_are_shareable_across_threads() {
        let rule: Arc<dyn Validator> = Arc::new(Identity::default());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let rule = Arc::clone(&rule);
                std::thread::spawn(move || rule.validate(Value::from(i), None).into_result())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), Value::from(i));
        }
    }
}
