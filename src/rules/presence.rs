//! Presence rules. "Empty" here means absent, `""`, or an empty collection;
//! zero is a provided value.

use crate::config::{Configuration, FromConfig, Residual};
use crate::core::{accept, reject, Concern, Outcome, Validator, Value};

/// A value must always be provided.
#[derive(Clone, Debug, Default)]
pub struct AlwaysRequired {
    residual: Residual,
}

impl FromConfig for AlwaysRequired {
    fn from_config(config: Configuration) -> Self {
        Self {
            residual: config.into_residual(),
        }
    }
}

impl Validator for AlwaysRequired {
    fn name(&self) -> &str {
        "AlwaysRequired"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        if value.is_null() {
            return reject(
                self.name(),
                Concern::new("Value is required, but none was provided."),
            );
        }

        if value.is_empty() {
            return reject(
                self.name(),
                Concern::new("Value is required, but provided value is empty."),
            );
        }

        accept(value)
    }
}

/// A value must not be provided.
#[derive(Clone, Debug, Default)]
pub struct AlwaysMissing {
    residual: Residual,
}

impl FromConfig for AlwaysMissing {
    fn from_config(config: Configuration) -> Self {
        Self {
            residual: config.into_residual(),
        }
    }
}

impl Validator for AlwaysMissing {
    fn name(&self) -> &str {
        "AlwaysMissing"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        if value.is_empty() {
            accept(value)
        } else {
            reject(
                self.name(),
                Concern::new("Value must be omitted, but value was provided."),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OutcomeExt;

    #[test]
    fn required_accepts_zero() {
        let rule = AlwaysRequired::default();
        assert_eq!(rule.validate(Value::from(0), None).passed(), Some(&Value::from(0)));
        assert_eq!(rule.validate(Value::from("0"), None).passed(), Some(&Value::from("0")));
        assert_eq!(rule.validate(Value::from(false), None).passed(), Some(&Value::from(false)));
    }

    #[test]
    fn required_rejects_absent_values() {
        let outcome = AlwaysRequired::default().validate(Value::Null, None);
        assert_eq!(
            outcome.rendered().as_deref(),
            Some("Value is required, but none was provided.")
        );
    }

    #[test]
    fn required_rejects_empty_values() {
        let rule = AlwaysRequired::default();

        for value in [Value::from(""), Value::Sequence(vec![]), Value::Mapping(vec![])] {
            assert_eq!(
                rule.validate(value, None).rendered().as_deref(),
                Some("Value is required, but provided value is empty.")
            );
        }
    }

    #[test]
    fn missing_accepts_empty_values() {
        let rule = AlwaysMissing::default();

        for value in [Value::Null, Value::from(""), Value::Sequence(vec![])] {
            assert_eq!(rule.validate(value.clone(), None).passed(), Some(&value));
        }
    }

    #[test]
    fn missing_rejects_provided_values() {
        let rule = AlwaysMissing::default();

        for value in [Value::from(0), Value::from("x"), Value::sequence([1])] {
            assert_eq!(
                rule.validate(value, None).rendered().as_deref(),
                Some("Value must be omitted, but value was provided.")
            );
        }
    }
}
