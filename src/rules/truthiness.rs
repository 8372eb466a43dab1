//! Rules built on permissive boolean coercion; see [`Value::is_truthy`].

use crate::config::{Configuration, FromConfig, Residual};
use crate::core::{accept, reject, Concern, Outcome, Validator, Value};

/// Value must be truthy.
#[derive(Clone, Debug, Default)]
pub struct AlwaysTruthy {
    residual: Residual,
}

impl FromConfig for AlwaysTruthy {
    fn from_config(config: Configuration) -> Self {
        Self {
            residual: config.into_residual(),
        }
    }
}

impl Validator for AlwaysTruthy {
    fn name(&self) -> &str {
        "AlwaysTruthy"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        if value.is_truthy() {
            accept(value)
        } else {
            reject(self.name(), Concern::new("Value is missing or empty"))
        }
    }
}

/// Value must be falsy.
#[derive(Clone, Debug, Default)]
pub struct AlwaysFalsy {
    residual: Residual,
}

impl FromConfig for AlwaysFalsy {
    fn from_config(config: Configuration) -> Self {
        Self {
            residual: config.into_residual(),
        }
    }
}

impl Validator for AlwaysFalsy {
    fn name(&self) -> &str {
        "AlwaysFalsy"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        if value.is_truthy() {
            reject(self.name(), Concern::new("Value should be falsy."))
        } else {
            accept(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OutcomeExt;

    fn falsy_values() -> Vec<Value> {
        vec![
            Value::from(false),
            Value::from(0),
            Value::from(-0.0),
            Value::from(0.0),
            Value::from(""),
            Value::from("0"),
            Value::Sequence(vec![]),
            Value::Null,
        ]
    }

    fn truthy_values() -> Vec<Value> {
        vec![
            Value::from(true),
            Value::from(1),
            Value::from(-2.5),
            Value::from("foo"),
            Value::from("false"),
            Value::sequence([Value::Null]),
            Value::mapping([("k", 0)]),
        ]
    }

    #[test]
    fn truthy_rejects_falsy_values() {
        let rule = AlwaysTruthy::default();

        for value in falsy_values() {
            let outcome = rule.validate(value.clone(), None);
            assert_eq!(
                outcome.rendered().as_deref(),
                Some("Value is missing or empty"),
                "{value:?}"
            );
        }
    }

    #[test]
    fn truthy_passes_truthy_values() {
        let rule = AlwaysTruthy::default();

        for value in truthy_values() {
            assert_eq!(rule.validate(value.clone(), None).passed(), Some(&value));
        }
    }

    #[test]
    fn falsy_passes_falsy_values() {
        let rule = AlwaysFalsy::default();

        for value in falsy_values() {
            assert_eq!(rule.validate(value.clone(), None).passed(), Some(&value));
        }
    }

    #[test]
    fn falsy_rejects_truthy_values() {
        let rule = AlwaysFalsy::default();

        for value in truthy_values() {
            let outcome = rule.validate(value.clone(), None);
            assert_eq!(
                outcome.rendered().as_deref(),
                Some("Value should be falsy."),
                "{value:?}"
            );
        }
    }
}
