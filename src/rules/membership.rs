//! Membership rules: the value is one of a set, or the value holds something.

use crate::config::{Configuration, FromConfig, Residual};
use crate::core::{accept, reject, Concern, Key, Outcome, Validator, Value};
use tracing::debug;

/// Value must be one of the configured `choices`.
///
/// Choices may be plain values or label→value mappings; only the value side
/// of a labelled choice takes part in matching. A single mapping of labels
/// to values is accepted as well.
///
/// # Example
///
/// ```rust
/// use vetting::core::{OutcomeExt, Validator, Value};
/// use vetting::rules::In;
///
/// let rule = In::new([Value::from("foo"), Value::mapping([("baz", "thud")])]);
///
/// assert!(rule.validate("thud".into(), None).is_success());
/// assert_eq!(
///     rule.validate("baz".into(), None).rendered().as_deref(),
///     Some("Value is not in allowed list.")
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct In {
    has_choices: bool,
    allowed: Vec<Value>,
    residual: Residual,
}

impl In {
    pub fn new<I, V>(choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let choices = Value::sequence(choices);
        Self {
            has_choices: choices.is_truthy(),
            allowed: allowed_values(choices),
            residual: Residual::default(),
        }
    }

    /// The values a validated value is compared against.
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

/// Flatten configured choices to the values they allow.
fn allowed_values(choices: Value) -> Vec<Value> {
    match choices {
        Value::Sequence(items) => items
            .into_iter()
            .flat_map(|item| match item {
                Value::Mapping(entries) => entries.into_iter().map(|(_, v)| v).collect::<Vec<_>>(),
                plain => vec![plain],
            })
            .collect(),
        Value::Mapping(entries) => entries.into_iter().map(|(_, v)| v).collect(),
        scalar if scalar.is_truthy() => vec![scalar],
        _ => Vec::new(),
    }
}

impl FromConfig for In {
    fn from_config(mut config: Configuration) -> Self {
        let choices = config.take("choices").unwrap_or_default();
        let has_choices = choices.is_truthy();
        let allowed = allowed_values(choices);
        debug!(rule = "In", choices = allowed.len(), "rule configured");

        Self {
            has_choices,
            allowed,
            residual: config.into_residual(),
        }
    }
}

impl Validator for In {
    fn name(&self) -> &str {
        "In"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        if !self.has_choices {
            return reject(self.name(), Concern::new("Value cannot exist in empty set."));
        }

        if !self.allowed.contains(&value) {
            return reject(self.name(), Concern::new("Value is not in allowed list."));
        }

        accept(value)
    }
}

/// Value must contain the configured `contains` value.
///
/// - Strings pass when the text form of `contains` occurs anywhere in them.
/// - Sequences and mappings pass when `contains` is one of their keys or one
///   of their values. Sequence keys are positions, so `0` is found in any
///   non-empty sequence.
/// - Anything else fails, as does every value when `contains` is unset.
#[derive(Clone, Debug, Default)]
pub struct Contains {
    contains: Option<Value>,
    residual: Residual,
}

impl Contains {
    pub fn new(contains: impl Into<Value>) -> Self {
        Self {
            contains: Some(contains.into()).filter(|v| !v.is_null()),
            residual: Residual::default(),
        }
    }

    pub fn contains(&self) -> Option<&Value> {
        self.contains.as_ref()
    }

    fn is_found_in(&self, value: &Value) -> bool {
        let Some(needle) = &self.contains else {
            return false;
        };

        match value {
            Value::Sequence(_) | Value::Mapping(_) => {
                let as_key = Key::from_value(needle).is_some_and(|key| value.has_key(&key));
                as_key || value.values().any(|v| v == needle)
            }
            Value::String(haystack) => match needle {
                Value::Sequence(_) | Value::Mapping(_) => false,
                scalar => haystack.contains(scalar.to_string().as_str()),
            },
            _ => false,
        }
    }
}

impl FromConfig for Contains {
    fn from_config(mut config: Configuration) -> Self {
        let contains = config.take("contains");
        debug!(rule = "Contains", configured = contains.is_some(), "rule configured");

        Self {
            contains,
            residual: config.into_residual(),
        }
    }
}

impl Validator for Contains {
    fn name(&self) -> &str {
        "Contains"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        if self.is_found_in(&value) {
            return accept(value);
        }

        let needle = self.contains.as_ref().map(Value::to_string).unwrap_or_default();
        reject(
            self.name(),
            Concern::new("Value does not contain {contains}.").token("{contains}", needle),
        )
    }
}
