//! Length bounds for strings and collections.

use crate::config::{Configuration, FromConfig, Residual};
use crate::core::{accept, reject, Concern, Outcome, Validator, Value};
use tracing::{debug, warn};

/// Value's length must fall within optional bounds and follow an optional
/// step.
///
/// Strings are measured in characters, sequences and mappings in elements.
/// With `min: 2, max: 10, step: 2` the accepted lengths are 2, 4, 6, 8 and 10.
///
/// Bounds are explicit options: a configured `0` is a real bound, so
/// `max: 0` accepts only empty values. A `step` of zero divides nothing and
/// is ignored.
///
/// # Example
///
/// ```rust
/// use vetting::core::{OutcomeExt, Validator, Value};
/// use vetting::rules::Length;
///
/// let rule = Length::builder().min(1).step(2).build();
///
/// assert!(rule.validate("one".into(), None).is_success());
/// assert_eq!(
///     rule.validate("on".into(), None).rendered().as_deref(),
///     Some("Offstep; must follow a step of 2.")
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Length {
    min: Option<i64>,
    max: Option<i64>,
    step: Option<i64>,
    residual: Residual,
}

impl Length {
    pub fn builder() -> LengthBuilder {
        LengthBuilder::new()
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }

    pub fn step(&self) -> Option<i64> {
        self.step
    }

    fn bounds_concern(&self, length: i64) -> Option<Concern> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if !(min..=max).contains(&length) => Some(
                Concern::new("Out of bounds; must be greater than {min} and less than {max}.")
                    .token("{min}", min.to_string())
                    .token("{max}", max.to_string()),
            ),
            (Some(min), _) if length < min => Some(
                Concern::new("Too small; must be greater than {min}.")
                    .token("{min}", min.to_string()),
            ),
            (_, Some(max)) if length > max => Some(
                Concern::new("Too large; must be less than {max}.")
                    .token("{max}", max.to_string()),
            ),
            _ => None,
        }
    }

    fn step_concern(&self, length: i64) -> Option<Concern> {
        let step = self.step?;
        let offset = i128::from(length) - i128::from(self.min.unwrap_or(0));

        if offset % i128::from(step) != 0 {
            Some(
                Concern::new("Offstep; must follow a step of {step}.")
                    .token("{step}", step.to_string()),
            )
        } else {
            None
        }
    }
}

/// Drop a zero step, which cannot divide a length.
fn usable_step(step: Option<i64>) -> Option<i64> {
    match step {
        Some(0) => {
            warn!(rule = "Length", "ignoring step of 0");
            None
        }
        other => other,
    }
}

/// Take an integer option. Values that are not integers stay in the
/// configuration and end up in the residual bag.
fn take_bound(config: &mut Configuration, name: &str) -> Option<i64> {
    let value = config.take(name)?;
    let bound = value
        .as_number()
        .and_then(|n| n.as_integer())
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<i64>().ok()));

    if bound.is_none() {
        warn!(
            rule = "Length",
            option = name,
            kind = value.kind(),
            "ignoring non-integer bound"
        );
        config.insert(name, value);
    }

    bound
}

impl FromConfig for Length {
    fn from_config(mut config: Configuration) -> Self {
        let min = take_bound(&mut config, "min");
        let max = take_bound(&mut config, "max");
        let step = usable_step(take_bound(&mut config, "step"));
        debug!(rule = "Length", ?min, ?max, ?step, "rule configured");

        Self {
            min,
            max,
            step,
            residual: config.into_residual(),
        }
    }
}

impl Validator for Length {
    fn name(&self) -> &str {
        "Length"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        let Some(length) = value.length() else {
            return reject(self.name(), Concern::new("Value's length cannot be measured."));
        };
        let length = i64::try_from(length).unwrap_or(i64::MAX);

        if let Some(concern) = self.bounds_concern(length) {
            return reject(self.name(), concern);
        }

        if let Some(concern) = self.step_concern(length) {
            return reject(self.name(), concern);
        }

        accept(value)
    }
}

/// Builder for [`Length`] rules
#[derive(Clone, Debug, Default)]
pub struct LengthBuilder {
    min: Option<i64>,
    max: Option<i64>,
    step: Option<i64>,
}

impl LengthBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive lower bound
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the inclusive upper bound
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the step, counted from `min` when one is set
    pub fn step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn build(self) -> Length {
        Length {
            min: self.min,
            max: self.max,
            step: usable_step(self.step),
            residual: Residual::default(),
        }
    }
}
