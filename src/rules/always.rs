//! Unconditional rules, mostly useful for swapping out real rules while
//! debugging.

use crate::config::{Configuration, FromConfig, Residual};
use crate::core::{accept, reject, Concern, Outcome, Validator, Value};

/// Always passes, returning the value unchanged (absent values included).
#[derive(Clone, Debug, Default)]
pub struct Always {
    residual: Residual,
}

impl FromConfig for Always {
    fn from_config(config: Configuration) -> Self {
        Self {
            residual: config.into_residual(),
        }
    }
}

impl Validator for Always {
    fn name(&self) -> &str {
        "Always"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, value: Value, _context: Option<&Value>) -> Outcome {
        accept(value)
    }
}

/// Never passes.
#[derive(Clone, Debug, Default)]
pub struct Never {
    residual: Residual,
}

impl FromConfig for Never {
    fn from_config(config: Configuration) -> Self {
        Self {
            residual: config.into_residual(),
        }
    }
}

impl Validator for Never {
    fn name(&self) -> &str {
        "Never"
    }

    fn residual(&self) -> &Residual {
        &self.residual
    }

    fn validate(&self, _value: Value, _context: Option<&Value>) -> Outcome {
        reject(self.name(), Concern::new("Set to always fail."))
    }
}
