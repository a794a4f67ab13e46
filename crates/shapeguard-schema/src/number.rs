//! # Number Schema
//!
//! Accepts integers and floats. Constraints are checked in this order,
//! stopping at the first failure:
//!
//! 1. `multiple_of`: `value % multiple_of == 0`
//! 2. `maximum`: `value <= maximum`
//! 3. `exclusive_maximum`: `value < exclusive_maximum`
//! 4. `minimum`: `value >= minimum`
//! 5. `exclusive_minimum`: `value > exclusive_minimum`
//!
//! Unset bounds are vacuously satisfied.
//!
//! ## Known Limitation
//!
//! Divisibility uses the plain `f64` remainder with no tolerance. Values
//! that are mathematically exact multiples of a non-integral divisor
//! (`0.3` of `0.1`) can leave a non-zero remainder and be rejected. A
//! divisor of zero yields NaN and always rejects.

use std::fmt;

use serde_json::Value;
use shapeguard_core::value::as_number;
use shapeguard_core::DiagnosticNode;

/// Number with divisibility and range constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberSchema {
    multiple_of: Option<f64>,
    maximum: Option<f64>,
    exclusive_maximum: Option<f64>,
    minimum: Option<f64>,
    exclusive_minimum: Option<f64>,
}

impl NumberSchema {
    /// Any number.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `value % divisor == 0` in `f64` arithmetic.
    pub fn multiple_of(mut self, divisor: f64) -> Self {
        self.multiple_of = Some(divisor);
        self
    }

    /// Require `value <= max`.
    pub fn maximum(mut self, max: f64) -> Self {
        self.maximum = Some(max);
        self
    }

    /// Require `value < max`.
    pub fn exclusive_maximum(mut self, max: f64) -> Self {
        self.exclusive_maximum = Some(max);
        self
    }

    /// Require `value >= min`.
    pub fn minimum(mut self, min: f64) -> Self {
        self.minimum = Some(min);
        self
    }

    /// Require `value > min`.
    pub fn exclusive_minimum(mut self, min: f64) -> Self {
        self.exclusive_minimum = Some(min);
        self
    }

    /// Trace a number below `parent`, checking constraints in fixed order.
    pub fn trace_from(&self, value: &Value, parent: &DiagnosticNode) -> DiagnosticNode {
        let Some(n) = as_number(value) else {
            return parent.invalidate("not a number");
        };

        if let Some(m) = self.multiple_of {
            if n % m != 0.0 {
                return parent.invalidate(format!("{value} is not a multiple of {m}"));
            }
        }
        if let Some(max) = self.maximum {
            if n > max {
                return parent.invalidate(format!("{value} is greater than maximum {max}"));
            }
        }
        if let Some(max) = self.exclusive_maximum {
            if n >= max {
                return parent.invalidate(format!(
                    "{value} is not less than exclusiveMaximum {max}"
                ));
            }
        }
        if let Some(min) = self.minimum {
            if n < min {
                return parent.invalidate(format!("{value} is less than minimum {min}"));
            }
        }
        if let Some(min) = self.exclusive_minimum {
            if n <= min {
                return parent.invalidate(format!(
                    "{value} is not greater than exclusiveMinimum {min}"
                ));
            }
        }

        parent.validate(format!("{value} satisfies all numeric constraints"))
    }
}

impl fmt::Display for NumberSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = [
            ("multipleOf", self.multiple_of),
            ("maximum", self.maximum),
            ("exclusiveMaximum", self.exclusive_maximum),
            ("minimum", self.minimum),
            ("exclusiveMinimum", self.exclusive_minimum),
        ];
        let set: Vec<String> = bounds
            .iter()
            .filter_map(|(name, v)| v.map(|v| format!("{name}: {v}")))
            .collect();
        if set.is_empty() {
            f.write_str("Number")
        } else {
            write!(f, "Number({})", set.join(", "))
        }
    }
}
