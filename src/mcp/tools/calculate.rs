//! `calculate` tool: arithmetic on two numbers.

use std::str::FromStr;

use serde::Deserialize;

use crate::{AppError, Result};

/// Input parameters for `calculate`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CalculateInput {
    /// One of `add`, `subtract`, `multiply`, `divide`.
    pub operation: String,
    /// Left operand.
    pub a: f64,
    /// Right operand.
    pub b: f64,
}

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, rejected when `b` is zero.
    Divide,
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(AppError::UnknownOperation(other.to_owned())),
        }
    }
}

impl Operation {
    /// Apply the operation.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Domain` for division by zero or a result that
    /// overflows to a non-finite value.
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(AppError::Domain("Cannot divide by zero".into()));
                }
                a / b
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(AppError::Domain("Result is not a finite number".into()))
        }
    }
}

/// Handle the `calculate` tool call.
///
/// # Errors
///
/// Returns `AppError::UnknownOperation` or `AppError::Domain`.
pub fn run(input: &CalculateInput) -> Result<String> {
    let operation: Operation = input.operation.parse()?;
    let result = operation.apply(input.a, input.b)?;
    Ok(format!(
        "Result: {} {} {} = {}",
        format_number(input.a),
        input.operation,
        format_number(input.b),
        format_number(result)
    ))
}

/// Render a number as JSON-speaking clients print it: plain decimal for
/// magnitudes in `[1e-6, 1e21)`, exponent form with an explicit sign outside.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
