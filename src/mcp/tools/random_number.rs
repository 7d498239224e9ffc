//! `random_number` tool: uniform random integer in an inclusive range.

use rand::Rng;
use serde::Deserialize;

use crate::{AppError, Result};

/// Lower bound used when `min` is omitted.
pub const DEFAULT_MIN: i64 = 0;

/// Upper bound used when `max` is omitted.
pub const DEFAULT_MAX: i64 = 100;

/// Largest magnitude an `f64` represents exactly as an integer (2^53 - 1).
const MAX_EXACT: f64 = 9_007_199_254_740_991.0;

/// Input parameters for `random_number`.
///
/// Bounds arrive as JSON numbers and must be integral.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RandomNumberInput {
    /// Inclusive lower bound (default 0).
    pub min: Option<f64>,
    /// Inclusive upper bound (default 100).
    pub max: Option<f64>,
}

impl RandomNumberInput {
    /// Resolve defaults and validate the bounds.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if a bound is not an integer or
    /// `min > max`.
    pub fn bounds(&self) -> Result<(i64, i64)> {
        let min = self.min.map_or(Ok(DEFAULT_MIN), |v| integral("min", v))?;
        let max = self.max.map_or(Ok(DEFAULT_MAX), |v| integral("max", v))?;
        if min > max {
            return Err(AppError::Validation(format!(
                "min ({min}) must not be greater than max ({max})"
            )));
        }
        Ok((min, max))
    }
}

#[allow(clippy::cast_possible_truncation)] // Range and integrality checked above the cast.
fn integral(field: &str, value: f64) -> Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_EXACT {
        return Err(AppError::Validation(format!(
            "{field} must be an integer, got {value}"
        )));
    }
    Ok(value as i64)
}

/// Handle the `random_number` tool call.
///
/// # Errors
///
/// Returns `AppError::Validation` for malformed bounds.
pub fn run<R: Rng + ?Sized>(input: &RandomNumberInput, rng: &mut R) -> Result<String> {
    let (min, max) = input.bounds()?;
    let value = rng.gen_range(min..=max);
    Ok(format!("Random number between {min} and {max}: {value}"))
}
