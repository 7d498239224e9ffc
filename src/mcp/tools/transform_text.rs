//! `transform_text` tool: case changes, reversal, and word counting.

use std::str::FromStr;

use serde::Deserialize;

use crate::{AppError, Result};

/// Input parameters for `transform_text`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TransformTextInput {
    /// Text to transform.
    pub text: String,
    /// One of `uppercase`, `lowercase`, `reverse`, `word_count`.
    pub operation: String,
}

/// Supported text transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Unicode uppercase.
    Uppercase,
    /// Unicode lowercase.
    Lowercase,
    /// Reverse by Unicode scalar value.
    Reverse,
    /// Count of whitespace-separated words.
    WordCount,
}

impl FromStr for Transform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uppercase" => Ok(Self::Uppercase),
            "lowercase" => Ok(Self::Lowercase),
            "reverse" => Ok(Self::Reverse),
            "word_count" => Ok(Self::WordCount),
            other => Err(AppError::UnknownOperation(other.to_owned())),
        }
    }
}

impl Transform {
    /// Apply the transformation, rendering the result as text.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::Reverse => text.chars().rev().collect(),
            Self::WordCount => text.split_whitespace().count().to_string(),
        }
    }
}

/// Handle the `transform_text` tool call.
///
/// # Errors
///
/// Returns `AppError::UnknownOperation` for an unrecognised operation.
pub fn run(input: &TransformTextInput) -> Result<String> {
    let transform: Transform = input.operation.parse()?;
    Ok(format!("Result: {}", transform.apply(&input.text)))
}
