use std::fmt;

use crate::model::ParamField;

/// Errors from parsing a `key=value` parameter override.
#[derive(Debug, Clone)]
pub enum OverrideError {
    /// The override string has no `=` separator.
    MissingSeparator(String),
    /// The key before `=` names no known parameter field.
    UnknownField(String),
    /// The value after `=` is not a number.
    InvalidValue { field: ParamField, value: String },
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverrideError::MissingSeparator(input) => {
                write!(f, "expected KEY=VALUE, got {input:?}")
            }
            OverrideError::UnknownField(key) => write!(f, "unknown parameter field {key:?}"),
            OverrideError::InvalidValue { field, value } => {
                write!(f, "invalid value {value:?} for {}", field.key())
            }
        }
    }
}

impl std::error::Error for OverrideError {}
