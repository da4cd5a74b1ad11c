use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InvalidParameter(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidParameter(msg) => write!(f, "Invalid Parameter: {}", msg),
        }
    }
}

impl std::error::Error for ModelError {}

impl ModelError {
    pub fn invalid_parameter(message: &str) -> Self { ModelError::InvalidParameter(message.to_string()) }
}

/// Reject anything that is not a finite number strictly above zero.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ModelError::invalid_parameter(&format!("{name} must be finite and > 0, got {value}")))
    }
}

/// Reject negative, NaN and infinite values; zero is allowed.
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::invalid_parameter(&format!("{name} must be finite and >= 0, got {value}")))
    }
}
