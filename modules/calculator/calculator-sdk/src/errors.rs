//! Error types for the calculator SDK.

use thiserror::Error;

use crate::models::Mode;

/// Coarse classification of a failure, used by transports to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request itself is at fault.
    ClientError,
    /// The evaluator failed unexpectedly.
    ServerError,
}

/// Reasons a calculation can be rejected.
///
/// The `Display` text is the message reported to end users verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// A required operand or the operator token is missing, or an operand is not finite.
    #[error("Invalid input")]
    InvalidInput,

    /// The operator token is not part of the set allowed for the mode.
    #[error("{}", invalid_operation_message(.mode))]
    InvalidOperation { mode: Mode },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Log of non-positive number")]
    NonPositiveLogArgument,

    /// Unexpected fault. The detail is for logs only and never shown to callers.
    #[error("Server error")]
    Internal(String),
}

#[allow(clippy::trivially_copy_pass_by_ref)] // thiserror passes fields by reference
fn invalid_operation_message(mode: &Mode) -> &'static str {
    match mode {
        Mode::Normal => "Invalid operation",
        Mode::Scientific => "Invalid scientific operation",
    }
}

impl CalculatorError {
    #[must_use]
    pub fn invalid_operation(mode: Mode) -> Self {
        Self::InvalidOperation { mode }
    }

    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidOperation { .. } => "INVALID_OPERATION",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::NonPositiveLogArgument => "NON_POSITIVE_LOG_ARGUMENT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Internal(_) => ErrorClass::ServerError,
            _ => ErrorClass::ClientError,
        }
    }
}
