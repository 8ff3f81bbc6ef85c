//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the evaluator and its consumers.

use std::fmt;
use std::str::FromStr;

use crate::errors::CalculatorError;

/// Selects which operator set a request is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Two-operand arithmetic: `+ - * /`.
    #[default]
    Normal,
    /// Single-operand functions: `sin cos tan log`.
    Scientific,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Scientific => "scientific",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "scientific" => Ok(Self::Scientific),
            _ => Err(CalculatorError::InvalidInput),
        }
    }
}

/// Operators accepted in [`Mode::Normal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Parse a wire token. Tokens are matched exactly.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.token() == token)
    }

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

/// Functions accepted in [`Mode::Scientific`]. Trigonometry works in radians, `Log` is base 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Log,
}

impl ScientificFunction {
    pub const ALL: [Self; 4] = [Self::Sin, Self::Cos, Self::Tan, Self::Log];

    /// Parse a wire token. Tokens are matched exactly.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.token() == token)
    }

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
        }
    }
}

/// A single calculation as received from a caller.
///
/// Presence is explicit: `Some(0.0)` is a valid operand, `None` means "not provided".
/// The operator stays a raw token here; the evaluator decides whether it is valid
/// for the requested mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationRequest {
    pub operand1: Option<f64>,
    /// Only read in [`Mode::Normal`].
    pub operand2: Option<f64>,
    pub operator: Option<String>,
    pub mode: Mode,
}

impl CalculationRequest {
    #[must_use]
    pub fn normal(operand1: f64, operand2: f64, operator: impl Into<String>) -> Self {
        Self {
            operand1: Some(operand1),
            operand2: Some(operand2),
            operator: Some(operator.into()),
            mode: Mode::Normal,
        }
    }

    #[must_use]
    pub fn scientific(operand1: f64, operator: impl Into<String>) -> Self {
        Self {
            operand1: Some(operand1),
            operand2: None,
            operator: Some(operator.into()),
            mode: Mode::Scientific,
        }
    }
}
