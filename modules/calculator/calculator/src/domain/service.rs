//! Domain service for the calculator.
//!
//! Validation and arithmetic live here and nowhere else; every transport
//! adapter funnels into [`Service::evaluate`].

use calculator_sdk::{
    BinaryOperator, CalculationRequest, CalculatorError, Mode, ScientificFunction,
};
use tracing::{debug, instrument};

use crate::config::CalculatorConfig;

/// A request that passed validation and is ready to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Binary {
        operator: BinaryOperator,
        lhs: f64,
        rhs: f64,
    },
    Scientific {
        function: ScientificFunction,
        arg: f64,
    },
}

impl Evaluation {
    /// Compute the result with plain `f64` math. No rounding is applied.
    ///
    /// # Errors
    /// `DivisionByZero` when dividing by either zero, `NonPositiveLogArgument`
    /// when taking `log` of a value `<= 0`.
    pub fn compute(self) -> Result<f64, CalculatorError> {
        match self {
            Self::Binary { operator, lhs, rhs } => match operator {
                BinaryOperator::Add => Ok(lhs + rhs),
                BinaryOperator::Subtract => Ok(lhs - rhs),
                BinaryOperator::Multiply => Ok(lhs * rhs),
                BinaryOperator::Divide => {
                    // either signed zero
                    if rhs == 0.0 {
                        return Err(CalculatorError::DivisionByZero);
                    }
                    Ok(lhs / rhs)
                }
            },
            Self::Scientific { function, arg } => match function {
                ScientificFunction::Sin => Ok(arg.sin()),
                ScientificFunction::Cos => Ok(arg.cos()),
                ScientificFunction::Tan => Ok(arg.tan()),
                ScientificFunction::Log => {
                    if arg <= 0.0 {
                        return Err(CalculatorError::NonPositiveLogArgument);
                    }
                    Ok(arg.log10())
                }
            },
        }
    }
}

/// Runtime switches for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pub enable_scientific: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            enable_scientific: true,
        }
    }
}

impl From<&CalculatorConfig> for ServiceConfig {
    fn from(cfg: &CalculatorConfig) -> Self {
        Self {
            enable_scientific: cfg.enable_scientific,
        }
    }
}

/// Stateless evaluator. Safe to share behind an `Arc` across any number of tasks.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Validate and evaluate one request.
    ///
    /// # Errors
    /// Any [`CalculatorError`] produced by [`Service::validate`] or
    /// [`Evaluation::compute`].
    #[instrument(
        skip(self, request),
        fields(mode = %request.mode, operator = request.operator.as_deref())
    )]
    pub fn evaluate(&self, request: &CalculationRequest) -> Result<f64, CalculatorError> {
        let outcome = self.validate(request).and_then(Evaluation::compute);

        match &outcome {
            Ok(result) => debug!(result, "Calculation completed"),
            Err(e) => debug!(code = e.code(), error = %e, "Calculation rejected"),
        }
        outcome
    }

    /// Check presence of every required field, then resolve the operator for the mode.
    ///
    /// Presence is checked before the operator, so a request missing an operand is
    /// `InvalidInput` even when its operator is also wrong.
    ///
    /// # Errors
    /// `InvalidInput` for a missing or non-finite operand or a missing/empty operator,
    /// `InvalidOperation` for an operator outside the mode's set.
    pub fn validate(&self, request: &CalculationRequest) -> Result<Evaluation, CalculatorError> {
        let lhs = required_operand(request.operand1)?;

        match request.mode {
            Mode::Normal => {
                let rhs = required_operand(request.operand2)?;
                let token = required_operator(request)?;
                let operator = BinaryOperator::from_token(token)
                    .ok_or(CalculatorError::invalid_operation(Mode::Normal))?;
                Ok(Evaluation::Binary { operator, lhs, rhs })
            }
            Mode::Scientific => {
                let token = required_operator(request)?;
                let function = ScientificFunction::from_token(token)
                    .filter(|_| self.config.enable_scientific)
                    .ok_or(CalculatorError::invalid_operation(Mode::Scientific))?;
                Ok(Evaluation::Scientific { function, arg: lhs })
            }
        }
    }
}

fn required_operand(value: Option<f64>) -> Result<f64, CalculatorError> {
    value
        .filter(|v| v.is_finite())
        .ok_or(CalculatorError::InvalidInput)
}

fn required_operator(request: &CalculationRequest) -> Result<&str, CalculatorError> {
    request
        .operator
        .as_deref()
        .filter(|token| !token.is_empty())
        .ok_or(CalculatorError::InvalidInput)
}
