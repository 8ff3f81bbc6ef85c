//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClientV1`)
//! - Models (`CalculationRequest`, `Mode`, operator tokens)
//! - Error types (`CalculatorError`, `ErrorClass`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculationRequest, CalculatorClientV1};
//!
//! let client: Arc<dyn CalculatorClientV1> = module.client();
//! let quotient = client.evaluate(CalculationRequest::normal(6.0, 3.0, "/")).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::CalculatorClientV1;
pub use errors::{CalculatorError, ErrorClass};
pub use models::{BinaryOperator, CalculationRequest, Mode, ScientificFunction};
