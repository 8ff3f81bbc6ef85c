//! Calculator Module
//!
//! A stateless evaluator for single arithmetic and transcendental operations,
//! exposed over REST under two routing conventions that share one `Service`.
//!
//! ## Architecture
//!
//! - `Service` contains the validation and arithmetic
//! - REST handlers are thin shims that translate DTOs and call `Service`
//! - In-process consumers use `CalculatorLocalClient` through the
//!   `calculator_sdk::CalculatorClientV1` trait

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

pub mod config;
pub use config::CalculatorConfig;

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{CalculatorLocalClient, Evaluation, Service, ServiceConfig};

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
