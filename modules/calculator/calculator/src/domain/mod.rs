pub mod local_client;
pub mod service;

pub use local_client::CalculatorLocalClient;
pub use service::{Evaluation, Service, ServiceConfig};
