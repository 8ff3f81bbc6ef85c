//! Configuration for the calculator module.

use serde::{Deserialize, Serialize};

/// Calculator module configuration (`calculator` section of the app config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Accept `mode: "scientific"` requests. When off, every scientific
    /// operator is rejected as an invalid operation.
    pub enable_scientific: bool,

    /// Mount the pages-style `/api/calculator` route next to `/api/calculate`.
    pub enable_legacy_route: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            enable_scientific: true,
            enable_legacy_route: true,
        }
    }
}
