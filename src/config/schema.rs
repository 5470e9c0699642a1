//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the harness.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Request construction and fallback routing.
    pub harness: HarnessSettings,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Request construction settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HarnessSettings {
    /// Base URI relative request paths are resolved against.
    pub base_uri: String,

    /// Fallback route template matched by every dispatch.
    pub route_template: String,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            base_uri: "http://tempuri.org".to_string(),
            route_template: "/".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
