//! Model configuration.
//!
//! Every section falls back to its [`Default`], so a configuration only
//! has to name what it overrides. The binary reads it from TOML:
//!
//! ```toml
//! [links]
//! default_base_load = 20.0
//!
//! [[links.entries]]
//! id = "L-NYC-01"
//! base_load = 45.0
//!
//! [financial]
//! capex_ratio = 0.6
//! ```

use crate::{financials::FinancialModel, link::LinkCatalog, traffic::TrafficModel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub links: LinkCatalog,
    pub traffic: TrafficModel,
    pub financial: FinancialModel,
}

impl ModelConfig {
    /// Check the parameters that would make the estimators divide by zero
    /// or produce non finite values.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("traffic.smoothing_span_us", self.traffic.smoothing_span_us),
            ("traffic.headroom_span_us", self.traffic.headroom_span_us),
            ("financial.baseline_efficiency", self.financial.baseline_efficiency),
            ("financial.max_efficiency", self.financial.max_efficiency),
            ("financial.reference_buffer_us", self.financial.reference_buffer_us),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        let finite = [
            ("links.default_base_load", self.links.default_base_load),
            ("traffic.noise_amplitude", self.traffic.noise_amplitude),
            ("traffic.base_headroom_gbps", self.traffic.base_headroom_gbps),
            (
                "traffic.utilization_headroom_gbps",
                self.traffic.utilization_headroom_gbps,
            ),
            (
                "financial.aggregate_traffic_gbps",
                self.financial.aggregate_traffic_gbps,
            ),
            ("financial.capex_ratio", self.financial.capex_ratio),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        for entry in &self.links.entries {
            if !entry.base_load.is_finite() {
                return Err(ConfigError::NotFinite {
                    name: "links.entries.base_load",
                    value: entry.base_load,
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(ModelConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_baseline_efficiency_rejected() {
        let mut config = ModelConfig::default();
        config.financial.baseline_efficiency = 0.0;

        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                name: "financial.baseline_efficiency",
                value: 0.0
            })
        );
    }

    #[test]
    fn nan_rejected() {
        let mut config = ModelConfig::default();
        config.traffic.noise_amplitude = f64::NAN;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "traffic.noise_amplitude",
                ..
            })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ModelConfig =
            serde_json::from_str(r#"{ "financial": { "capex_ratio": 0.5 } }"#).unwrap();

        assert_eq!(config.financial.capex_ratio, 0.5);
        assert_eq!(config.financial.aggregate_traffic_gbps, 450.0);
        assert_eq!(config.traffic, TrafficModel::default());
        assert_eq!(config.links, LinkCatalog::default());
    }

    #[test]
    fn error_display() {
        let err = ConfigError::NotPositive {
            name: "traffic.headroom_span_us",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "traffic.headroom_span_us must be a positive number, got -1"
        );
    }
}
