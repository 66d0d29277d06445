use super::ElasticityTable;
use crate::model::input::ParameterError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_KNEE: f64 = 0.5;
pub const DEFAULT_DAMPING: f64 = 0.7;

/// coefficients consumed by the impact calculator.
///
/// # Example
///
/// the (serialized) default configuration:
///
/// ```toml
/// knee = 0.5
/// damping = 0.7
///
/// [elasticities]
/// feeder_frequency = 0.5
/// last_mile_wait_time = -0.8
/// service_availability = 0.3
/// feeder_cost = -0.4
/// integration_quality = 0.6
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ImpactConfig {
    /// aggregate impact (as a fraction) above which diminishing returns apply
    pub knee: f64,
    /// share of the aggregate impact above the knee that is kept
    pub damping: f64,
    pub elasticities: ElasticityTable,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            knee: DEFAULT_KNEE,
            damping: DEFAULT_DAMPING,
            elasticities: ElasticityTable::default(),
        }
    }
}

impl ImpactConfig {
    /// single-knee piecewise-linear dampening of the aggregate impact.
    /// linear up to and including the knee.
    pub fn apply_diminishing_returns(&self, total_impact: f64) -> f64 {
        if total_impact > self.knee {
            self.knee + (total_impact - self.knee) * self.damping
        } else {
            total_impact
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.knee.is_finite() {
            return Err(ParameterError::InvalidConfiguration(format!(
                "knee must be finite, found {}",
                self.knee
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(ParameterError::InvalidConfiguration(format!(
                "damping must be in [0, 1], found {}",
                self.damping
            )));
        }
        for (factor, elasticity) in self.elasticities.iter() {
            if !elasticity.is_finite() {
                return Err(ParameterError::InvalidConfiguration(format!(
                    "elasticity for {factor} must be finite, found {elasticity}"
                )));
            }
        }
        Ok(())
    }
}
