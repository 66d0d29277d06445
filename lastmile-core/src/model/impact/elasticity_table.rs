use super::Factor;
use serde::{Deserialize, Serialize};

/// signed ridership elasticity per last-mile factor.
///
/// wait time and cost carry negative coefficients (ridership falls as they
/// grow). the calculator only uses the magnitude, since its inputs are
/// expressed as reductions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ElasticityTable {
    pub feeder_frequency: f64,
    pub last_mile_wait_time: f64,
    pub service_availability: f64,
    pub feeder_cost: f64,
    pub integration_quality: f64,
}

impl Default for ElasticityTable {
    fn default() -> Self {
        Self {
            feeder_frequency: 0.5,
            last_mile_wait_time: -0.8,
            service_availability: 0.3,
            feeder_cost: -0.4,
            integration_quality: 0.6,
        }
    }
}

impl ElasticityTable {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::FeederFrequency => self.feeder_frequency,
            Factor::LastMileWaitTime => self.last_mile_wait_time,
            Factor::ServiceAvailability => self.service_availability,
            Factor::FeederCost => self.feeder_cost,
            Factor::IntegrationQuality => self.integration_quality,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(|factor| (factor, self.get(factor)))
    }
}
