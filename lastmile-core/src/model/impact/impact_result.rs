use super::Factor;
use serde::{Deserialize, Serialize};

/// output of the impact calculator.
///
/// the five per-factor percentages are the un-damped contributions, while
/// `total_percentage` has diminishing returns applied. when the knee is
/// exceeded the factor percentages sum to more than the headline total.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ImpactResult {
    pub freq_impact: f64,
    pub wait_impact: f64,
    pub coverage_impact: f64,
    pub cost_impact: f64,
    pub integration_impact: f64,
    pub total_percentage: f64,
    pub new_ridership: i64,
    pub absolute_increase: i64,
}

impl ImpactResult {
    pub fn factor_impact(&self, factor: Factor) -> f64 {
        match factor {
            Factor::FeederFrequency => self.freq_impact,
            Factor::LastMileWaitTime => self.wait_impact,
            Factor::ServiceAvailability => self.coverage_impact,
            Factor::FeederCost => self.cost_impact,
            Factor::IntegrationQuality => self.integration_impact,
        }
    }

    /// per-factor percentages in display order.
    pub fn breakdown(&self) -> Vec<(Factor, f64)> {
        Factor::ALL
            .into_iter()
            .map(|factor| (factor, self.factor_impact(factor)))
            .collect()
    }

    /// sum of the per-factor percentages, which is the aggregate impact
    /// before diminishing returns.
    pub fn undamped_percentage(&self) -> f64 {
        self.freq_impact
            + self.wait_impact
            + self.coverage_impact
            + self.cost_impact
            + self.integration_impact
    }

    /// ridership the projection started from. only exact while the
    /// projection stays inside the `i64` range.
    pub fn current_ridership(&self) -> i64 {
        self.new_ridership.saturating_sub(self.absolute_increase)
    }
}
