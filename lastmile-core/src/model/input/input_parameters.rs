use super::parameter_bounds::{self as bounds, ParameterBounds};
use super::ParameterError;
use crate::model::impact::Factor;
use serde::{Deserialize, Serialize};

/// a snapshot of the calculator controls: the current baseline plus the
/// proposed improvement for each of the five last-mile levers.
///
/// the input layer is responsible for keeping these values inside their
/// [`ParameterBounds`], either by rejecting them ([`InputParameters::validate`])
/// or by snapping them into range ([`InputParameters::clamped`]). the
/// calculator does neither; out-of-range or negative values flow through the
/// arithmetic unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct InputParameters {
    /// riders per day on the metro today
    pub current_ridership: i64,
    /// buses per hour on feeder routes today. collected for parity with the
    /// planner's controls but not consumed by any formula.
    pub baseline_feeder_frequency: i64,
    /// average last-mile wait in minutes today. inert, like
    /// `baseline_feeder_frequency`.
    pub baseline_wait_minutes: i64,
    pub freq_improvement_pct: i64,
    pub wait_reduction_pct: i64,
    pub coverage_improvement_pct: i64,
    pub cost_reduction_pct: i64,
    pub integration_improvement_pct: i64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            current_ridership: 100_000,
            baseline_feeder_frequency: 4,
            baseline_wait_minutes: 12,
            freq_improvement_pct: 50,
            wait_reduction_pct: 30,
            coverage_improvement_pct: 25,
            cost_reduction_pct: 15,
            integration_improvement_pct: 40,
        }
    }
}

impl InputParameters {
    /// all improvement levers set to zero, keeping the given ridership and
    /// the default baseline service description.
    pub fn no_improvement(current_ridership: i64) -> InputParameters {
        InputParameters {
            current_ridership,
            freq_improvement_pct: 0,
            wait_reduction_pct: 0,
            coverage_improvement_pct: 0,
            cost_reduction_pct: 0,
            integration_improvement_pct: 0,
            ..Default::default()
        }
    }

    /// the improvement percentage that drives the given factor.
    pub fn improvement_pct(&self, factor: Factor) -> i64 {
        match factor {
            Factor::FeederFrequency => self.freq_improvement_pct,
            Factor::LastMileWaitTime => self.wait_reduction_pct,
            Factor::ServiceAvailability => self.coverage_improvement_pct,
            Factor::FeederCost => self.cost_reduction_pct,
            Factor::IntegrationQuality => self.integration_improvement_pct,
        }
    }

    /// each field paired with its bounds, in control order.
    pub fn fields(&self) -> [(ParameterBounds, i64); 8] {
        [
            (bounds::CURRENT_RIDERSHIP, self.current_ridership),
            (
                bounds::BASELINE_FEEDER_FREQUENCY,
                self.baseline_feeder_frequency,
            ),
            (bounds::BASELINE_WAIT_MINUTES, self.baseline_wait_minutes),
            (bounds::FREQ_IMPROVEMENT_PCT, self.freq_improvement_pct),
            (bounds::WAIT_REDUCTION_PCT, self.wait_reduction_pct),
            (bounds::COVERAGE_IMPROVEMENT_PCT, self.coverage_improvement_pct),
            (bounds::COST_REDUCTION_PCT, self.cost_reduction_pct),
            (
                bounds::INTEGRATION_IMPROVEMENT_PCT,
                self.integration_improvement_pct,
            ),
        ]
    }

    /// every field currently outside of its bounds.
    pub fn violations(&self) -> Vec<ParameterError> {
        self.fields()
            .into_iter()
            .filter_map(|(b, value)| b.check(value).err())
            .collect()
    }

    /// fails on the first field outside of its bounds.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (b, value) in self.fields() {
            b.check(value)?;
        }
        Ok(())
    }

    /// copy of these parameters with every field snapped into range, the way
    /// the planner's sliders would hold them.
    pub fn clamped(&self) -> InputParameters {
        InputParameters {
            current_ridership: bounds::CURRENT_RIDERSHIP.clamp(self.current_ridership),
            baseline_feeder_frequency: bounds::BASELINE_FEEDER_FREQUENCY
                .clamp(self.baseline_feeder_frequency),
            baseline_wait_minutes: bounds::BASELINE_WAIT_MINUTES.clamp(self.baseline_wait_minutes),
            freq_improvement_pct: bounds::FREQ_IMPROVEMENT_PCT.clamp(self.freq_improvement_pct),
            wait_reduction_pct: bounds::WAIT_REDUCTION_PCT.clamp(self.wait_reduction_pct),
            coverage_improvement_pct: bounds::COVERAGE_IMPROVEMENT_PCT
                .clamp(self.coverage_improvement_pct),
            cost_reduction_pct: bounds::COST_REDUCTION_PCT.clamp(self.cost_reduction_pct),
            integration_improvement_pct: bounds::INTEGRATION_IMPROVEMENT_PCT
                .clamp(self.integration_improvement_pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = InputParameters::default();
        assert!(params.validate().is_ok());
        assert!(params.violations().is_empty());
        assert_eq!(params.clamped(), params);
    }

    #[test]
    fn test_validate_rejects_first_out_of_range_field() {
        let params = InputParameters {
            freq_improvement_pct: 250,
            integration_improvement_pct: -5,
            ..Default::default()
        };
        let err = params.validate().expect_err("frequency is above 200%");
        match err {
            ParameterError::OutOfBounds { field, value, .. } => {
                assert_eq!(field, "freq_improvement_pct");
                assert_eq!(value, 250);
            }
            other => panic!("unexpected error {other}"),
        }
        assert_eq!(params.violations().len(), 2);
    }

    #[test]
    fn test_clamped_snaps_every_field() {
        let params = InputParameters {
            current_ridership: -10,
            baseline_feeder_frequency: 45,
            baseline_wait_minutes: 1,
            freq_improvement_pct: 201,
            wait_reduction_pct: 81,
            coverage_improvement_pct: 101,
            cost_reduction_pct: 51,
            integration_improvement_pct: -1,
        };
        let clamped = params.clamped();
        assert_eq!(
            clamped,
            InputParameters {
                current_ridership: 0,
                baseline_feeder_frequency: 20,
                baseline_wait_minutes: 2,
                freq_improvement_pct: 200,
                wait_reduction_pct: 80,
                coverage_improvement_pct: 100,
                cost_reduction_pct: 50,
                integration_improvement_pct: 0,
            }
        );
        assert!(clamped.validate().is_ok());
    }

    #[test]
    fn test_improvement_pct_follows_factor() {
        let params = InputParameters::default();
        assert_eq!(params.improvement_pct(Factor::FeederFrequency), 50);
        assert_eq!(params.improvement_pct(Factor::LastMileWaitTime), 30);
        assert_eq!(params.improvement_pct(Factor::ServiceAvailability), 25);
        assert_eq!(params.improvement_pct(Factor::FeederCost), 15);
        assert_eq!(params.improvement_pct(Factor::IntegrationQuality), 40);
    }
}
