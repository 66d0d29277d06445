use super::ParameterError;

/// inclusive range accepted by the input layer for a single integer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterBounds {
    pub field: &'static str,
    pub min: i64,
    pub max: i64,
}

pub const CURRENT_RIDERSHIP: ParameterBounds =
    ParameterBounds::new("current_ridership", 0, i64::MAX);
pub const BASELINE_FEEDER_FREQUENCY: ParameterBounds =
    ParameterBounds::new("baseline_feeder_frequency", 1, 20);
pub const BASELINE_WAIT_MINUTES: ParameterBounds =
    ParameterBounds::new("baseline_wait_minutes", 2, 30);
pub const FREQ_IMPROVEMENT_PCT: ParameterBounds =
    ParameterBounds::new("freq_improvement_pct", 0, 200);
pub const WAIT_REDUCTION_PCT: ParameterBounds = ParameterBounds::new("wait_reduction_pct", 0, 80);
pub const COVERAGE_IMPROVEMENT_PCT: ParameterBounds =
    ParameterBounds::new("coverage_improvement_pct", 0, 100);
pub const COST_REDUCTION_PCT: ParameterBounds = ParameterBounds::new("cost_reduction_pct", 0, 50);
pub const INTEGRATION_IMPROVEMENT_PCT: ParameterBounds =
    ParameterBounds::new("integration_improvement_pct", 0, 100);

impl ParameterBounds {
    pub const fn new(field: &'static str, min: i64, max: i64) -> ParameterBounds {
        ParameterBounds { field, min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// slider behavior: snap the value onto the nearest end of the range.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    pub fn check(&self, value: i64) -> Result<i64, ParameterError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ParameterError::OutOfBounds {
                field: self.field.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}
