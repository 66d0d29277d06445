use super::{scenario_ops, ScenarioOutcome, ScenarioPreset};
use serde::{Deserialize, Serialize};

/// percentage points of ridership growth per point of uniform improvement
pub const DEFAULT_PROXY_COEFFICIENT: f64 = 0.4;

/// presets and proxy coefficient for the scenario comparison.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub proxy_coefficient: f64,
    pub presets: Vec<ScenarioPreset>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            proxy_coefficient: DEFAULT_PROXY_COEFFICIENT,
            presets: vec![
                ScenarioPreset::baseline("Current"),
                ScenarioPreset::new("Basic", 15.0),
                ScenarioPreset::new("Moderate", 35.0),
                ScenarioPreset::new("Comprehensive", 60.0),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn compare(&self, current_ridership: i64) -> Vec<ScenarioOutcome> {
        scenario_ops::compare(current_ridership, &self.presets, self.proxy_coefficient)
    }
}
