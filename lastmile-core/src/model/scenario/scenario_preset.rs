use serde::{Deserialize, Serialize};

/// a named, uniform improvement level used by the scenario comparison.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioPreset {
    pub name: String,
    pub uniform_improvement_pct: f64,
    /// the baseline row reports current ridership unchanged
    #[serde(default)]
    pub baseline: bool,
}

impl ScenarioPreset {
    pub fn new(name: &str, uniform_improvement_pct: f64) -> ScenarioPreset {
        ScenarioPreset {
            name: name.to_string(),
            uniform_improvement_pct,
            baseline: false,
        }
    }

    pub fn baseline(name: &str) -> ScenarioPreset {
        ScenarioPreset {
            name: name.to_string(),
            uniform_improvement_pct: 0.0,
            baseline: true,
        }
    }
}
