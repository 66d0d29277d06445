use serde::{Deserialize, Serialize};

/// projected ridership for one preset of the scenario comparison.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub ridership: i64,
    pub percentage_increase: f64,
}
