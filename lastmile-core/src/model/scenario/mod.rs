mod scenario_config;
pub mod scenario_ops;
mod scenario_outcome;
mod scenario_preset;

pub use scenario_config::{ScenarioConfig, DEFAULT_PROXY_COEFFICIENT};
pub use scenario_ops::compare;
pub use scenario_outcome::ScenarioOutcome;
pub use scenario_preset::ScenarioPreset;
