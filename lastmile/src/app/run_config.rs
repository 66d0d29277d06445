use super::LastMileAppError;
use config::{Config, FileFormat};
use lastmile_core::model::{impact::ImpactConfig, input::InputParameters, scenario::ScenarioConfig};
use serde::{Deserialize, Serialize};

/// everything a run needs besides command line overrides. each section is
/// optional in a configuration file and falls back to its defaults.
///
/// # Example
///
/// ```toml
/// [inputs]
/// current_ridership = 250000
/// wait_reduction_pct = 45
///
/// [impact]
/// damping = 0.6
///
/// [scenarios]
/// proxy_coefficient = 0.4
///
/// [[scenarios.presets]]
/// name = "Current"
/// uniform_improvement_pct = 0
/// baseline = true
///
/// [[scenarios.presets]]
/// name = "Pilot"
/// uniform_improvement_pct = 10
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub inputs: InputParameters,
    pub impact: ImpactConfig,
    pub scenarios: ScenarioConfig,
}

impl RunConfig {
    /// reads a TOML or JSON run configuration file.
    pub fn from_file(filepath: &str) -> Result<RunConfig, LastMileAppError> {
        let format = if filepath.ends_with(".toml") {
            FileFormat::Toml
        } else if filepath.ends_with(".json") {
            FileFormat::Json
        } else {
            return Err(LastMileAppError::UnsupportedFileType(filepath.to_string()));
        };
        let config = Config::builder()
            .add_source(config::File::new(filepath, format).required(true))
            .build()
            .map_err(|e| LastMileAppError::ConfigReadError {
                msg: format!("failed reading '{filepath}'"),
                source: e,
            })?;
        let run_config = config.try_deserialize::<RunConfig>().map_err(|e| {
            LastMileAppError::ConfigReadError {
                msg: format!("failed decoding '{filepath}'"),
                source: e,
            }
        })?;
        run_config.impact.validate()?;
        Ok(run_config)
    }

    /// the configuration file if one was provided, otherwise the defaults.
    pub fn load(config_file: Option<&str>) -> Result<RunConfig, LastMileAppError> {
        match config_file {
            None => Ok(RunConfig::default()),
            Some(f) => {
                log::info!("reading lastmile configuration from {f}");
                RunConfig::from_file(f)
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, LastMileAppError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
