use super::{
    export_ops, impact_report, ImpactReport, InputArgs, LastMileAppError, OutputFormat, RunConfig,
};
use clap::{Parser, Subcommand};
use lastmile_core::model::{impact::ElasticityReference, input::parameter_bounds};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// command line tool estimating metro ridership growth from last-mile
/// feeder service improvements
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct LastMileCliArguments {
    /// select the operation to run
    #[command(subcommand)]
    pub op: LastMileOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum LastMileOperation {
    /// estimate the ridership impact of a set of improvements, with the
    /// factor breakdown, elasticity reference and scenario comparison
    Calculate {
        /// TOML or JSON run configuration
        #[arg(long = "config")]
        config_file: Option<String>,
        #[command(flatten)]
        inputs: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// compare ridership under the uniform improvement presets
    Compare {
        /// TOML or JSON run configuration
        #[arg(long = "config")]
        config_file: Option<String>,
        /// current daily metro ridership
        #[arg(long)]
        current_ridership: Option<i64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// list the elasticity values in use and their sources
    Elasticities {
        /// TOML or JSON run configuration
        #[arg(long = "config")]
        config_file: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// write the breakdown and scenario series as CSV plus a JSON summary,
    /// for charting with an external tool
    Export {
        /// TOML or JSON run configuration
        #[arg(long = "config")]
        config_file: Option<String>,
        #[command(flatten)]
        inputs: InputArgs,
        /// output directory path.
        #[arg(short, long)]
        output_directory: String,
        /// replace existing output files
        #[arg(long)]
        overwrite: bool,
    },
    /// print the default run configuration as TOML
    Defaults,
}

impl LastMileOperation {
    pub fn run(&self) -> Result<(), LastMileAppError> {
        if let Some(output) = self.execute()? {
            println!("{output}");
        }
        Ok(())
    }

    /// runs the operation, returning the text to print, if any.
    pub fn execute(&self) -> Result<Option<String>, LastMileAppError> {
        match self {
            LastMileOperation::Calculate {
                config_file,
                inputs,
                format,
            } => {
                let conf = RunConfig::load(config_file.as_deref())?;
                let params = inputs.resolve(&conf.inputs);
                let report = ImpactReport::new(params, &conf);
                let output = match format {
                    OutputFormat::Text => report.to_text(),
                    OutputFormat::Json => serde_json::to_string_pretty(&report)?,
                };
                Ok(Some(output))
            }
            LastMileOperation::Compare {
                config_file,
                current_ridership,
                format,
            } => {
                let conf = RunConfig::load(config_file.as_deref())?;
                // the comparison only reads ridership, so only ridership is clamped
                let ridership = current_ridership.unwrap_or(conf.inputs.current_ridership);
                let bounds = parameter_bounds::CURRENT_RIDERSHIP;
                if let Err(violation) = bounds.check(ridership) {
                    log::warn!("{violation}, clamping into range");
                }
                let scenarios = conf.scenarios.compare(bounds.clamp(ridership));
                let output = match format {
                    OutputFormat::Text => impact_report::scenarios_text(&scenarios),
                    OutputFormat::Json => serde_json::to_string_pretty(&scenarios)?,
                };
                Ok(Some(output))
            }
            LastMileOperation::Elasticities {
                config_file,
                format,
            } => {
                let conf = RunConfig::load(config_file.as_deref())?;
                let elasticities = ElasticityReference::from_table(&conf.impact.elasticities);
                let output = match format {
                    OutputFormat::Text => impact_report::elasticities_text(&elasticities),
                    OutputFormat::Json => serde_json::to_string_pretty(&elasticities)?,
                };
                Ok(Some(output))
            }
            LastMileOperation::Export {
                config_file,
                inputs,
                output_directory,
                overwrite,
            } => {
                let conf = RunConfig::load(config_file.as_deref())?;
                let params = inputs.resolve(&conf.inputs);
                let report = ImpactReport::new(params, &conf);
                let written =
                    export_ops::write_report(&report, Path::new(output_directory), *overwrite)?;
                for path in written {
                    log::info!("wrote {}", path.display());
                }
                Ok(None)
            }
            LastMileOperation::Defaults => Ok(Some(RunConfig::default().to_toml()?)),
        }
    }
}
