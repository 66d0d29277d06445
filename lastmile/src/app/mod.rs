pub mod export_ops;
pub mod impact_report;
mod input_args;
mod lastmile_app_error;
mod lastmile_cli;
mod output_format;
mod run_config;

pub use impact_report::{BreakdownRow, ImpactReport};
pub use input_args::InputArgs;
pub use lastmile_app_error::LastMileAppError;
pub use lastmile_cli::{LastMileCliArguments, LastMileOperation};
pub use output_format::OutputFormat;
pub use run_config::RunConfig;
