use lastmile_core::model::input::ParameterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LastMileAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("unsupported configuration file type: {0}")]
    UnsupportedFileType(String),
    #[error("invalid run parameters: {source}")]
    ParameterError {
        #[from]
        source: ParameterError,
    },
    #[error("output file '{0}' already exists, use --overwrite to replace it")]
    OutputExists(String),
    #[error("failure writing '{filepath}': {source}")]
    WriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure writing CSV '{filepath}': {source}")]
    CsvError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure encoding TOML: {source}")]
    TomlError {
        #[from]
        source: toml::ser::Error,
    },
}
