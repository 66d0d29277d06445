use thiserror::Error;

/// precondition failures raised by the input layer. the impact calculator
/// itself never produces these; it trusts whatever parameters it is handed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field} = {value} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("invalid impact configuration: {0}")]
    InvalidConfiguration(String),
}
