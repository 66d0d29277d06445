mod input_parameters;
pub mod parameter_bounds;
mod parameter_error;

pub use input_parameters::InputParameters;
pub use parameter_bounds::ParameterBounds;
pub use parameter_error::ParameterError;
