pub mod impact;
pub mod input;
pub mod scenario;
