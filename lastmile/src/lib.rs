//! command line apps for the last-mile ridership impact calculator.
pub mod app;
