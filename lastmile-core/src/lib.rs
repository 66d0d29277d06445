//! domain model for estimating metro ridership growth from last-mile feeder
//! improvements: an elasticity-based impact calculator and a simplified
//! scenario comparison.
pub mod model;
pub mod util;
