mod elasticity_reference;
mod elasticity_table;
mod factor;
pub mod impact_config;
pub mod impact_ops;
mod impact_result;

pub use elasticity_reference::ElasticityReference;
pub use elasticity_table::ElasticityTable;
pub use factor::Factor;
pub use impact_config::ImpactConfig;
pub use impact_ops::compute;
pub use impact_result::ImpactResult;
