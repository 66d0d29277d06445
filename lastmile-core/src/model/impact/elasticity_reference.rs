use super::{ElasticityTable, Factor};
use serde::Serialize;

/// one row of the static elasticity reference shown next to the results.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ElasticityReference {
    pub factor: Factor,
    pub label: String,
    pub elasticity: f64,
    pub citation: String,
}

impl ElasticityReference {
    /// reference rows for every factor in the table, in display order.
    pub fn from_table(table: &ElasticityTable) -> Vec<ElasticityReference> {
        table
            .iter()
            .map(|(factor, elasticity)| ElasticityReference {
                factor,
                label: factor.reference_label().to_string(),
                elasticity,
                citation: factor.citation().to_string(),
            })
            .collect()
    }
}
