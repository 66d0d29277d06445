use super::{ImpactConfig, ImpactResult};
use crate::model::input::InputParameters;

/// impact of one lever as a fraction of current ridership. the magnitude of
/// the elasticity is used so that reductions in wait time and cost (negative
/// coefficients) increase ridership.
pub fn raw_impact(improvement_pct: i64, elasticity: f64) -> f64 {
    (improvement_pct as f64 / 100.0) * elasticity.abs()
}

/// projects ridership after the improvements described by `params`.
///
/// the five lever impacts are summed (no interaction terms), the sum is
/// damped above the configured knee, and the result is applied to current
/// ridership, truncating toward zero. no bounds checking happens here:
/// negative or out-of-range inputs extend the arithmetic as written, with
/// ridership values saturating at the `i64` limits.
/// `baseline_feeder_frequency` and `baseline_wait_minutes` are not read.
///
/// # Arguments
///
/// * `params` - a snapshot of the calculator inputs
/// * `config` - elasticities and diminishing returns constants
///
/// # Returns
///
/// per-factor (un-damped) and aggregate (damped) impacts
pub fn compute(params: &InputParameters, config: &ImpactConfig) -> ImpactResult {
    let e = &config.elasticities;
    let freq_impact = raw_impact(params.freq_improvement_pct, e.feeder_frequency);
    let wait_impact = raw_impact(params.wait_reduction_pct, e.last_mile_wait_time);
    let coverage_impact = raw_impact(params.coverage_improvement_pct, e.service_availability);
    let cost_impact = raw_impact(params.cost_reduction_pct, e.feeder_cost);
    let integration_impact = raw_impact(params.integration_improvement_pct, e.integration_quality);

    let raw_total = freq_impact + wait_impact + coverage_impact + cost_impact + integration_impact;
    let total_impact = config.apply_diminishing_returns(raw_total);
    if raw_total > config.knee {
        log::debug!(
            "diminishing returns applied: raw impact {raw_total} damped to {total_impact} (knee={}, damping={})",
            config.knee,
            config.damping
        );
    }

    let new_ridership = (params.current_ridership as f64 * (1.0 + total_impact)) as i64;
    ImpactResult {
        freq_impact: freq_impact * 100.0,
        wait_impact: wait_impact * 100.0,
        coverage_impact: coverage_impact * 100.0,
        cost_impact: cost_impact * 100.0,
        integration_impact: integration_impact * 100.0,
        total_percentage: total_impact * 100.0,
        new_ridership,
        absolute_increase: new_ridership.saturating_sub(params.current_ridership),
    }
}
