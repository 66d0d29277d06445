use clap::Args;
use lastmile_core::model::input::InputParameters;
use serde::{Deserialize, Serialize};

/// command line overrides for the calculator inputs. any value left unset
/// keeps the value from the run configuration.
#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputArgs {
    /// current daily metro ridership
    #[arg(long)]
    pub current_ridership: Option<i64>,
    /// current feeder frequency in buses per hour [1, 20]. informational, not used by the model
    #[arg(long)]
    pub baseline_frequency: Option<i64>,
    /// current average last-mile wait in minutes [2, 30]. informational, not used by the model
    #[arg(long)]
    pub baseline_wait: Option<i64>,
    /// % increase in feeder frequency [0, 200]
    #[arg(long)]
    pub freq_improvement: Option<i64>,
    /// % reduction in wait time [0, 80]
    #[arg(long)]
    pub wait_reduction: Option<i64>,
    /// % increase in service coverage [0, 100]
    #[arg(long)]
    pub coverage_improvement: Option<i64>,
    /// % reduction in last-mile cost [0, 50]
    #[arg(long)]
    pub cost_reduction: Option<i64>,
    /// % improvement in integration quality (schedules, payment, wayfinding) [0, 100]
    #[arg(long)]
    pub integration_improvement: Option<i64>,
}

impl InputArgs {
    /// overlays the values set on the command line onto `base`.
    pub fn apply(&self, base: &InputParameters) -> InputParameters {
        InputParameters {
            current_ridership: self.current_ridership.unwrap_or(base.current_ridership),
            baseline_feeder_frequency: self
                .baseline_frequency
                .unwrap_or(base.baseline_feeder_frequency),
            baseline_wait_minutes: self.baseline_wait.unwrap_or(base.baseline_wait_minutes),
            freq_improvement_pct: self.freq_improvement.unwrap_or(base.freq_improvement_pct),
            wait_reduction_pct: self.wait_reduction.unwrap_or(base.wait_reduction_pct),
            coverage_improvement_pct: self
                .coverage_improvement
                .unwrap_or(base.coverage_improvement_pct),
            cost_reduction_pct: self.cost_reduction.unwrap_or(base.cost_reduction_pct),
            integration_improvement_pct: self
                .integration_improvement
                .unwrap_or(base.integration_improvement_pct),
        }
    }

    /// overlays these overrides onto `base` and snaps the result into the
    /// accepted ranges, logging a warning for every value that moved.
    pub fn resolve(&self, base: &InputParameters) -> InputParameters {
        let params = self.apply(base);
        for violation in params.violations() {
            log::warn!("{violation}, clamping into range");
        }
        params.clamped()
    }
}
