use super::RunConfig;
use itertools::Itertools;
use lastmile_core::model::{
    impact::{self, ElasticityReference, Factor, ImpactResult},
    input::InputParameters,
    scenario::ScenarioOutcome,
};
use lastmile_core::util::format_ops::{percent, signed_thousands, thousands};
use serde::Serialize;

/// one bar of the per-factor impact breakdown
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub factor: Factor,
    pub label: String,
    pub impact_percent: f64,
}

/// everything the presentation layer consumes for one input snapshot.
///
/// the scenario comparison is computed from `current_ridership` alone and
/// never from `result`, so its baseline row does not follow the live inputs.
#[derive(Serialize, Debug, Clone)]
pub struct ImpactReport {
    pub inputs: InputParameters,
    pub result: ImpactResult,
    pub breakdown: Vec<BreakdownRow>,
    pub elasticities: Vec<ElasticityReference>,
    pub scenarios: Vec<ScenarioOutcome>,
}

impl ImpactReport {
    pub fn new(inputs: InputParameters, conf: &RunConfig) -> ImpactReport {
        let result = impact::compute(&inputs, &conf.impact);
        let breakdown = result
            .breakdown()
            .into_iter()
            .map(|(factor, impact_percent)| BreakdownRow {
                factor,
                label: factor.breakdown_label().to_string(),
                impact_percent,
            })
            .collect_vec();
        ImpactReport {
            inputs,
            result,
            breakdown,
            elasticities: ElasticityReference::from_table(&conf.impact.elasticities),
            scenarios: conf.scenarios.compare(inputs.current_ridership),
        }
    }

    /// the headline metric and key outputs.
    pub fn summary_text(&self) -> String {
        let r = &self.result;
        [
            format!(
                "Predicted Ridership Increase: {} ({} passengers/day)",
                percent(r.total_percentage),
                signed_thousands(r.absolute_increase)
            ),
            String::new(),
            format!(
                "Current Ridership:       {}/day",
                thousands(self.inputs.current_ridership)
            ),
            format!("Predicted New Ridership: {}/day", thousands(r.new_ridership)),
            format!(
                "Total Increase:          {} passengers",
                signed_thousands(r.absolute_increase)
            ),
            format!("Percentage Gain:         {}", signed_percent(r.total_percentage)),
        ]
        .join("\n")
    }

    pub fn breakdown_text(&self) -> String {
        let rows = self
            .breakdown
            .iter()
            .map(|row| format!("  {:<24}{:>8}", row.label, percent(row.impact_percent)))
            .join("\n");
        format!("Impact Breakdown by Factor (before diminishing returns)\n{rows}")
    }

    pub fn to_text(&self) -> String {
        [
            self.summary_text(),
            self.breakdown_text(),
            elasticities_text(&self.elasticities),
            scenarios_text(&self.scenarios),
        ]
        .join("\n\n")
    }
}

fn signed_percent(value: f64) -> String {
    if value < 0.0 {
        percent(value)
    } else {
        format!("+{}", percent(value))
    }
}

/// the elasticity values in use with their literature sources.
pub fn elasticities_text(elasticities: &[ElasticityReference]) -> String {
    let rows = elasticities
        .iter()
        .map(|e| format!("  {:<12}{:>6}  {}", e.label, e.elasticity, e.citation))
        .join("\n");
    format!("Elasticity Values Used\n{rows}")
}

pub fn scenarios_text(scenarios: &[ScenarioOutcome]) -> String {
    let rows = scenarios
        .iter()
        .map(|s| {
            format!(
                "  {:<16}{:>14}{:>8}",
                s.name,
                thousands(s.ridership),
                percent(s.percentage_increase)
            )
        })
        .join("\n");
    format!(
        "Scenario Comparison\n  {:<16}{:>14}{:>8}\n{rows}",
        "Scenario", "Ridership", "Change"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_report() -> ImpactReport {
        ImpactReport::new(InputParameters::default(), &RunConfig::default())
    }

    #[test]
    fn test_summary_text() {
        let summary = default_report().summary_text();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(
            lines[0],
            "Predicted Ridership Increase: 75.6% (+75,550 passengers/day)"
        );
        assert!(summary.contains("Current Ridership:       100,000/day"));
        assert!(summary.contains("Predicted New Ridership: 175,550/day"));
        assert!(summary.contains("Total Increase:          +75,550 passengers"));
        assert!(summary.contains("Percentage Gain:         +75.6%"));
    }

    #[test]
    fn test_breakdown_rows_follow_factor_order() {
        let report = default_report();
        let labels = report.breakdown.iter().map(|r| r.label.as_str()).collect_vec();
        assert_eq!(
            labels,
            vec![
                "Frequency Improvement",
                "Wait Time Reduction",
                "Coverage Expansion",
                "Cost Reduction",
                "Integration Quality",
            ]
        );
        let text = report.breakdown_text();
        assert!(text.contains("Coverage Expansion"));
        assert!(text.contains("7.5%"));
    }

    #[test]
    fn test_scenarios_ignore_live_inputs() {
        let inputs = InputParameters {
            freq_improvement_pct: 0,
            wait_reduction_pct: 0,
            ..Default::default()
        };
        let report = ImpactReport::new(inputs, &RunConfig::default());
        let baseline = &report.scenarios[0];
        assert_eq!(baseline.name, "Current");
        assert_eq!(baseline.ridership, 100_000);
        assert_eq!(baseline.percentage_increase, 0.0);
        assert_ne!(report.result.new_ridership, baseline.ridership);
    }

    #[test]
    fn test_text_sections() {
        let text = default_report().to_text();
        assert!(text.contains("Elasticity Values Used"));
        assert!(text.contains("TCRP Report 95"));
        assert!(text.contains("-0.8"));
        assert!(text.contains("Scenario Comparison"));
        assert!(text.contains("124,000"));
        assert!(text.contains("24.0%"));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(default_report()).expect("report should encode");
        assert_eq!(json["result"]["new_ridership"], 175_550);
        assert_eq!(json["breakdown"][0]["factor"], "feeder_frequency");
        assert_eq!(json["scenarios"][1]["name"], "Basic");
        assert_eq!(json["elasticities"][3]["citation"], "Standard transit fare elasticity");
    }
}
