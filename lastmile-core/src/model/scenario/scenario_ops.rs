use super::{ScenarioOutcome, ScenarioPreset};

/// projects ridership for each preset with a single-coefficient proxy,
/// independent of the five-factor elasticity model.
///
/// for a preset with uniform improvement `p` the percentage increase is
/// `p * proxy_coefficient` and ridership is
/// `current_ridership * (1 + p * proxy_coefficient / 100)`, truncated toward
/// zero. baseline presets echo `current_ridership` with a 0% increase. the
/// output keeps preset order.
pub fn compare(
    current_ridership: i64,
    presets: &[ScenarioPreset],
    proxy_coefficient: f64,
) -> Vec<ScenarioOutcome> {
    presets
        .iter()
        .map(|preset| {
            if preset.baseline {
                ScenarioOutcome {
                    name: preset.name.clone(),
                    ridership: current_ridership,
                    percentage_increase: 0.0,
                }
            } else {
                let pct = preset.uniform_improvement_pct;
                let growth = 1.0 + pct * (proxy_coefficient / 100.0);
                ScenarioOutcome {
                    name: preset.name.clone(),
                    ridership: (current_ridership as f64 * growth) as i64,
                    percentage_increase: pct * proxy_coefficient,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scenario::{ScenarioConfig, DEFAULT_PROXY_COEFFICIENT};

    #[test]
    fn test_default_presets() {
        let config = ScenarioConfig::default();
        let outcomes = compare(100_000, &config.presets, config.proxy_coefficient);
        let expected = vec![
            ("Current", 100_000, 0.0),
            ("Basic", 106_000, 6.0),
            ("Moderate", 114_000, 14.0),
            ("Comprehensive", 124_000, 24.0),
        ];
        assert_eq!(outcomes.len(), expected.len());
        for (outcome, (name, ridership, pct)) in outcomes.iter().zip(expected) {
            assert_eq!(outcome.name, name);
            assert_eq!(outcome.ridership, ridership);
            assert!((outcome.percentage_increase - pct).abs() < 1e-9);
        }
    }

    #[test]
    fn test_baseline_echoes_current_ridership() {
        // even a baseline preset with a non-zero level reports no change
        let presets = vec![ScenarioPreset {
            name: String::from("Current"),
            uniform_improvement_pct: 50.0,
            baseline: true,
        }];
        let outcomes = compare(54_321, &presets, DEFAULT_PROXY_COEFFICIENT);
        assert_eq!(outcomes[0].ridership, 54_321);
        assert_eq!(outcomes[0].percentage_increase, 0.0);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let presets = vec![
            ScenarioPreset::new("High", 60.0),
            ScenarioPreset::baseline("Current"),
            ScenarioPreset::new("Low", 15.0),
        ];
        let names: Vec<String> = compare(1_000, &presets, DEFAULT_PROXY_COEFFICIENT)
            .into_iter()
            .map(|o| o.name)
            .collect();
        assert_eq!(names, vec!["High", "Current", "Low"]);
    }

    #[test]
    fn test_alternative_proxy_coefficient() {
        let presets = vec![ScenarioPreset::new("Basic", 10.0)];
        let outcomes = compare(200_000, &presets, 1.0);
        assert_eq!(outcomes[0].ridership, 220_000);
        assert!((outcomes[0].percentage_increase - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_presets() {
        assert!(compare(100_000, &[], DEFAULT_PROXY_COEFFICIENT).is_empty());
    }
}
