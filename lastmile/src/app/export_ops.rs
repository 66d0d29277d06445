use super::{ImpactReport, LastMileAppError};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const BREAKDOWN_FILENAME: &str = "impact_breakdown.csv";
pub const SCENARIOS_FILENAME: &str = "scenario_comparison.csv";
pub const SUMMARY_FILENAME: &str = "impact_summary.json";

#[derive(Serialize)]
struct BreakdownCsvRow<'a> {
    factor: &'a str,
    impact_percent: f64,
}

#[derive(Serialize)]
struct ScenarioCsvRow<'a> {
    scenario: &'a str,
    ridership: i64,
    percent_increase: f64,
}

/// writes the chart series of a report for consumption by an external
/// plotting tool: the factor breakdown and scenario comparison as CSV, and the
/// full report as JSON.
///
/// # Arguments
/// * report - the report to write
/// * output_directory - directory to write into, created if missing
/// * overwrite - if false, fail when any output file already exists
///
/// # Result
/// the paths of the files written
pub fn write_report(
    report: &ImpactReport,
    output_directory: &Path,
    overwrite: bool,
) -> Result<Vec<PathBuf>, LastMileAppError> {
    std::fs::create_dir_all(output_directory).map_err(|e| LastMileAppError::WriteError {
        filepath: output_directory.to_string_lossy().to_string(),
        source: e,
    })?;
    let breakdown_path = output_path(output_directory, BREAKDOWN_FILENAME, overwrite)?;
    let scenarios_path = output_path(output_directory, SCENARIOS_FILENAME, overwrite)?;
    let summary_path = output_path(output_directory, SUMMARY_FILENAME, overwrite)?;

    let breakdown_rows = report.breakdown.iter().map(|row| BreakdownCsvRow {
        factor: &row.label,
        impact_percent: row.impact_percent,
    });
    write_csv(&breakdown_path, breakdown_rows)?;

    let scenario_rows = report.scenarios.iter().map(|s| ScenarioCsvRow {
        scenario: &s.name,
        ridership: s.ridership,
        percent_increase: s.percentage_increase,
    });
    write_csv(&scenarios_path, scenario_rows)?;

    let summary = serde_json::to_string_pretty(report)?;
    std::fs::write(&summary_path, summary).map_err(|e| LastMileAppError::WriteError {
        filepath: summary_path.to_string_lossy().to_string(),
        source: e,
    })?;

    Ok(vec![breakdown_path, scenarios_path, summary_path])
}

fn output_path(
    output_directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<PathBuf, LastMileAppError> {
    let path = output_directory.join(filename);
    if path.exists() && !overwrite {
        Err(LastMileAppError::OutputExists(
            path.to_string_lossy().to_string(),
        ))
    } else {
        Ok(path)
    }
}

fn write_csv<T: Serialize>(
    path: &Path,
    rows: impl Iterator<Item = T>,
) -> Result<(), LastMileAppError> {
    let filepath = path.to_string_lossy().to_string();
    let mut writer = csv::Writer::from_path(path).map_err(|e| LastMileAppError::CsvError {
        filepath: filepath.clone(),
        source: e,
    })?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| LastMileAppError::CsvError {
                filepath: filepath.clone(),
                source: e,
            })?;
    }
    writer
        .flush()
        .map_err(|e| LastMileAppError::WriteError { filepath, source: e })?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RunConfig;
    use lastmile_core::model::input::InputParameters;

    fn temp_output_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "lastmile-export-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn default_report() -> ImpactReport {
        ImpactReport::new(InputParameters::default(), &RunConfig::default())
    }

    #[test]
    fn test_write_report() {
        let dir = temp_output_dir("write");
        let written = write_report(&default_report(), &dir, false).expect("export should succeed");
        assert_eq!(written.len(), 3);

        let breakdown = std::fs::read_to_string(dir.join(BREAKDOWN_FILENAME))
            .expect("breakdown file should exist");
        let mut lines = breakdown.lines();
        assert_eq!(lines.next(), Some("factor,impact_percent"));
        assert_eq!(lines.next(), Some("Frequency Improvement,25.0"));
        assert_eq!(breakdown.lines().count(), 6);

        let scenarios = std::fs::read_to_string(dir.join(SCENARIOS_FILENAME))
            .expect("scenario file should exist");
        let lines: Vec<&str> = scenarios.lines().collect();
        assert_eq!(lines[0], "scenario,ridership,percent_increase");
        assert_eq!(lines[1], "Current,100000,0.0");
        assert_eq!(lines[2], "Basic,106000,6.0");
        assert_eq!(lines[4], "Comprehensive,124000,24.0");

        let summary: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.join(SUMMARY_FILENAME)).expect("summary should exist"),
        )
        .expect("summary should be JSON");
        assert_eq!(summary["result"]["absolute_increase"], 75_550);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_existing_output_requires_overwrite() {
        let dir = temp_output_dir("overwrite");
        let report = default_report();
        write_report(&report, &dir, false).expect("first export should succeed");
        let second = write_report(&report, &dir, false);
        assert!(matches!(second, Err(LastMileAppError::OutputExists(_))));
        write_report(&report, &dir, true).expect("overwrite export should succeed");
        let _ = std::fs::remove_dir_all(&dir);
    }
}
