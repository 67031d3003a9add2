//! Output formatters for conformance reports.
//!
//! Provides formatters that transform a [`ConformanceReport`] into the text
//! and JSON output formats of the CLI.

use anyhow::Result;
use colored::Colorize;

use crate::check::{CheckResult, ConformanceReport};

/// Format a report as human-readable text: a header, any scan warnings,
/// one line per evaluated check, and the verdict line.
pub fn format_text(report: &ConformanceReport, quiet: bool) -> String {
    let mut output = Vec::new();

    if !quiet {
        output.push(
            format!("Checking {}", report.candidate.display())
                .bold()
                .to_string(),
        );
        for warning in &report.warnings {
            output.push(format!("  {} {}", "⚠".yellow(), warning.dimmed()));
        }
        for check in &report.checks {
            output.push(format_check(check));
        }
    }

    output.push(if report.passed {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    });

    output.join("\n")
}

fn format_check(check: &CheckResult) -> String {
    let icon = if check.passed {
        "✓".green()
    } else {
        "✗".red()
    };
    match &check.details {
        Some(details) => format!("  {} {}", icon, details),
        None => format!("  {} {}", icon, check.name),
    }
}

/// Format a report as pretty-printed JSON.
pub fn format_json(report: &ConformanceReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check_candidate;
    use std::fs;
    use tempfile::TempDir;

    fn failing_report() -> ConformanceReport {
        let tmp = TempDir::new().unwrap();
        // Empty tree: fails on the first required package.
        let candidate = tmp.path().join("Main.java");
        fs::write(&candidate, "public class Main {}").unwrap();
        check_candidate(&candidate, tmp.path()).unwrap()
    }

    #[test]
    fn test_text_contains_failing_diagnostic_and_verdict() {
        let report = failing_report();
        let text = format_text(&report, false);

        assert!(text.contains("Package 'com.yaksha.utility' not found."));
        assert!(text.contains("FAIL"));
    }

    #[test]
    fn test_quiet_text_is_verdict_only() {
        let report = failing_report();
        let text = format_text(&report, true);

        assert!(!text.contains("Package"));
        assert!(text.contains("FAIL"));
    }

    #[test]
    fn test_json_round_trips_report_shape() {
        let report = failing_report();
        let json = format_json(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["passed"], false);
        assert!(!value["checks"].as_array().unwrap().is_empty());
        assert_eq!(value["checks"][0]["passed"], false);
    }
}
