//! Human-readable and JSON rendering of an estimate

use chrono::{DateTime, Utc};

use crate::estimate::{DependencyOutcome, EstimateReport, SkipReason, UpperBound};

/// Output format for the estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format an instant as `YYYY-MM-DD` (UTC)
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

fn format_bound(bound: UpperBound) -> String {
    bound
        .instant()
        .map_or_else(|| "unbounded".to_string(), format_date)
}

/// Render the report in the requested format
pub fn render(report: &EstimateReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

/// Render per-dependency lines followed by the estimated range
pub fn render_text(report: &EstimateReport) -> String {
    let mut lines = Vec::new();

    if report.dependencies.is_empty() {
        lines.push("No dependencies found".to_string());
    }

    for dependency in &report.dependencies {
        match &dependency.outcome {
            DependencyOutcome::Skipped {
                reason: SkipReason::LatestTag,
            } => lines.push(format!(
                "Skipping {} since it's using the latest version",
                dependency.name
            )),
            DependencyOutcome::NotFound { .. } => lines.push(format!(
                "No matching version found for {}",
                dependency.name
            )),
            DependencyOutcome::Matched(window) => {
                lines.push(format!("{} {}", window.package_name, window.version));
                lines.push(format!("  MIN {}", format_date(window.start)));
                if let (UpperBound::At(end), Some(next)) = (window.end, &window.next_version) {
                    lines.push(format!("  MAX {} ({})", format_date(end), next));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push("-".repeat(30));
    lines.push(String::new());
    lines.push("Estimated date range:".to_string());
    lines.push(String::new());
    lines.push(format!("> {}", format_date(report.estimate.earliest)));
    lines.push(format!("< {}", format_bound(report.estimate.latest)));

    lines.join("\n")
}
