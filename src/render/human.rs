//! Human-readable output.

use std::fmt::Write as _;

use colored::Colorize;

use super::mask_secret;
use crate::seed::{GroupOutcome, GroupStatus, SeedReport};
use crate::storage::ResolvedConfig;

fn status_badge(status: GroupStatus, no_color: bool) -> String {
    let label = format!("{:<7}", status.label());
    if no_color {
        return label;
    }
    match status {
        GroupStatus::Succeeded => label.green().to_string(),
        GroupStatus::Failed => label.red().bold().to_string(),
        GroupStatus::Skipped => label.yellow().to_string(),
    }
}

fn group_line(outcome: &GroupOutcome, no_color: bool) -> String {
    let mut line = format!(
        "  {} {:<20} {:>4} item(s) {:>6}ms",
        status_badge(outcome.status, no_color),
        outcome.group,
        outcome.items,
        outcome.duration_ms
    );
    if let Some(error) = &outcome.error {
        let detail = format!("\n          {error}");
        if no_color {
            line.push_str(&detail);
        } else {
            line.push_str(&detail.dimmed().to_string());
        }
    }
    line
}

/// Render a seeding report for human consumption.
#[must_use]
pub fn render_report(report: &SeedReport, no_color: bool) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Seeding {}", report.base_url);

    for outcome in &report.groups {
        let _ = writeln!(output, "{}", group_line(outcome, no_color));
    }

    let failed = report.failed_count();
    let summary = if failed == 0 {
        format!(
            "{} group(s) seeded, {} product(s) in {}ms",
            report.groups.len(),
            report.product_ids.len(),
            report.duration_ms
        )
    } else {
        format!(
            "{failed} of {} group(s) did not complete in {}ms",
            report.groups.len(),
            report.duration_ms
        )
    };

    let summary = match (no_color, failed) {
        (true, _) => summary,
        (false, 0) => summary.green().bold().to_string(),
        (false, _) => summary.red().bold().to_string(),
    };
    let _ = writeln!(output, "\n{summary}");
    output
}

/// Render the resolved configuration, with the password masked.
#[must_use]
pub fn render_config(config: &ResolvedConfig) -> String {
    let sources = &config.sources;
    let rows = [
        ("url", config.url.clone(), sources.url),
        ("username", config.credentials.username.clone(), sources.username),
        ("password", mask_secret(&config.credentials.password), sources.password),
        ("api_version", config.api_version.clone(), sources.api_version),
        ("timeout", format!("{}s", config.timeout.as_secs()), sources.timeout),
    ];

    let mut output = String::new();
    let _ = writeln!(output, "Config file: {}", config.config_path.display());
    for (key, value, source) in rows {
        let _ = writeln!(output, "  {key:<12} {value:<32} ({source})");
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeedError;
    use chrono::Utc;

    fn report() -> SeedReport {
        let error = SeedError::MissingReference {
            kind: "tag".to_string(),
            name: "Newest".to_string(),
        };
        SeedReport {
            base_url: "http://localhost:8889/".to_string(),
            started_at: Utc::now(),
            duration_ms: 120,
            groups: vec![
                GroupOutcome::succeeded("taxes", 3, Utc::now(), 20),
                GroupOutcome::failed("products", &error, Utc::now(), 0),
            ],
            product_ids: vec![],
        }
    }

    #[test]
    fn plain_report_has_no_ansi_codes() {
        let output = render_report(&report(), true);
        assert!(!output.contains('\x1b'));
        assert!(output.contains("taxes"));
        assert!(output.contains("failed"));
        assert!(output.contains("tag \"Newest\" referenced by a fixture was not created"));
        assert!(output.contains("1 of 2 group(s) did not complete"));
    }

    #[test]
    fn successful_report_summarizes_products() {
        let mut report = report();
        report.groups.truncate(1);
        report.product_ids = vec![10, 11];
        let output = render_report(&report, true);
        assert!(output.contains("1 group(s) seeded, 2 product(s)"));
    }
}
