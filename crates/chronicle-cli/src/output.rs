//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chronicle_emit::{EmitReport, VerifyReport};
use chronicle_graph::GraphStats;
use colored::*;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a full analyze run.
    pub fn analyze_summary(
        &self,
        documents: usize,
        skipped: usize,
        stats: &GraphStats,
        report: &EmitReport,
        out_dir: &Path,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "documents": documents,
                "skipped": skipped,
                "relationship_entries": stats.total_relationships,
                "documents_with_relationships": stats.documents_with_any,
                "tracked_keywords": report.tracked_keywords,
                "artifacts_written": report.artifacts_written,
                "out_dir": out_dir,
            }))?),
            OutputFormat::Quiet => Ok(report.artifacts_written.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["Documents loaded", &documents.to_string()]);
                builder.push_record(["Records skipped", &skipped.to_string()]);
                builder.push_record([
                    "Relationship entries",
                    &stats.total_relationships.to_string(),
                ]);
                builder.push_record([
                    "Documents with relationships",
                    &format!(
                        "{} ({:.1}%)",
                        stats.documents_with_any, stats.pct_documents_with_any
                    ),
                ]);
                builder.push_record(["Tracked keywords", &report.tracked_keywords.to_string()]);
                builder.push_record(["Artifacts written", &report.artifacts_written.to_string()]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(format!(
                    "{}\n{}",
                    table,
                    self.success(&format!("Artifacts written to {}", out_dir.display()))
                ))
            }
        }
    }

    /// Format graph statistics on their own.
    pub fn stats_report(&self, stats: &GraphStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Quiet => Ok(stats.total_relationships.to_string()),
            OutputFormat::Table => Ok(stats.summary()),
        }
    }

    /// Format a verification report.
    pub fn verify_report(&self, report: &VerifyReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "artifacts_checked": report.artifacts_checked,
                "records_checked": report.records_checked,
                "entries_checked": report.entries_checked,
                "problems": report.problems,
            }))?),
            OutputFormat::Quiet => Ok(report.problems.len().to_string()),
            OutputFormat::Table => {
                if report.is_ok() {
                    Ok(self.success(&format!(
                        "Verification passed: {} artifacts, {} records, {} entries",
                        report.artifacts_checked, report.records_checked, report.entries_checked
                    )))
                } else {
                    let mut lines =
                        vec![self.error(&format!("{} problem(s) found:", report.problems.len()))];
                    for problem in &report.problems {
                        lines.push(format!("  {}", problem));
                    }
                    Ok(lines.join("\n"))
                }
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> GraphStats {
        GraphStats {
            total_documents: 10,
            total_relationships: 12,
            documents_with_any: 6,
            pct_documents_with_any: 60.0,
            ..GraphStats::default()
        }
    }

    #[test]
    fn test_analyze_summary_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = EmitReport {
            artifacts_written: 7,
            tracked_keywords: 3,
        };
        let output = formatter
            .analyze_summary(10, 1, &sample_stats(), &report, Path::new("artifacts"))
            .unwrap();
        assert!(output.contains("Documents loaded"));
        assert!(output.contains("artifacts"));
    }

    #[test]
    fn test_analyze_summary_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let report = EmitReport {
            artifacts_written: 7,
            tracked_keywords: 3,
        };
        let output = formatter
            .analyze_summary(10, 1, &sample_stats(), &report, Path::new("artifacts"))
            .unwrap();
        assert_eq!(output, "7");
    }

    #[test]
    fn test_stats_report_json_round_trips() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.stats_report(&sample_stats()).unwrap();
        let back: GraphStats = serde_json::from_str(&output).unwrap();
        assert_eq!(back, sample_stats());
    }

    #[test]
    fn test_verify_report_lists_problems() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let report = VerifyReport {
            artifacts_checked: 6,
            records_checked: 4,
            entries_checked: 8,
            problems: vec!["something is off".to_string()],
        };
        let output = formatter.verify_report(&report).unwrap();
        assert!(output.contains("1 problem(s)"));
        assert!(output.contains("something is off"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}
