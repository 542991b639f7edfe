/*!
 * Reporting functionality for projsnap
 *
 * Prints the completion summary: totals for the scan and the size of each
 * written document, as tables or as JSON.
 */

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::Result;
use crate::prompt::OutputMode;
use crate::utils::{format_kilobytes, format_thousands};
use crate::writer::WrittenDocument;

/// Summary of one snapshot run
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotReport {
    /// Project root
    pub root: PathBuf,
    /// Chosen output mode
    pub mode: OutputMode,
    /// Number of included files
    pub total_files: usize,
    /// Lines across included files
    pub total_lines: usize,
    /// Documents written, in order
    pub documents: Vec<WrittenDocument>,
    /// Time taken for scan and write
    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
}

fn serialize_duration<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Console tables
    #[value(name = "table")]
    ConsoleTable,
    /// A single JSON object
    Json,
}

/// Report generator for snapshot runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate the report text
    pub fn generate_report(&self, report: &SnapshotReport) -> Result<String> {
        match self.format {
            ReportFormat::ConsoleTable => Ok(self.generate_console_report(report)),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &SnapshotReport) -> Result<()> {
        println!("\n{}", self.generate_report(report)?);
        Ok(())
    }

    fn create_documents_table(&self, report: &SnapshotReport) -> String {
        #[derive(Tabled)]
        struct DocumentRow {
            #[tabled(rename = "Document")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        let rows: Vec<DocumentRow> = report
            .documents
            .iter()
            .map(|doc| DocumentRow {
                path: doc.path.display().to_string(),
                lines: format_thousands(doc.lines),
                size: format_kilobytes(doc.bytes),
            })
            .collect();

        styled(Table::new(rows))
    }

    fn create_summary_table(&self, report: &SnapshotReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Project",
                value: report.root.display().to_string(),
            },
            SummaryRow {
                key: "🧩 Mode",
                value: report.mode.to_string(),
            },
            SummaryRow {
                key: "📄 Files",
                value: format_thousands(report.total_files),
            },
            SummaryRow {
                key: "📝 Lines",
                value: format_thousands(report.total_lines),
            },
            SummaryRow {
                key: "💾 Documents",
                value: report.documents.len().to_string(),
            },
            SummaryRow {
                key: "⏱️ Process Time",
                value: format!("{:.4?}", report.duration),
            },
        ];

        styled(Table::new(rows))
    }

    fn generate_console_report(&self, report: &SnapshotReport) -> String {
        format!(
            "📋  DOCUMENTS\n{}\n\n✅  SNAPSHOT COMPLETE\n{}",
            self.create_documents_table(report),
            self.create_summary_table(report)
        )
    }
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));
    table.to_string()
}
