/*!
 * Document headers
 *
 * The first document carries statistics and the directory tree; later
 * documents in a split snapshot get a short continuation header.
 */

use chrono::Local;

use crate::scanner::ScanResult;
use crate::types::{PartNumber, Statistics};
use crate::utils::format_thousands;

/// Title shared by every document
const TITLE: &str = "Project Snapshot";

/// Heading that opens the file sections of the first document
const SECTION_INTRO: &str = "---\n\n## 📄 File Contents\n\n";

/// Renders the headers a document starts with
pub trait HeaderRenderer {
    /// Header of the first (or only) document, content-section intro
    /// included. `part` is `None` when the snapshot is a single document.
    fn first_header(&self, part: Option<PartNumber>) -> String;

    /// Header of every later document in a split snapshot
    fn continuation_header(&self, part: PartNumber) -> String;
}

/// Markdown headers for one snapshot run
#[derive(Debug, Clone)]
pub struct MarkdownHeaders {
    project_name: String,
    statistics: Statistics,
    tree: Vec<String>,
    generated_at: String,
}

impl MarkdownHeaders {
    /// Headers for a scan, stamped with the current local time
    pub fn new(scan: &ScanResult, tree: Vec<String>) -> Self {
        Self::with_timestamp(
            scan.root_name(),
            scan.statistics.clone(),
            tree,
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        )
    }

    /// Headers with an explicit timestamp
    pub fn with_timestamp(
        project_name: String,
        statistics: Statistics,
        tree: Vec<String>,
        generated_at: String,
    ) -> Self {
        Self {
            project_name,
            statistics,
            tree,
            generated_at,
        }
    }

    fn title(part: Option<PartNumber>) -> String {
        match part {
            Some(p) if p.total > 1 => format!("# {} (Part {}/{})\n\n", TITLE, p.index, p.total),
            _ => format!("# {}\n\n", TITLE),
        }
    }
}

impl HeaderRenderer for MarkdownHeaders {
    fn first_header(&self, part: Option<PartNumber>) -> String {
        let stats = &self.statistics;
        let mut out = Self::title(part);

        out.push_str(&format!("**Generated:** {}\n\n", self.generated_at));
        out.push_str(&format!("**Project:** `{}`\n\n", self.project_name));
        out.push_str("---\n\n");

        out.push_str("## 📊 Statistics\n\n");
        out.push_str(&format!("- **Total files:** {}\n", stats.total_files));
        out.push_str(&format!(
            "- **Total lines:** {}\n\n",
            format_thousands(stats.total_lines)
        ));
        out.push_str("### By file type\n\n");
        out.push_str("| Type | Files | Lines |\n");
        out.push_str("|------|-------|-------|\n");
        for (kind, row) in stats.by_lines_desc() {
            out.push_str(&format!(
                "| `{}` | {} | {} |\n",
                kind,
                row.files,
                format_thousands(row.lines)
            ));
        }
        out.push('\n');

        out.push_str("---\n\n");
        out.push_str("## 📁 Directory Structure\n\n");
        out.push_str("```\n");
        for line in &self.tree {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("```\n\n");

        out.push_str(SECTION_INTRO);
        out
    }

    fn continuation_header(&self, part: PartNumber) -> String {
        let mut out = Self::title(Some(part));
        out.push_str(&format!("**Generated:** {}\n\n", self.generated_at));
        out.push_str("---\n\n");
        out.push_str("## 📄 File Contents (continued)\n\n");
        out
    }
}
