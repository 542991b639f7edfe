/*!
 * Core types and data structures for projsnap
 */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A regular file that matched the inclusion rules at scan time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path
    pub path: PathBuf,
    /// Path relative to the project root
    pub rel_path: PathBuf,
    /// Statistics key: `.ext`, or `[name]` when the file has no extension
    pub kind: String,
    /// Number of lines, zero when the file could not be read as text
    pub lines: usize,
}

impl FileEntry {
    /// Statistics key for a file name
    pub fn kind_of(path: &Path) -> String {
        match path.extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy()),
            None => format!(
                "[{}]",
                path.file_name().unwrap_or_default().to_string_lossy()
            ),
        }
    }
}

/// Per-extension totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    /// Number of files
    pub files: usize,
    /// Number of lines
    pub lines: usize,
}

/// Aggregate statistics over every included file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of files
    pub total_files: usize,
    /// Number of lines
    pub total_lines: usize,
    /// Breakdown by extension or synthetic `[name]` key
    pub by_extension: BTreeMap<String, ExtensionStats>,
}

impl Statistics {
    /// Account for one more file
    pub fn record(&mut self, entry: &FileEntry) {
        self.total_files += 1;
        self.total_lines += entry.lines;

        let stats = self.by_extension.entry(entry.kind.clone()).or_default();
        stats.files += 1;
        stats.lines += entry.lines;
    }

    /// Extensions ordered by descending line count, ties by key
    pub fn by_lines_desc(&self) -> Vec<(&str, ExtensionStats)> {
        let mut rows: Vec<_> = self
            .by_extension
            .iter()
            .map(|(kind, stats)| (kind.as_str(), *stats))
            .collect();
        rows.sort_by(|a, b| b.1.lines.cmp(&a.1.lines).then_with(|| a.0.cmp(b.0)));
        rows
    }
}

/// The Markdown section for exactly one file.
///
/// Blocks are atomic: a document either holds the whole text or none of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    /// Path relative to the project root
    pub rel_path: PathBuf,
    /// Rendered section text
    pub text: String,
    /// Number of newlines in `text`
    pub lines: usize,
}

/// 1-based position of a document among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartNumber {
    /// Position of this document
    pub index: usize,
    /// Number of documents in the snapshot
    pub total: usize,
}

/// One output document: a header followed by whole blocks
#[derive(Debug, Clone)]
pub struct Document<'a> {
    /// Position among the produced documents
    pub part: PartNumber,
    /// Rendered header, including the content-section intro
    pub header: String,
    /// Blocks carried by this document, in snapshot order
    pub blocks: &'a [ContentBlock],
}

impl Document<'_> {
    /// File name for this document given the output base name
    pub fn file_name(&self, base: &str) -> String {
        if self.part.total == 1 {
            format!("{}.md", base)
        } else {
            format!("{}_{}.md", base, self.part.index)
        }
    }

    /// Lines taken by the header and all blocks
    pub fn line_count(&self) -> usize {
        crate::utils::count_newlines(&self.header)
            + self.blocks.iter().map(|b| b.lines).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rel: &str, lines: usize) -> FileEntry {
        FileEntry {
            path: PathBuf::from("/root").join(rel),
            rel_path: PathBuf::from(rel),
            kind: FileEntry::kind_of(Path::new(rel)),
            lines,
        }
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(FileEntry::kind_of(Path::new("src/main.py")), ".py");
        assert_eq!(FileEntry::kind_of(Path::new("Dockerfile")), "[Dockerfile]");
        assert_eq!(FileEntry::kind_of(Path::new(".gitignore")), "[.gitignore]");
        assert_eq!(FileEntry::kind_of(Path::new(".env.example")), ".example");
    }

    #[test]
    fn test_statistics_sums_match_totals() {
        let mut stats = Statistics::default();
        for e in [
            entry("a.py", 10),
            entry("b.py", 5),
            entry("c.md", 7),
            entry("Makefile", 0),
        ] {
            stats.record(&e);
        }

        assert_eq!(stats.total_files, 4);
        assert_eq!(stats.total_lines, 22);
        let files: usize = stats.by_extension.values().map(|s| s.files).sum();
        let lines: usize = stats.by_extension.values().map(|s| s.lines).sum();
        assert_eq!(files, stats.total_files);
        assert_eq!(lines, stats.total_lines);

        let order: Vec<_> = stats.by_lines_desc().iter().map(|(k, _)| *k).collect();
        assert_eq!(order, vec![".py", ".md", "[Makefile]"]);
    }

    #[test]
    fn test_document_file_name() {
        let blocks: Vec<ContentBlock> = Vec::new();
        let single = Document {
            part: PartNumber { index: 1, total: 1 },
            header: String::new(),
            blocks: &blocks,
        };
        assert_eq!(single.file_name("SNAP"), "SNAP.md");

        let second = Document {
            part: PartNumber { index: 2, total: 3 },
            ..single
        };
        assert_eq!(second.file_name("SNAP"), "SNAP_2.md");
    }
}
