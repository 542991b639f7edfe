/*!
 * Directory scanning: collects the included files and their statistics
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, SnapshotError};
use crate::filter::PathFilter;
use crate::types::{FileEntry, Statistics};
use crate::utils::count_lines;

/// A direct child of a scanned directory
#[derive(Debug, Clone)]
pub struct Entry {
    /// Absolute path
    pub path: PathBuf,
    /// Path relative to the project root
    pub rel_path: PathBuf,
    /// Entry name
    pub name: String,
    /// Real directory (symlinked directories are not followed)
    pub is_dir: bool,
    /// Regular file, or a symlink to one
    pub is_file: bool,
}

/// Outcome of a scan
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Resolved project root
    pub root: PathBuf,
    /// Included files, sorted by relative path
    pub files: Vec<FileEntry>,
    /// Totals over `files`
    pub statistics: Statistics,
}

impl ScanResult {
    /// Name of the project root directory
    pub fn root_name(&self) -> String {
        self.root
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Inclusion rules
    filter: PathFilter,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        let filter = PathFilter::new(config.rules.clone());
        Self {
            config,
            filter,
            progress,
        }
    }

    /// Inclusion rules used by this scanner
    pub fn filter(&self) -> &PathFilter {
        &self.filter
    }

    /// Resolve the project root, failing if it cannot be listed
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let root = fs::canonicalize(&self.config.target_dir).map_err(|e| {
            SnapshotError::Scanner(format!(
                "cannot resolve {}: {}",
                self.config.target_dir.display(),
                e
            ))
        })?;

        fs::read_dir(&root).map_err(|e| {
            SnapshotError::Scanner(format!("cannot read {}: {}", root.display(), e))
        })?;

        Ok(root)
    }

    /// Scan the project root and collect every included file
    pub fn scan(&self) -> Result<ScanResult> {
        let root = self.resolve_root()?;
        let mut files = Vec::new();
        let mut statistics = Statistics::default();

        self.scan_directory(&root, &root, &mut files, &mut statistics);
        files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));

        // An empty scan is reported by the caller alone
        let level = if files.is_empty() {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        log::log!(
            level,
            "Found {} files ({} lines) under {}",
            statistics.total_files,
            statistics.total_lines,
            root.display()
        );

        Ok(ScanResult {
            root,
            files,
            statistics,
        })
    }

    /// Collect included files below `dir`; unreadable subtrees are skipped
    fn scan_directory(
        &self,
        root: &Path,
        dir: &Path,
        files: &mut Vec<FileEntry>,
        statistics: &mut Statistics,
    ) {
        let entries = match self.list_entries(root, dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Skipping directory {}: {}", dir.display(), e);
                return;
            }
        };

        for entry in entries {
            if entry.is_dir {
                if self.filter.should_descend(&entry.rel_path) {
                    self.scan_directory(root, &entry.path, files, statistics);
                }
            } else if entry.is_file && self.filter.should_include_file(&entry.rel_path) {
                let file = self.process_file(entry);
                statistics.record(&file);
                files.push(file);
            }
        }
    }

    /// Build the entry for one included file
    fn process_file(&self, entry: Entry) -> FileEntry {
        self.progress.inc(1);
        self.progress
            .set_message(format!("Current file: {}", entry.rel_path.display()));

        let lines = count_lines(&entry.path);
        FileEntry {
            kind: FileEntry::kind_of(&entry.rel_path),
            path: entry.path,
            rel_path: entry.rel_path,
            lines,
        }
    }

    /// List the direct children of `dir` that pass the path rules
    pub fn included_entries(&self, root: &Path, dir: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = self.list_entries(root, dir)?;
        entries.retain(|e| self.filter.should_include_path(&e.rel_path));
        Ok(entries)
    }

    /// List every direct child of `dir`
    fn list_entries(&self, root: &Path, dir: &Path) -> io::Result<Vec<Entry>> {
        // Surfaces permission problems on the directory itself; the walkers
        // below only report them per entry.
        fs::read_dir(dir)?;

        let mut entries = Vec::new();

        if self.config.respect_gitignore {
            let mut walker = WalkBuilder::new(dir);
            walker.max_depth(Some(1)).hidden(false).require_git(false);

            for result in walker.build() {
                match result {
                    Ok(e) if e.depth() == 0 => {}
                    Ok(e) => {
                        let is_dir = e.file_type().map_or(false, |ft| ft.is_dir());
                        entries.push(self.make_entry(root, e.path(), is_dir));
                    }
                    Err(e) => log::warn!("Failed to read entry: {}", e),
                }
            }
        } else {
            for result in WalkDir::new(dir).min_depth(1).max_depth(1) {
                match result {
                    Ok(e) => {
                        let is_dir = e.file_type().is_dir();
                        entries.push(self.make_entry(root, e.path(), is_dir));
                    }
                    Err(e) => log::warn!("Failed to read entry: {}", e),
                }
            }
        }

        Ok(entries)
    }

    fn make_entry(&self, root: &Path, path: &Path, is_dir: bool) -> Entry {
        let rel_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        Entry {
            name: path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
            is_file: !is_dir && path.is_file(),
            path: path.to_path_buf(),
            rel_path,
            is_dir,
        }
    }
}
