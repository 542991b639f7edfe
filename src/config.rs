/*!
 * Configuration handling for projsnap
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::prompt::OutputMode;
use crate::report::ReportFormat;
use crate::utils::{
    DEFAULT_ALLOWED_HIDDEN, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_FILES, DEFAULT_INCLUDE_EXTENSIONS,
    DEFAULT_INCLUDE_FILES,
};
use crate::{bail, ensure};

/// Default base name of the generated documents
pub const DEFAULT_OUTPUT_BASE: &str = "PROJECT_SNAPSHOT";

/// Default line budget per document in split mode
pub const DEFAULT_MAX_LINES: usize = 3000;

/// Command-line arguments for projsnap
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "projsnap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate Markdown snapshots of a project's files",
    long_about = "Scans a project directory and writes one or more Markdown documents holding file statistics, the directory tree and the full content of every matched file."
)]
pub struct Args {
    /// Project directory to snapshot
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Base name of the output documents (without .md)
    #[clap(default_value = DEFAULT_OUTPUT_BASE)]
    pub output_base: String,

    /// Directory the documents are written to
    #[clap(long, default_value = ".")]
    pub output_dir: String,

    /// Maximum number of lines per document in split mode
    #[clap(long, default_value_t = DEFAULT_MAX_LINES)]
    pub max_lines: usize,

    /// Output mode; asks interactively when omitted
    #[clap(long, value_enum)]
    pub mode: Option<OutputMode>,

    /// Comma-separated list of extra name patterns to ignore
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Also honour .gitignore files found in the project
    #[clap(long)]
    pub respect_gitignore: bool,

    /// Format of the completion summary
    #[clap(long, value_enum, default_value_t = ReportFormat::ConsoleTable)]
    pub report: ReportFormat,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,

    /// Show debug logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[clap(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Name and extension rules deciding which entries take part in a snapshot
#[derive(Clone, Debug)]
pub struct FilterRules {
    /// Directory names excluded at any depth
    pub ignore_dirs: Vec<String>,
    /// Exact file names excluded everywhere
    pub ignore_files: Vec<String>,
    /// Hidden names that are not excluded
    pub allowed_hidden: Vec<String>,
    /// Extensions (no leading dot) whose files are included
    pub include_extensions: Vec<String>,
    /// File names included regardless of extension
    pub include_files: Vec<String>,
    /// Extra glob patterns matched against entry names
    pub ignore_patterns: Vec<String>,
    /// Base name of generated documents, so prior snapshots are skipped
    pub output_base: String,
}

impl Default for FilterRules {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            ignore_dirs: owned(&DEFAULT_IGNORE_DIRS),
            ignore_files: owned(&DEFAULT_IGNORE_FILES),
            allowed_hidden: owned(&DEFAULT_ALLOWED_HIDDEN),
            include_extensions: owned(&DEFAULT_INCLUDE_EXTENSIONS),
            include_files: owned(&DEFAULT_INCLUDE_FILES),
            ignore_patterns: Vec::new(),
            output_base: DEFAULT_OUTPUT_BASE.to_string(),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Project root to scan
    pub target_dir: PathBuf,

    /// Directory receiving the documents
    pub output_dir: PathBuf,

    /// Maximum lines per document in split mode
    pub max_lines: usize,

    /// Output mode, `None` means ask the user
    pub mode: Option<OutputMode>,

    /// Whether to honour .gitignore files
    pub respect_gitignore: bool,

    /// Summary format
    pub report_format: ReportFormat,

    /// Inclusion rules
    pub rules: FilterRules,
}

impl Config {
    /// Configuration with default rules for the given project root
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            output_dir: PathBuf::from("."),
            max_lines: DEFAULT_MAX_LINES,
            mode: None,
            respect_gitignore: false,
            report_format: ReportFormat::ConsoleTable,
            rules: FilterRules::default(),
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut config = Self::new(args.directory_path);
        config.output_dir = PathBuf::from(args.output_dir);
        config.max_lines = args.max_lines;
        config.mode = args.mode;
        config.respect_gitignore = args.respect_gitignore;
        config.report_format = args.report;
        config.rules.ignore_patterns = args.ignore_patterns;
        config.rules.output_base = args.output_base;
        config
    }

    /// Base name of the generated documents
    pub fn output_base(&self) -> &str {
        &self.rules.output_base
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.is_dir() {
            bail!(
                Config,
                "Target directory not found: {}",
                self.target_dir.display()
            );
        }

        if self.output_dir != Path::new("") && !self.output_dir.is_dir() {
            bail!(
                Config,
                "Output directory not found: {}",
                self.output_dir.display()
            );
        }

        ensure!(
            self.max_lines > 0,
            InvalidArgument,
            "--max-lines must be greater than zero"
        );

        let base = self.output_base();
        ensure!(
            !base.is_empty() && !base.contains(['/', '\\']),
            InvalidArgument,
            "output base must be a plain file name, got '{}'",
            base
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_args_maps_fields() {
        let args = Args::parse_from([
            "projsnap",
            "proj",
            "SNAP",
            "--max-lines",
            "500",
            "--mode",
            "split",
            "--ignore-patterns",
            "*.log,tmp*",
        ]);
        let config = Config::from_args(args);

        assert_eq!(config.target_dir, PathBuf::from("proj"));
        assert_eq!(config.output_base(), "SNAP");
        assert_eq!(config.max_lines, 500);
        assert_eq!(config.mode, Some(OutputMode::Split));
        assert_eq!(config.rules.ignore_patterns, vec!["*.log", "tmp*"]);
        assert!(!config.respect_gitignore);
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(Args::parse_from(["projsnap"]));
        assert_eq!(config.output_base(), DEFAULT_OUTPUT_BASE);
        assert_eq!(config.max_lines, DEFAULT_MAX_LINES);
        assert_eq!(config.mode, None);
        assert!(config.rules.ignore_dirs.iter().any(|d| d == "node_modules"));
    }

    #[test]
    fn test_validate() {
        let dir = tempdir().unwrap();
        let mut config = Config::new(dir.path());
        config.output_dir = dir.path().to_path_buf();
        assert!(config.validate().is_ok());

        config.max_lines = 0;
        assert!(config.validate().is_err());
        config.max_lines = 10;

        config.rules.output_base = "nested/SNAP".to_string();
        assert!(config.validate().is_err());
        config.rules.output_base = "SNAP".to_string();

        config.target_dir = dir.path().join("missing");
        assert!(matches!(
            config.validate(),
            Err(crate::error::SnapshotError::Config(_))
        ));
    }
}
