/*!
 * projsnap - Generate Markdown snapshots of a project
 *
 * Scans a project directory, collects statistics over the matched files and
 * writes one or more Markdown documents holding a directory tree and the full
 * content of every file. In split mode documents stay near a line budget
 * without ever cutting a file's section in two.
 */

pub mod block;
pub mod config;
pub mod error;
pub mod filter;
pub mod header;
pub mod packer;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use block::{build_block, FileContent};
pub use config::{Config, FilterRules};
pub use error::{Result, SnapshotError};
pub use filter::PathFilter;
pub use header::{HeaderRenderer, MarkdownHeaders};
pub use packer::Packer;
pub use prompt::OutputMode;
pub use report::{ReportFormat, Reporter, SnapshotReport};
pub use scanner::{ScanResult, Scanner};
pub use types::{ContentBlock, Document, FileEntry, PartNumber, Statistics};
pub use writer::{MarkdownWriter, WrittenDocument};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
