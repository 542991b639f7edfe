/*!
 * Markdown writer for snapshot documents
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, SnapshotError};
use crate::types::Document;
use crate::utils::count_newlines;

/// What was written for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenDocument {
    /// Destination path
    pub path: PathBuf,
    /// Bytes written
    pub bytes: u64,
    /// Lines written
    pub lines: usize,
}

/// Writes documents into an output directory
pub struct MarkdownWriter {
    output_dir: PathBuf,
    output_base: String,
}

impl MarkdownWriter {
    /// Create a writer for `<output_dir>/<output_base>[_N].md`
    pub fn new(output_dir: impl Into<PathBuf>, output_base: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_base: output_base.into(),
        }
    }

    /// Destination of a document
    pub fn path_for(&self, document: &Document) -> PathBuf {
        self.output_dir.join(document.file_name(&self.output_base))
    }

    /// Write one document: header first, then every block in order
    pub fn write(&self, document: &Document) -> Result<WrittenDocument> {
        let path = self.path_for(document);
        let (bytes, lines) =
            write_document(&path, document).map_err(|source| SnapshotError::Writer {
                path: path.clone(),
                source,
            })?;

        log::debug!("Wrote {} ({} lines)", path.display(), lines);
        Ok(WrittenDocument { path, bytes, lines })
    }

    /// Write every document, stopping at the first failure
    pub fn write_all(&self, documents: &[Document]) -> Result<Vec<WrittenDocument>> {
        documents.iter().map(|doc| self.write(doc)).collect()
    }
}

fn write_document(path: &Path, document: &Document) -> std::io::Result<(u64, usize)> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut bytes = 0u64;
    let mut lines = 0usize;
    for text in std::iter::once(document.header.as_str())
        .chain(document.blocks.iter().map(|b| b.text.as_str()))
    {
        writer.write_all(text.as_bytes())?;
        bytes += text.len() as u64;
        lines += count_newlines(text);
    }

    writer.flush()?;
    Ok((bytes, lines))
}
