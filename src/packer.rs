/*!
 * Packing content blocks into documents
 *
 * Packing runs in two phases. [`Packer::plan`] decides where documents
 * start and end using header line counts; [`Packer::pack`] then renders the
 * real headers, which need the final number of documents.
 */

use std::ops::Range;

use crate::header::HeaderRenderer;
use crate::prompt::OutputMode;
use crate::types::{ContentBlock, Document, PartNumber};
use crate::utils::count_newlines;

/// Splits blocks into documents under a line budget
#[derive(Debug, Clone, Copy)]
pub struct Packer {
    max_lines: usize,
}

impl Packer {
    /// Create a packer with the given per-document line budget
    pub fn new(max_lines: usize) -> Self {
        Self { max_lines }
    }

    /// Line budget per document
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Decide document boundaries as ranges of block indices.
    ///
    /// Blocks are added greedily. A document is closed before a block that
    /// would push it over budget, unless the document is still empty: a block
    /// larger than the budget is placed alone rather than split or dropped.
    pub fn plan(
        &self,
        blocks: &[ContentBlock],
        first_header_lines: usize,
        continuation_header_lines: usize,
    ) -> Vec<Range<usize>> {
        let mut parts = Vec::new();
        let mut start = 0;
        let mut current_lines = first_header_lines;

        for (idx, block) in blocks.iter().enumerate() {
            if idx > start && current_lines + block.lines > self.max_lines {
                parts.push(start..idx);
                start = idx;
                current_lines = continuation_header_lines;
            }
            current_lines += block.lines;
        }

        if start < blocks.len() {
            parts.push(start..blocks.len());
        }

        parts
    }

    /// Pack blocks into documents with rendered headers.
    ///
    /// Returns no documents when there are no blocks.
    pub fn pack<'a, H: HeaderRenderer>(
        &self,
        blocks: &'a [ContentBlock],
        mode: OutputMode,
        headers: &H,
    ) -> Vec<Document<'a>> {
        if blocks.is_empty() {
            return Vec::new();
        }

        let parts = match mode {
            OutputMode::Single => vec![0..blocks.len()],
            OutputMode::Split => {
                // Part labels never change a header's line count, so these
                // measurements match the headers rendered below.
                let first = count_newlines(&headers.first_header(None));
                let continuation =
                    count_newlines(&headers.continuation_header(PartNumber { index: 2, total: 2 }));
                self.plan(blocks, first, continuation)
            }
        };

        let total = parts.len();
        parts
            .into_iter()
            .enumerate()
            .map(|(i, range)| {
                let part = PartNumber {
                    index: i + 1,
                    total,
                };
                let header = if part.index == 1 {
                    headers.first_header((total > 1).then_some(part))
                } else {
                    headers.continuation_header(part)
                };
                Document {
                    part,
                    header,
                    blocks: &blocks[range],
                }
            })
            .collect()
    }
}
