/*!
 * Interactive choice between a single document and split documents
 */

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use serde::Serialize;
use strum::{Display, EnumString};

/// How the snapshot is laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, ValueEnum, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One document, no line budget
    Single,
    /// Several documents, each near the line budget
    Split,
}

/// Literal the user types to pick split mode
pub const SPLIT_SELECTOR: &str = "2";

/// Ask which output mode to use.
///
/// Anything other than [`SPLIT_SELECTOR`], including end of input, means
/// single mode.
pub fn prompt_mode<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    max_lines: usize,
) -> io::Result<OutputMode> {
    writeln!(output, "\nHow should the snapshot be generated?")?;
    writeln!(output, "  1 → Single document (no line limit)")?;
    writeln!(
        output,
        "  2 → Split into multiple documents (max. {} lines each)",
        max_lines
    )?;
    write!(output, "\nChoose (1/2): ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(if answer.trim() == SPLIT_SELECTOR {
        OutputMode::Split
    } else {
        OutputMode::Single
    })
}
