/*!
 * Content blocks: one self-contained Markdown section per file
 */

use std::fs;
use std::path::Path;

use crate::types::{ContentBlock, FileEntry};
use crate::utils::{count_newlines, language_tag, normalize_newlines};

/// Placeholder used for files that are not valid UTF-8
pub const BINARY_PLACEHOLDER: &str = "[Binary file - not included]";

/// What reading a file produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded text
    Text(String),
    /// Bytes that are not UTF-8
    Binary,
    /// Any other read failure, with its message
    Unreadable(String),
}

impl FileContent {
    /// Read a file, turning every failure into a variant
    pub fn read(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Self::Text(text),
                Err(_) => Self::Binary,
            },
            Err(e) => Self::Unreadable(e.to_string()),
        }
    }

    /// Text placed inside the fence
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => normalize_newlines(&text),
            Self::Binary => BINARY_PLACEHOLDER.to_string(),
            Self::Unreadable(reason) => format!("[Error reading file: {}]", reason),
        }
    }
}

/// Build the block for one file. Never fails: read problems become
/// placeholder text inside a well-formed block.
pub fn build_block(entry: &FileEntry) -> ContentBlock {
    let content = FileContent::read(&entry.path);
    match &content {
        FileContent::Binary => log::debug!("{} is not UTF-8 text", entry.rel_path.display()),
        FileContent::Unreadable(reason) => {
            log::warn!("Failed to read {}: {}", entry.rel_path.display(), reason)
        }
        FileContent::Text(_) => {}
    }
    render_block(&entry.rel_path, content)
}

/// Render a block from already-read content
pub fn render_block(rel_path: &Path, content: FileContent) -> ContentBlock {
    let content = content.into_text();
    let lang = language_tag(rel_path);

    let mut text = String::with_capacity(content.len() + 64);
    text.push_str(&format!("### `{}`\n\n", display_path(rel_path)));
    text.push_str(&format!("```{}\n", lang));
    text.push_str(&content);
    if !content.ends_with('\n') {
        text.push('\n');
    }
    text.push_str("```\n\n");

    ContentBlock {
        rel_path: rel_path.to_path_buf(),
        lines: count_newlines(&text),
        text,
    }
}

/// Relative path with `/` separators on every platform
fn display_path(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_block_layout() {
        let block = render_block(
            Path::new("src/app.py"),
            FileContent::Text("print('hi')\n".to_string()),
        );
        assert_eq!(
            block.text,
            "### `src/app.py`\n\n```python\nprint('hi')\n```\n\n"
        );
        assert_eq!(block.lines, 6);
        assert_eq!(block.rel_path, PathBuf::from("src/app.py"));
    }

    #[test]
    fn test_missing_trailing_newline_is_added_once() {
        let block = render_block(Path::new("a.txt"), FileContent::Text("one\ntwo".to_string()));
        assert!(block.text.ends_with("one\ntwo\n```\n\n"));
        assert!(!block.text.contains("two\n\n```"));
    }

    #[test]
    fn test_existing_trailing_newline_is_kept() {
        let block = render_block(Path::new("a.txt"), FileContent::Text("one\n".to_string()));
        assert!(block.text.ends_with("```text\none\n```\n\n"));
    }

    #[test]
    fn test_empty_file() {
        let block = render_block(Path::new("empty.md"), FileContent::Text(String::new()));
        assert_eq!(block.text, "### `empty.md`\n\n```markdown\n\n```\n\n");
    }

    #[test]
    fn test_unknown_extension_gets_bare_fence() {
        let block = render_block(
            Path::new("Dockerfile"),
            FileContent::Text("FROM alpine\n".to_string()),
        );
        assert!(block.text.contains("\n```\nFROM alpine\n```\n"));
    }

    #[test]
    fn test_placeholders() {
        let binary = render_block(Path::new("x.json"), FileContent::Binary);
        assert!(binary
            .text
            .contains(&format!("```json\n{}\n```", BINARY_PLACEHOLDER)));

        let failed = render_block(
            Path::new("y.json"),
            FileContent::Unreadable("permission denied".to_string()),
        );
        assert!(failed
            .text
            .contains("[Error reading file: permission denied]\n```"));
    }

    #[test]
    fn test_crlf_is_normalised() {
        let block = render_block(Path::new("w.txt"), FileContent::Text("a\r\nb\r\n".to_string()));
        assert!(block.text.contains("```text\na\nb\n```"));

        let old_mac = render_block(Path::new("m.txt"), FileContent::Text("a\rb\r".to_string()));
        assert!(old_mac.text.contains("```text\na\nb\n```"));
        assert_eq!(old_mac.lines, 7);
    }
}
