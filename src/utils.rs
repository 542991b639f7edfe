/*!
 * Utility functions and default rule tables for projsnap
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

/// Count the lines of a text file.
///
/// Anything that cannot be read as UTF-8 text counts as zero lines; the file
/// still takes part in the snapshot.
pub fn count_lines(path: &Path) -> usize {
    match fs::read_to_string(path) {
        Ok(content) => normalize_newlines(&content).lines().count(),
        Err(e) => {
            log::debug!("Counting {} as 0 lines: {}", path.display(), e);
            0
        }
    }
}

/// Number of newline characters in rendered text
pub fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Turn CRLF and lone CR line breaks into LF
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Format a size in bytes as kilobytes with one decimal
pub fn format_kilobytes(size: u64) -> String {
    format!("{:.1} KB", size as f64 / 1024.0)
}

/// Format an integer with `,` thousands separators
pub fn format_thousands(num: usize) -> String {
    let digits = num.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Directory names that are never descended into
pub static DEFAULT_IGNORE_DIRS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        // Python
        "__pycache__",
        "venv",
        ".venv",
        "env",
        // Dependencies
        "node_modules",
        // Build & Dist
        "dist",
        "build",
        "dev-dist",
        "coverage",
        // IDEs & Editors
        ".idea",
        ".vscode",
    ]
});

/// Exact file names that are never included
pub static DEFAULT_IGNORE_FILES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "package-lock.json",
        "yarn.lock",
        "poetry.lock",
        "Pipfile.lock",
        "Cargo.lock",
    ]
});

/// Hidden names that are still allowed through the filter
pub static DEFAULT_ALLOWED_HIDDEN: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![".gitignore", ".env.example"]);

/// Extensions (without the leading dot) whose files are included
pub static DEFAULT_INCLUDE_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "py", "js", "ts", "jsx", "tsx", "html", "css", "scss", "sass", "json", "yaml", "yml",
        "toml", "ini", "conf", "md", "txt", "sh", "bash",
    ]
});

/// File names included even though their extension is not
pub static DEFAULT_INCLUDE_FILES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Dockerfile",
        "Makefile",
        "Procfile",
        ".env.example",
        ".gitignore",
        "requirements.txt",
        "package.json",
        "pyproject.toml",
    ]
});

/// Extension to fence language tag
pub static LANGUAGE_TAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("py", "python"),
        ("js", "javascript"),
        ("ts", "typescript"),
        ("jsx", "jsx"),
        ("tsx", "tsx"),
        ("html", "html"),
        ("css", "css"),
        ("scss", "scss"),
        ("json", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("md", "markdown"),
        ("sh", "bash"),
        ("bash", "bash"),
        ("toml", "toml"),
        ("ini", "ini"),
        ("txt", "text"),
    ])
});

/// Fence language for a path, empty when the extension is unknown
pub fn language_tag(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| LANGUAGE_TAGS.get(ext).copied())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_kilobytes(0), "0.0 KB");
        assert_eq!(format_kilobytes(1536), "1.5 KB");
    }

    #[test]
    fn test_language_tag() {
        assert_eq!(language_tag(Path::new("src/app.py")), "python");
        assert_eq!(language_tag(Path::new("config.yml")), "yaml");
        assert_eq!(language_tag(Path::new("Dockerfile")), "");
        assert_eq!(language_tag(Path::new("image.png")), "");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize_newlines("a\rb\rc"), "a\nb\nc");
        assert_eq!(normalize_newlines("a\r\n\rb"), "a\n\nb");
    }

    #[test]
    fn test_count_newlines() {
        assert_eq!(count_newlines(""), 0);
        assert_eq!(count_newlines("a\nb\n"), 2);
        assert_eq!(count_newlines("a\nb"), 1);
    }
}
