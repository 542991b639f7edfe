/*!
 * Text rendering of the project's directory tree
 */

use std::path::Path;

use crate::scanner::Scanner;

/// Render the tree below `root` as lines, starting with `root_name/`.
///
/// Entries follow the scanner's path rules; directories come first, then
/// files, each group sorted by name. Unreadable directories render empty.
pub fn render_tree(scanner: &Scanner, root: &Path) -> Vec<String> {
    let root_name = root.file_name().unwrap_or_default().to_string_lossy();
    let mut lines = vec![format!("{}/", root_name)];
    render_level(scanner, root, root, "", &mut lines);
    lines
}

fn render_level(
    scanner: &Scanner,
    root: &Path,
    dir: &Path,
    prefix: &str,
    lines: &mut Vec<String>,
) {
    let mut entries = match scanner.included_entries(root, dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Leaving {} out of the tree: {}", dir.display(), e);
            return;
        }
    };
    entries.sort_by(|a, b| (!a.is_dir, &a.name).cmp(&(!b.is_dir, &b.name)));

    let count = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        let last = i + 1 == count;
        let connector = if last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, connector, entry.name));

        if entry.is_dir {
            let extension = if last { "    " } else { "│   " };
            render_level(
                scanner,
                root,
                &entry.path,
                &format!("{}{}", prefix, extension),
                lines,
            );
        }
    }
}
