/*!
 * Path inclusion rules
 *
 * Decisions look only at the names in a path relative to the project root;
 * nothing here touches the file system.
 */

use std::path::Path;

use glob_match::glob_match;

use crate::config::FilterRules;

/// Marker that starts a hidden entry name
const HIDDEN_MARKER: char = '.';

/// Extension of generated snapshot documents
const SNAPSHOT_SUFFIX: &str = ".md";

/// Decides which entries take part in a snapshot
#[derive(Debug, Clone)]
pub struct PathFilter {
    rules: FilterRules,
}

impl PathFilter {
    /// Create a filter from explicit rules
    pub fn new(rules: FilterRules) -> Self {
        Self { rules }
    }

    /// Rules this filter applies
    pub fn rules(&self) -> &FilterRules {
        &self.rules
    }

    /// Whether an entry (file or directory) may appear at all
    pub fn should_include_path(&self, rel_path: &Path) -> bool {
        if self.in_ignored_dir(rel_path) {
            return false;
        }

        let name = match rel_path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return true,
        };

        if name.starts_with(HIDDEN_MARKER) && !contains(&self.rules.allowed_hidden, &name) {
            return false;
        }

        if contains(&self.rules.ignore_files, &name) {
            return false;
        }

        if self.is_snapshot_file(&name) {
            return false;
        }

        !self.matches_pattern(&name)
    }

    /// Whether the scanner walks into a directory.
    ///
    /// Hidden directories are walked: files below them are judged by their
    /// own names. Only ignored directory names and extra patterns prune.
    pub fn should_descend(&self, rel_path: &Path) -> bool {
        if self.in_ignored_dir(rel_path) {
            return false;
        }

        match rel_path.file_name() {
            Some(name) => !self.matches_pattern(&name.to_string_lossy()),
            None => true,
        }
    }

    /// Whether a file's content goes into the snapshot.
    ///
    /// Callers only pass regular files; directory paths are rejected by the
    /// walker before they get here.
    pub fn should_include_file(&self, rel_path: &Path) -> bool {
        if !self.should_include_path(rel_path) {
            return false;
        }

        let by_extension = rel_path
            .extension()
            .map(|ext| contains(&self.rules.include_extensions, &ext.to_string_lossy()))
            .unwrap_or(false);

        by_extension
            || rel_path
                .file_name()
                .map(|name| contains(&self.rules.include_files, &name.to_string_lossy()))
                .unwrap_or(false)
    }

    /// Whether a name looks like a document produced by an earlier run
    pub fn is_snapshot_file(&self, name: &str) -> bool {
        name.starts_with(&self.rules.output_base) && name.ends_with(SNAPSHOT_SUFFIX)
    }

    fn in_ignored_dir(&self, rel_path: &Path) -> bool {
        rel_path.components().any(|c| {
            let part = c.as_os_str().to_string_lossy();
            self.rules.ignore_dirs.iter().any(|d| *d == part)
        })
    }

    fn matches_pattern(&self, name: &str) -> bool {
        self.rules
            .ignore_patterns
            .iter()
            .any(|pattern| glob_match(pattern, name))
    }
}

fn contains(list: &[String], name: &str) -> bool {
    list.iter().any(|item| item == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> PathFilter {
        PathFilter::new(FilterRules::default())
    }

    #[test]
    fn test_ignored_dirs_at_any_depth() {
        let f = filter();
        assert!(!f.should_include_path(Path::new("node_modules")));
        assert!(!f.should_include_path(Path::new("node_modules/lib/index.js")));
        assert!(!f.should_include_path(Path::new("frontend/dist/app.js")));
        assert!(!f.should_include_path(Path::new("a/b/__pycache__/x.py")));
        assert!(f.should_include_path(Path::new("frontend/src/app.js")));
    }

    #[test]
    fn test_hidden_entries() {
        let f = filter();
        assert!(!f.should_include_path(Path::new(".env")));
        assert!(!f.should_include_path(Path::new("config/.secret.json")));
        assert!(f.should_include_path(Path::new(".gitignore")));
        assert!(f.should_include_path(Path::new("backend/.env.example")));
    }

    #[test]
    fn test_descend_into_hidden_but_not_ignored_dirs() {
        let mut rules = FilterRules::default();
        rules.ignore_patterns = vec!["fixtures".to_string()];
        let f = PathFilter::new(rules);

        assert!(f.should_descend(Path::new(".github")));
        assert!(f.should_descend(Path::new(".github/workflows")));
        assert!(f.should_descend(Path::new("src")));
        assert!(!f.should_descend(Path::new(".git")));
        assert!(!f.should_descend(Path::new("web/node_modules")));
        assert!(!f.should_descend(Path::new("tests/fixtures")));

        assert!(!f.should_include_path(Path::new(".github")));
        assert!(f.should_include_file(Path::new(".github/workflows/ci.yml")));
    }

    #[test]
    fn test_ignored_file_names() {
        let f = filter();
        assert!(!f.should_include_path(Path::new("package-lock.json")));
        assert!(!f.should_include_path(Path::new("web/yarn.lock")));
        assert!(f.should_include_path(Path::new("package.json")));
    }

    #[test]
    fn test_prior_snapshots_are_excluded() {
        let f = filter();
        assert!(!f.should_include_file(Path::new("PROJECT_SNAPSHOT.md")));
        assert!(!f.should_include_file(Path::new("PROJECT_SNAPSHOT_3.md")));
        assert!(!f.should_include_file(Path::new("docs/PROJECT_SNAPSHOT_old.md")));
        assert!(f.should_include_file(Path::new("PROJECT_SNAPSHOT.txt")));
        assert!(f.should_include_file(Path::new("README.md")));
    }

    #[test]
    fn test_include_by_extension_or_name() {
        let f = filter();
        assert!(f.should_include_file(Path::new("src/app.tsx")));
        assert!(f.should_include_file(Path::new("Dockerfile")));
        assert!(f.should_include_file(Path::new("deploy/Makefile")));
        assert!(f.should_include_file(Path::new(".env.example")));
        assert!(f.should_include_file(Path::new(".gitignore")));
        assert!(!f.should_include_file(Path::new("logo.png")));
        assert!(!f.should_include_file(Path::new("LICENSE")));
    }

    #[test]
    fn test_extra_glob_patterns() {
        let mut rules = FilterRules::default();
        rules.ignore_patterns = vec!["*.test.ts".to_string(), "fixtures".to_string()];
        let f = PathFilter::new(rules);

        assert!(!f.should_include_file(Path::new("src/app.test.ts")));
        assert!(!f.should_include_path(Path::new("fixtures")));
        assert!(f.should_include_file(Path::new("src/app.ts")));
    }

    #[test]
    fn test_custom_output_base() {
        let mut rules = FilterRules::default();
        rules.output_base = "DUMP".to_string();
        let f = PathFilter::new(rules);

        assert!(!f.should_include_file(Path::new("DUMP_2.md")));
        assert!(f.should_include_file(Path::new("PROJECT_SNAPSHOT.md")));
    }
}
