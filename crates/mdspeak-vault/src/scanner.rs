//! Markdown file discovery by filesystem walking.
//!
//! The Scanner only identifies `.md` files and their vault-relative paths;
//! reading and converting them is the converter's job.

use std::fs;
use std::path::{Path, PathBuf};

/// Reference to a discovered Markdown file.
#[derive(Debug, Clone)]
pub(crate) struct MarkdownFile {
    /// Full path to the source file.
    pub path: PathBuf,
    /// Path relative to the scanned root, used to mirror the output tree.
    pub rel_path: PathBuf,
}

/// Discovers `.md` files by walking a directory tree.
///
/// Hidden entries are skipped, which keeps `.obsidian/` and `.trash/`
/// out of the conversion run.
pub(crate) struct Scanner {
    root: PathBuf,
}

impl Scanner {
    /// Create a new Scanner for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Scan the tree and return files sorted by relative path.
    ///
    /// Returns an empty Vec if the root doesn't exist.
    pub fn scan(&self) -> Vec<MarkdownFile> {
        let mut files = Vec::new();
        if self.root.exists() {
            scan_directory(&self.root, Path::new(""), &mut files);
        }
        files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        files
    }
}

/// Collect `.md` files under `dir_path`, recursing into subdirectories.
fn scan_directory(dir_path: &Path, rel_prefix: &Path, files: &mut Vec<MarkdownFile>) {
    let Ok(entries) = fs::read_dir(dir_path) else {
        return;
    };

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        let rel_path = rel_prefix.join(&name);

        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&path, &rel_path, files);
        } else if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("md")) {
            files.push(MarkdownFile { path, rel_path });
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_scan_finds_md_files() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("note.md"), "# Note").unwrap();
        fs::write(temp_dir.path().join("data.csv"), "a,b").unwrap();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].rel_path, Path::new("note.md"));
        assert!(files[0].path.ends_with("note.md"));
    }

    #[test]
    fn test_scan_recurses_with_relative_paths() {
        let temp_dir = create_test_dir();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.md"), "# Deep").unwrap();
        fs::write(temp_dir.path().join("top.md"), "# Top").unwrap();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan();

        let rels: Vec<_> = files.iter().map(|f| f.rel_path.clone()).collect();
        assert_eq!(rels, vec![PathBuf::from("a/b/deep.md"), PathBuf::from("top.md")]);
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let temp_dir = create_test_dir();
        let obsidian = temp_dir.path().join(".obsidian");
        fs::create_dir(&obsidian).unwrap();
        fs::write(obsidian.join("workspace.md"), "internal").unwrap();
        fs::write(temp_dir.path().join(".draft.md"), "hidden").unwrap();
        fs::write(temp_dir.path().join("visible.md"), "# Visible").unwrap();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].rel_path, Path::new("visible.md"));
    }

    #[test]
    fn test_scan_extension_case_insensitive() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("upper.MD"), "# Upper").unwrap();

        let files = Scanner::new(temp_dir.path().to_path_buf()).scan();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_scan_missing_root() {
        let files = Scanner::new(PathBuf::from("/nonexistent")).scan();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp_dir = create_test_dir();
        let files = Scanner::new(temp_dir.path().to_path_buf()).scan();
        assert!(files.is_empty());
    }
}
