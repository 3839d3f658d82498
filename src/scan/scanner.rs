use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::config::ScanSettings;
use crate::models::FileMeta;
use crate::scan::pattern::classify_name;

/// Discovers streamer data files under a path and classifies them by name.
///
/// Stateless apart from walk settings; scanning never writes and never
/// fails. Entries that cannot be read or stat'ed are skipped.
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    follow_links: bool,
    max_depth: Option<usize>,
}

impl FileScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner honoring the `[scan]` settings.
    #[must_use]
    pub fn with_settings(settings: &ScanSettings) -> Self {
        Self {
            follow_links: settings.follow_links,
            max_depth: settings.max_depth,
        }
    }

    /// Scan a single file or a directory tree.
    ///
    /// Returns records sorted by file name (ties by path). A missing path
    /// yields an empty list.
    pub fn scan(&self, target: impl AsRef<Path>) -> Vec<FileMeta> {
        let target = target.as_ref();
        let target = std::path::absolute(target).unwrap_or_else(|_| target.to_path_buf());

        let candidates: Vec<PathBuf> = if target.is_file() {
            vec![target]
        } else if target.is_dir() {
            self.walk(&target)
        } else {
            tracing::debug!(path = %target.display(), "scan target does not exist");
            return Vec::new();
        };

        let mut results: Vec<FileMeta> = candidates
            .par_iter()
            .filter_map(|path| parse_file(path))
            .collect();

        results.sort_by(|a, b| {
            a.file_name
                .cmp(&b.file_name)
                .then_with(|| a.file_path.cmp(&b.file_path))
        });
        tracing::debug!(
            candidates = candidates.len(),
            matched = results.len(),
            "scan finished"
        );
        results
    }

    /// Every descendant file (including symlinks to files), at any depth.
    /// No ignore rules apply.
    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(self.follow_links)
            .max_depth(self.max_depth)
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("skipping unreadable entry: {e}");
                    None
                }
            })
            .filter(|e| {
                // Linked files count; follow_links only governs linked directories.
                e.file_type().is_some_and(|ft| {
                    ft.is_file() || (ft.is_symlink() && e.path().is_file())
                })
            })
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

/// Classify one file. `None` when the name matches neither grammar or the
/// file cannot be stat'ed.
fn parse_file(path: &Path) -> Option<FileMeta> {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        tracing::trace!(path = %path.display(), "skipping non UTF-8 file name");
        return None;
    };
    let classified = classify_name(file_name)?;

    let file_size = match path.metadata() {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::debug!(path = %path.display(), "cannot stat file: {e}");
            return None;
        }
    };

    Some(FileMeta {
        file_path: path.to_path_buf(),
        file_name: file_name.to_string(),
        file_type: classified.file_type,
        uid: classified.uid,
        date_str: classified.date_str,
        file_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileType;
    use std::fs;
    use tempfile::TempDir;

    fn names(records: &[FileMeta]) -> Vec<&str> {
        records.iter().map(|r| r.file_name.as_str()).collect()
    }

    #[test]
    fn scan_missing_path_is_empty() {
        let tmp = TempDir::new().unwrap();
        let files = FileScanner::new().scan(tmp.path().join("nope"));
        assert!(files.is_empty());
    }

    #[test]
    fn scan_directory_keeps_only_matching_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("42_2025-05.csv"), "a,b\n").unwrap();
        fs::write(tmp.path().join("42_2025-5-3.log"), "gift").unwrap();
        fs::write(tmp.path().join("notes.txt"), "hello").unwrap();

        let files = FileScanner::new().scan(tmp.path());
        assert_eq!(names(&files), vec!["42_2025-05.csv", "42_2025-5-3.log"]);

        let log = &files[1];
        assert_eq!(log.file_type, FileType::Log);
        assert_eq!(log.uid, "42");
        assert_eq!(log.date_str, "2025-05-03");
        assert_eq!(log.file_size, 4);
        assert!(log.file_path.is_absolute());
    }

    #[test]
    fn scan_recurses_and_sorts_by_name() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&deep).unwrap();
        fs::create_dir_all(tmp.path().join(".hidden")).unwrap();
        fs::write(deep.join("1_2025-01-03.log"), "").unwrap();
        fs::write(tmp.path().join("1_2025-01-02.log"), "").unwrap();
        fs::write(tmp.path().join(".hidden").join("1_2025-01-01.log"), "").unwrap();

        let files = FileScanner::new().scan(tmp.path());
        assert_eq!(
            names(&files),
            vec!["1_2025-01-01.log", "1_2025-01-02.log", "1_2025-01-03.log"]
        );
    }

    #[test]
    fn scan_ignores_gitignore_rules() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(".gitignore"), "*.log").unwrap();
        fs::write(tmp.path().join("5_2025-02-02.log"), "").unwrap();

        let files = FileScanner::new().scan(tmp.path());
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn scan_single_file() {
        let tmp = TempDir::new().unwrap();
        let csv = tmp.path().join("77_2024-12.CSV");
        fs::write(&csv, "x").unwrap();
        let other = tmp.path().join("summary.csv");
        fs::write(&other, "x").unwrap();

        let files = FileScanner::new().scan(&csv);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_type, FileType::Csv);
        assert_eq!(files[0].date_str, "2024-12");

        assert!(FileScanner::new().scan(&other).is_empty());
    }

    #[test]
    fn scan_same_name_in_two_dirs_is_ordered_by_path() {
        let tmp = TempDir::new().unwrap();
        for dir in ["z", "a"] {
            fs::create_dir(tmp.path().join(dir)).unwrap();
            fs::write(tmp.path().join(dir).join("3_2025-03.csv"), "").unwrap();
        }
        let files = FileScanner::new().scan(tmp.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].file_path.ends_with("a/3_2025-03.csv"));
        assert!(files[1].file_path.ends_with("z/3_2025-03.csv"));
    }

    #[cfg(unix)]
    #[test]
    fn scan_includes_symlinked_files() {
        let tmp = TempDir::new().unwrap();
        let store = tmp.path().join("store");
        let data = tmp.path().join("data");
        fs::create_dir(&store).unwrap();
        fs::create_dir(&data).unwrap();
        fs::write(store.join("real.bin"), "12345").unwrap();
        std::os::unix::fs::symlink(store.join("real.bin"), data.join("9_2025-01-01.log")).unwrap();
        std::os::unix::fs::symlink(store.join("missing"), data.join("9_2025-01-02.log")).unwrap();

        let files = FileScanner::new().scan(&data);
        assert_eq!(names(&files), vec!["9_2025-01-01.log"]);
        assert_eq!(files[0].uid, "9");
        assert_eq!(files[0].file_size, 5);
    }

    #[test]
    fn max_depth_limits_walk() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(tmp.path().join("1_2025-01.csv"), "").unwrap();
        fs::write(nested.join("2_2025-01.csv"), "").unwrap();

        let scanner = FileScanner::with_settings(&ScanSettings {
            follow_links: false,
            max_depth: Some(1),
        });
        assert_eq!(names(&scanner.scan(tmp.path())), vec!["1_2025-01.csv"]);
    }
}
