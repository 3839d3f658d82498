//! Import: scan a path and make sure every UID found has a profile.

use std::path::Path;

use serde::Serialize;

use crate::models::{FileMeta, StreamerProfile};
use crate::registry::StreamerRegistry;
use crate::scan::{group_by_uid, FileScanner};

/// One streamer touched by an import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportEntry {
    pub profile: StreamerProfile,
    /// Whether the profile was created by this import.
    pub new: bool,
    pub files: Vec<FileMeta>,
}

/// Result of an import run.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResult {
    pub streamers: Vec<ImportEntry>,
    pub summary: ImportSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub files: usize,
    pub streamers: usize,
    pub registered: usize,
}

/// Scan `target` and register every previously unseen UID.
///
/// Streamers appear in first-seen order of the name-sorted scan.
pub fn import_path(
    scanner: &FileScanner,
    registry: &mut StreamerRegistry,
    target: &Path,
) -> ImportResult {
    let records = scanner.scan(target);
    let file_count = records.len();
    let groups = group_by_uid(records);

    let mut streamers = Vec::with_capacity(groups.len());
    for (uid, files) in groups.iter() {
        let new = registry.get_streamer(uid).is_none();
        let profile = registry.get_or_register(uid, None).clone();
        streamers.push(ImportEntry {
            profile,
            new,
            files: files.to_vec(),
        });
    }

    let registered = streamers.iter().filter(|e| e.new).count();
    tracing::info!(
        files = file_count,
        streamers = streamers.len(),
        registered,
        "import finished"
    );

    ImportResult {
        summary: ImportSummary {
            files: file_count,
            streamers: streamers.len(),
            registered,
        },
        streamers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn import_registers_each_uid_once() {
        let tmp = TempDir::new().unwrap();
        let data = tmp.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(data.join("2_2025-01-01.log"), "").unwrap();
        fs::write(data.join("1_2025-01-02.log"), "").unwrap();
        fs::write(data.join("2_2025-01.csv"), "").unwrap();
        fs::write(data.join("junk.log"), "").unwrap();

        let mut registry = StreamerRegistry::open(tmp.path().join("streamers.json"), "主播_");
        registry.register_new_streamer("2", Some("Known"));

        let result = import_path(&FileScanner::new(), &mut registry, &data);
        assert_eq!(result.summary.files, 3);
        assert_eq!(result.summary.streamers, 2);
        assert_eq!(result.summary.registered, 1);

        let uids: Vec<&str> = result.streamers.iter().map(|e| e.profile.uid.as_str()).collect();
        assert_eq!(uids, vec!["1", "2"]);
        assert!(result.streamers[0].new);
        assert_eq!(result.streamers[1].profile.name, "Known");
        assert_eq!(result.streamers[1].files.len(), 2);
        assert_eq!(registry.len(), 2);

        let again = import_path(&FileScanner::new(), &mut registry, &data);
        assert_eq!(again.summary.registered, 0);
    }

    #[test]
    fn import_of_missing_path_is_empty() {
        let tmp = TempDir::new().unwrap();
        let mut registry = StreamerRegistry::open(tmp.path().join("streamers.json"), "主播_");
        let result = import_path(&FileScanner::new(), &mut registry, &tmp.path().join("missing"));
        assert!(result.streamers.is_empty());
        assert!(registry.is_empty());
    }
}
