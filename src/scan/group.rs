use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::FileMeta;

/// Scan records grouped by streamer UID, in first-seen UID order.
#[derive(Debug, Clone, Default)]
pub struct UidGroups {
    groups: Vec<(String, Vec<FileMeta>)>,
    index: HashMap<String, usize>,
}

impl UidGroups {
    #[must_use]
    pub fn get(&self, uid: &str) -> Option<&[FileMeta]> {
        self.index.get(uid).map(|&i| self.groups[i].1.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn uids(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(uid, _)| uid.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FileMeta])> {
        self.groups
            .iter()
            .map(|(uid, files)| (uid.as_str(), files.as_slice()))
    }

    fn push(&mut self, record: FileMeta) {
        if let Some(&i) = self.index.get(&record.uid) {
            self.groups[i].1.push(record);
        } else {
            self.index.insert(record.uid.clone(), self.groups.len());
            self.groups.push((record.uid.clone(), vec![record]));
        }
    }
}

impl Serialize for UidGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (uid, files) in &self.groups {
            map.serialize_entry(uid, files)?;
        }
        map.end()
    }
}

/// Regroup records by UID, keeping relative order inside each group.
#[must_use]
pub fn group_by_uid(records: impl IntoIterator<Item = FileMeta>) -> UidGroups {
    let mut groups = UidGroups::default();
    for record in records {
        groups.push(record);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileType;
    use std::path::PathBuf;

    fn meta(uid: &str, name: &str) -> FileMeta {
        FileMeta {
            file_path: PathBuf::from("/data").join(name),
            file_name: name.into(),
            file_type: FileType::Log,
            uid: uid.into(),
            date_str: "2025-01-01".into(),
            file_size: 0,
        }
    }

    #[test]
    fn groups_in_first_seen_order() {
        let records = vec![
            meta("9", "a"),
            meta("1", "b"),
            meta("9", "c"),
            meta("5", "d"),
            meta("1", "e"),
        ];
        let groups = group_by_uid(records.clone());

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.uids().collect::<Vec<_>>(), vec!["9", "1", "5"]);

        let order = |uid: &str| -> Vec<String> {
            groups.get(uid).unwrap().iter().map(|m| m.file_name.clone()).collect()
        };
        assert_eq!(order("9"), vec!["a", "c"]);
        assert_eq!(order("1"), vec!["b", "e"]);

        let total: usize = groups.iter().map(|(_, files)| files.len()).sum();
        assert_eq!(total, records.len());
        assert!(groups.get("404").is_none());
    }

    #[test]
    fn leading_zero_uids_are_distinct() {
        let groups = group_by_uid(vec![meta("01", "a"), meta("1", "b")]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn empty_input_gives_empty_groups() {
        assert!(group_by_uid(Vec::new()).is_empty());
    }

    #[test]
    fn serializes_as_ordered_object() {
        let groups = group_by_uid(vec![meta("9", "a"), meta("1", "b")]);
        let json = serde_json::to_string(&groups).unwrap();
        assert!(json.find("\"9\"").unwrap() < json.find("\"1\"").unwrap());
    }
}
