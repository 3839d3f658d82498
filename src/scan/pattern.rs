//! Filename grammars for streamer data files.
//!
//! - Log: `<digits>_<YYYY>-<M|MM>-<D|DD>.log`, date normalized to `YYYY-MM-DD`
//! - Summary: `<digits>_<YYYY>-<M|MM>.csv`, date normalized to `YYYY-MM`
//!
//! Extensions match case-insensitively. Calendar validity is not checked.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::FileType;

static LOG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)_([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})\.(?i:log)$")
        .expect("Invalid log filename regex")
});

static CSV_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)_([0-9]{4})-([0-9]{1,2})\.(?i:csv)$")
        .expect("Invalid csv filename regex")
});

/// Metadata recovered from a filename alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub file_type: FileType,
    pub uid: String,
    pub date_str: String,
}

/// Classify a base filename. The log grammar is tried before the summary one.
#[must_use]
pub fn classify_name(file_name: &str) -> Option<Classified> {
    if let Some(caps) = LOG_PATTERN.captures(file_name) {
        return Some(Classified {
            file_type: FileType::Log,
            uid: caps[1].to_string(),
            date_str: format!("{}-{}-{}", &caps[2], pad2(&caps[3]), pad2(&caps[4])),
        });
    }

    if let Some(caps) = CSV_PATTERN.captures(file_name) {
        return Some(Classified {
            file_type: FileType::Csv,
            uid: caps[1].to_string(),
            date_str: format!("{}-{}", &caps[2], pad2(&caps[3])),
        });
    }

    None
}

/// Zero-pad a one- or two-digit component.
fn pad2(component: &str) -> String {
    format!("{component:0>2}")
}
