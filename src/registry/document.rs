//! On-disk registry document detection.
//!
//! Writes always produce the canonical `{"streamers": [...]}` layout. Reads
//! also accept the legacy flat map `{"<uid>": {profile}, ...}`.

use serde_json::{Map, Value};

use crate::models::StreamerProfile;
use crate::registry::palette::color_for_uid;

/// Key of the profile array in the canonical layout.
pub const STREAMERS_KEY: &str = "streamers";

/// A parsed registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryDocument {
    /// `{"streamers": [profile, ...]}`.
    Canonical(Vec<StreamerProfile>),
    /// `{"<uid>": profile, ...}`, in file order.
    LegacyMap(Vec<(String, StreamerProfile)>),
    /// Malformed JSON or an unknown shape.
    Unrecognized,
}

impl RegistryDocument {
    /// Detect the layout of `text`. Never fails; unknown input is
    /// [`RegistryDocument::Unrecognized`].
    #[must_use]
    pub fn parse(text: &str, name_prefix: &str) -> Self {
        let Ok(Value::Object(root)) = serde_json::from_str::<Value>(text) else {
            return Self::Unrecognized;
        };

        if root.contains_key(STREAMERS_KEY) {
            return Self::parse_canonical(&root, name_prefix);
        }
        Self::parse_legacy(root, name_prefix)
    }

    fn parse_canonical(root: &Map<String, Value>, name_prefix: &str) -> Self {
        let Some(Value::Array(entries)) = root.get(STREAMERS_KEY) else {
            return Self::Unrecognized;
        };

        let profiles = entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let profile = profile_from_value(entry, name_prefix);
                if profile.is_none() {
                    tracing::warn!(index = i, "skipping registry entry without a uid");
                }
                profile
            })
            .collect();
        Self::Canonical(profiles)
    }

    /// Every value must be profile-shaped, otherwise the whole map is rejected.
    fn parse_legacy(root: Map<String, Value>, name_prefix: &str) -> Self {
        let mut entries = Vec::with_capacity(root.len());
        for (key, value) in root {
            match profile_from_value(&value, name_prefix) {
                Some(profile) => entries.push((key, profile)),
                None => return Self::Unrecognized,
            }
        }
        Self::LegacyMap(entries)
    }

    /// `(key, profile)` pairs in document order. Canonical entries are keyed
    /// by their `uid`, legacy entries by their top-level key.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, StreamerProfile)> {
        match self {
            Self::Canonical(profiles) => profiles
                .into_iter()
                .map(|profile| (profile.uid.clone(), profile))
                .collect(),
            Self::LegacyMap(entries) => entries,
            Self::Unrecognized => Vec::new(),
        }
    }
}

/// Build a profile from a JSON object carrying a string or integer `uid`.
/// Missing display fields get their registration defaults.
fn profile_from_value(value: &Value, name_prefix: &str) -> Option<StreamerProfile> {
    let obj = value.as_object()?;
    let uid = match obj.get("uid")? {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_u64() || n.is_i64() => n.to_string(),
        _ => return None,
    };
    let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

    Some(StreamerProfile {
        name: text("name").unwrap_or_else(|| format!("{name_prefix}{uid}")),
        color: text("color").unwrap_or_else(|| color_for_uid(&uid).to_string()),
        created_at: text("created_at").unwrap_or_default(),
        uid,
    })
}
