use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::Config;
use crate::error::Result;
use crate::models::StreamerProfile;
use crate::registry::document::RegistryDocument;
use crate::registry::palette::color_for_uid;

/// Canonical on-disk layout.
#[derive(Serialize)]
struct CanonicalDocument<'a> {
    streamers: &'a [StreamerProfile],
}

/// Persistent UID -> profile registry backed by a JSON file.
///
/// The in-memory cache is authoritative while the value lives. Every
/// mutation rewrites the whole file; write failures are logged and the
/// cache is kept. Not safe for concurrent use across processes.
#[derive(Debug)]
pub struct StreamerRegistry {
    path: PathBuf,
    name_prefix: String,
    profiles: Vec<StreamerProfile>,
    index: HashMap<String, usize>,
}

impl StreamerRegistry {
    /// Open the registry at `path`, creating an empty store if missing.
    pub fn open(path: impl Into<PathBuf>, name_prefix: impl Into<String>) -> Self {
        let mut registry = Self {
            path: path.into(),
            name_prefix: name_prefix.into(),
            profiles: Vec::new(),
            index: HashMap::new(),
        };
        registry.ensure_store_exists();
        registry.reload();
        registry
    }

    /// Open the registry at the configured location.
    pub fn from_config(config: &Config) -> Self {
        Self::open(
            config.registry_path(),
            config.settings.registry.name_prefix.clone(),
        )
    }

    fn ensure_store_exists(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), "cannot create registry directory: {e}");
            }
        }
        if !self.path.exists() {
            self.save();
        }
    }

    /// Re-read the backing store, discarding in-memory state.
    pub fn reload(&mut self) {
        self.profiles.clear();
        self.index.clear();

        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "registry file missing");
                return;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "cannot read registry: {e}");
                return;
            }
        };

        let document = RegistryDocument::parse(&text, &self.name_prefix);
        match &document {
            RegistryDocument::Canonical(_) => {}
            RegistryDocument::LegacyMap(_) => {
                tracing::info!(path = %self.path.display(), "loaded legacy registry layout");
            }
            RegistryDocument::Unrecognized => {
                tracing::warn!(
                    path = %self.path.display(),
                    "registry format not recognized, starting empty"
                );
            }
        }
        for (key, profile) in document.into_entries() {
            self.insert(key, profile);
        }
    }

    /// Persist the full cache in canonical layout, logging failures.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            tracing::warn!(path = %self.path.display(), "failed to save registry: {e}");
        }
    }

    /// Persist the full cache in canonical layout.
    pub fn try_save(&self) -> Result<()> {
        let document = CanonicalDocument {
            streamers: &self.profiles,
        };
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        document.serialize(&mut ser)?;
        std::fs::write(&self.path, buf)?;
        Ok(())
    }

    /// Look up by registry key. Legacy-layout entries keep their top-level
    /// key until the next reload of the canonical file.
    #[must_use]
    pub fn get_streamer(&self, uid: &str) -> Option<&StreamerProfile> {
        self.index.get(uid).map(|&i| &self.profiles[i])
    }

    /// Register `uid` with a fresh profile and persist.
    ///
    /// An existing entry for `uid` is overwritten, including its
    /// `created_at`. Use [`Self::get_or_register`] to keep existing profiles.
    pub fn register_new_streamer(&mut self, uid: &str, name: Option<&str>) -> &StreamerProfile {
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{}{uid}", self.name_prefix),
        };
        let profile = StreamerProfile {
            name,
            uid: uid.to_string(),
            color: color_for_uid(uid).to_string(),
            created_at: current_timestamp(),
        };
        tracing::info!(uid = %uid, name = %profile.name, "registered streamer");

        let i = self.insert(uid.to_string(), profile);
        self.save();
        &self.profiles[i]
    }

    /// Existing profile for `uid`, or a newly registered one.
    pub fn get_or_register(&mut self, uid: &str, name: Option<&str>) -> &StreamerProfile {
        let existing = self.index.get(uid).copied();
        match existing {
            Some(i) => &self.profiles[i],
            None => self.register_new_streamer(uid, name),
        }
    }

    /// Update the given fields of an existing profile.
    ///
    /// Empty strings count as absent. Returns whether anything was written.
    pub fn update_streamer_info(
        &mut self,
        uid: &str,
        name: Option<&str>,
        color: Option<&str>,
    ) -> bool {
        let Some(&i) = self.index.get(uid) else {
            return false;
        };
        let profile = &mut self.profiles[i];

        let mut changed = false;
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            profile.name = name.to_string();
            changed = true;
        }
        if let Some(color) = color.filter(|c| !c.is_empty()) {
            profile.color = color.to_string();
            changed = true;
        }

        if changed {
            self.save();
        }
        changed
    }

    /// Snapshot of all profiles in insertion order.
    #[must_use]
    pub fn get_all_streamers(&self) -> Vec<StreamerProfile> {
        self.profiles.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert or overwrite the slot for `key` in place, returning its index.
    fn insert(&mut self, key: String, profile: StreamerProfile) -> usize {
        if let Some(&i) = self.index.get(&key) {
            self.profiles[i] = profile;
            i
        } else {
            let i = self.profiles.len();
            self.index.insert(key, i);
            self.profiles.push(profile);
            i
        }
    }
}

fn current_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
