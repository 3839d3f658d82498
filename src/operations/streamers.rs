//! Registry lookups and edits that report failures to the caller.

use crate::error::{GiftlogError, Result};
use crate::models::StreamerProfile;
use crate::registry::{is_hex_color, StreamerRegistry};

/// Look up a profile, failing for unknown UIDs.
pub fn get_streamer<'a>(registry: &'a StreamerRegistry, uid: &str) -> Result<&'a StreamerProfile> {
    registry
        .get_streamer(uid)
        .ok_or_else(|| GiftlogError::StreamerNotFound { uid: uid.to_string() })
}

/// Validate and apply a name/color edit, returning the updated profile.
pub fn update_streamer<'a>(
    registry: &'a mut StreamerRegistry,
    uid: &str,
    name: Option<&str>,
    color: Option<&str>,
) -> Result<&'a StreamerProfile> {
    if let Some(color) = color {
        if !is_hex_color(color) {
            return Err(GiftlogError::InvalidColor {
                value: color.to_string(),
            });
        }
    }
    if registry.get_streamer(uid).is_none() {
        return Err(GiftlogError::StreamerNotFound { uid: uid.to_string() });
    }
    registry.update_streamer_info(uid, name, color);
    get_streamer(registry, uid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry(tmp: &TempDir) -> StreamerRegistry {
        StreamerRegistry::open(tmp.path().join("streamers.json"), "主播_")
    }

    #[test]
    fn get_unknown_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let reg = registry(&tmp);
        assert!(matches!(
            get_streamer(&reg, "1"),
            Err(GiftlogError::StreamerNotFound { .. })
        ));
    }

    #[test]
    fn update_rejects_bad_color() {
        let tmp = TempDir::new().unwrap();
        let mut reg = registry(&tmp);
        reg.register_new_streamer("1", None);
        let err = update_streamer(&mut reg, "1", None, Some("red")).unwrap_err();
        assert!(matches!(err, GiftlogError::InvalidColor { .. }));
    }

    #[test]
    fn update_applies_edit() {
        let tmp = TempDir::new().unwrap();
        let mut reg = registry(&tmp);
        reg.register_new_streamer("1", None);
        let profile = update_streamer(&mut reg, "1", Some("Bob"), Some("#ABCDEF")).unwrap();
        assert_eq!(profile.name, "Bob");
        assert_eq!(profile.color, "#ABCDEF");
    }

    #[test]
    fn update_unknown_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let mut reg = registry(&tmp);
        assert!(matches!(
            update_streamer(&mut reg, "9", Some("x"), None),
            Err(GiftlogError::StreamerNotFound { .. })
        ));
    }
}
