// SPDX-FileCopyrightText: 2026 Plugset Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SHA-256 content fingerprints used for stale-write detection.

use plugset_core::{FingerprintService, Settings};
use sha2::{Digest, Sha256};

/// Hashes the plugin id and the settings map.
///
/// The map is key-ordered, so two settings with the same content produce the
/// same digest no matter how they were built. Validation errors are not part
/// of the fingerprint.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentFingerprinter;

impl ContentFingerprinter {
    pub fn new() -> Self {
        Self
    }
}

impl FingerprintService for ContentFingerprinter {
    fn fingerprint_of(&self, settings: &Settings) -> String {
        let mut hasher = Sha256::new();
        hasher.update(settings.plugin_id().as_bytes());
        hasher.update([0u8]);
        // BTreeMap<String, SettingValue> serialization cannot fail.
        let canonical = serde_json::to_vec(settings.values()).unwrap_or_default();
        hasher.update(&canonical);
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_lowercase_hex_sha256() {
        let fp = ContentFingerprinter.fingerprint_of(&Settings::new("p"));
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn fingerprint_ignores_insertion_order_and_errors() {
        let a = Settings::new("p").with_settings([("a", "1"), ("b", "2")]);
        let mut b = Settings::new("p").with_settings([("b", "2"), ("a", "1")]);
        b.add_error("a", "bad");

        assert_eq!(
            ContentFingerprinter.fingerprint_of(&a),
            ContentFingerprinter.fingerprint_of(&b)
        );
    }

    #[test]
    fn fingerprint_distinguishes_empty_from_absent() {
        let empty = Settings::new("p").with_settings([("a", Some(""))]);
        let absent = Settings::new("p").with_settings([("a", None::<&str>)]);
        assert_ne!(
            ContentFingerprinter.fingerprint_of(&empty),
            ContentFingerprinter.fingerprint_of(&absent)
        );
    }

    #[test]
    fn fingerprint_depends_on_plugin_id() {
        assert_ne!(
            ContentFingerprinter.fingerprint_of(&Settings::new("p1")),
            ContentFingerprinter.fingerprint_of(&Settings::new("p2"))
        );
    }
}
